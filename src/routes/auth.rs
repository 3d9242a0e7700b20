use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;

use crate::auth::AuthUser;
use crate::constants::TOKEN_TYPE;
use crate::error::Result;
use crate::models::{Credentials, PublicUser};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user_id: i64,
}

/// Register a new user
///
/// Returns the public identity `{id, email}`; the password hash never
/// leaves the server. Returns 409 Conflict if the email is taken.
pub async fn register_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<PublicUser>> {
    let Json(credentials) = payload?;
    let user = state.auth.register(&credentials).await?;

    Ok(Json(user))
}

/// Exchange email + password for a bearer token
///
/// Unknown email and wrong password produce the same 401 response.
pub async fn login_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(credentials) = payload?;
    let outcome = state.auth.login(&credentials).await?;

    Ok(Json(LoginResponse {
        access_token: outcome.token.token,
        token_type: TOKEN_TYPE,
        user_id: outcome.user_id,
    }))
}

/// Current user resolved from the bearer token
pub async fn current_user(AuthUser(user): AuthUser) -> Json<PublicUser> {
    Json(user)
}
