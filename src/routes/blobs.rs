use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::{json, value::RawValue, Value};

use crate::auth::AuthUser;
use crate::constants::{ERR_DOCUMENT_NOT_OBJECT, WARN_DOCUMENT_SIZE_BYTES};
use crate::db::blobs;
use crate::error::{AppError, Result};
use crate::models::BlobKind;
use crate::AppState;

type JsonBody = std::result::Result<Json<Box<RawValue>>, JsonRejection>;

/// Get the stored learning progress, `{}` before the first save
pub async fn get_progress(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Box<RawValue>>> {
    load(&state, user.id, BlobKind::Progress).await
}

/// Replace the stored learning progress
pub async fn save_progress(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: JsonBody,
) -> Result<Json<Value>> {
    store(&state, user.id, BlobKind::Progress, payload).await
}

/// Get the stored navigation state, `{}` before the first save
pub async fn get_navigation(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Box<RawValue>>> {
    load(&state, user.id, BlobKind::Navigation).await
}

/// Replace the stored navigation state
pub async fn save_navigation(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: JsonBody,
) -> Result<Json<Value>> {
    store(&state, user.id, BlobKind::Navigation, payload).await
}

async fn load(state: &AppState, user_id: i64, kind: BlobKind) -> Result<Json<Box<RawValue>>> {
    let document = blobs::get_document(&state.db, user_id, kind).await?;
    tracing::debug!("Loaded {} document for user {}", kind, user_id);

    Ok(Json(document))
}

async fn store(
    state: &AppState,
    user_id: i64,
    kind: BlobKind,
    payload: JsonBody,
) -> Result<Json<Value>> {
    let Json(document) = payload?;
    if !is_object(&document) {
        return Err(AppError::InvalidInput(ERR_DOCUMENT_NOT_OBJECT.to_string()));
    }

    let size = blobs::put_document(&state.db, user_id, kind, &document).await?;

    // Log large documents (monitoring)
    if size > WARN_DOCUMENT_SIZE_BYTES {
        tracing::info!(
            "Large {} document from user {}: {} bytes",
            kind,
            user_id,
            size
        );
    }

    tracing::info!("Saved {} document for user {}: {} bytes", kind, user_id, size);

    Ok(Json(json!({ "ok": true })))
}

/// Top-level JSON value is an object
fn is_object(document: &RawValue) -> bool {
    document.get().trim_start().starts_with('{')
}
