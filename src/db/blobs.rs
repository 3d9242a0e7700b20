//! Blob store: one opaque JSON document per (user, kind)
//!
//! Documents are kept as the exact text the client sent. Nothing is parsed
//! into a `Value`, so key order and number precision survive the round trip.

use serde_json::value::RawValue;
use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::BlobKind;

/// Document returned before the first save
pub const EMPTY_DOCUMENT: &str = "{}";

/// Fetch the stored document, or an empty object if none has been saved
pub async fn get_document(
    pool: &SqlitePool,
    user_id: i64,
    kind: BlobKind,
) -> Result<Box<RawValue>> {
    let sql = format!(
        "SELECT {} FROM {} WHERE user_id = ?",
        kind.data_column(),
        kind.table()
    );

    let stored = sqlx::query_scalar::<_, String>(&sql)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    let text = stored.unwrap_or_else(|| EMPTY_DOCUMENT.to_string());
    Ok(RawValue::from_string(text)?)
}

/// Replace (or create) the document for `(user_id, kind)`
///
/// Single upsert statement: the previous document is overwritten wholesale
/// and concurrent writers resolve to whichever commits last. Returns the
/// stored size in bytes.
pub async fn put_document(
    pool: &SqlitePool,
    user_id: i64,
    kind: BlobKind,
    document: &RawValue,
) -> Result<usize> {
    let text = document.get();
    let sql = format!(
        "INSERT INTO {table} (user_id, {column}) VALUES (?, ?) \
         ON CONFLICT(user_id) DO UPDATE SET {column} = excluded.{column}",
        table = kind.table(),
        column = kind.data_column()
    );

    sqlx::query(&sql)
        .bind(user_id)
        .bind(text)
        .execute(pool)
        .await?;

    Ok(text.len())
}
