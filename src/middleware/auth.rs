//! API key authentication middleware.
//!
//! Resolves the bearer token on every protected request to the ledger user
//! that owns it:
//! 1. Extract the API key from the Authorization header
//! 2. Hash it and look it up among active keys
//! 3. Inject the user's identity into the request
//! 4. Reject unknown keys with HTTP 401

use crate::{db::DbPool, error::AppError, models::api_key::ApiKey};
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Identity of the user a request acts for.
///
/// Inserted into request extensions; report handlers pass `user_id` into
/// every ledger query.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,

    pub username: String,
}

/// Extract the token from an `Authorization: Bearer <key>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

/// Hex-encoded SHA-256 of an API key, as stored in `api_keys.key_hash`.
fn hash_key(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hex::encode(hasher.finalize())
}

/// API key authentication middleware function.
///
/// # Returns
///
/// - `Ok(Response)` from the next handler when the key is active
/// - `Err(AppError::UnauthenticatedAccess)` when the header is missing,
///   malformed, or names no active key
pub async fn auth_middleware(
    State(pool): State<DbPool>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let api_key = bearer_token(request.headers()).ok_or(AppError::UnauthenticatedAccess)?;
    let key_hash = hash_key(api_key);

    let api_key_record = sqlx::query_as::<_, ApiKey>(
        "SELECT k.id, k.user_id, u.username
         FROM api_keys k
         JOIN users u ON u.id = k.user_id
         WHERE k.key_hash = $1 AND k.is_active = true",
    )
    .bind(&key_hash)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::UnauthenticatedAccess)?;

    tracing::debug!(
        "API key {} authenticated user {}",
        api_key_record.id,
        api_key_record.user_id
    );

    request.extensions_mut().insert(AuthContext {
        user_id: api_key_record.user_id,
        username: api_key_record.username,
    });

    Ok(next.run(request).await)
}
