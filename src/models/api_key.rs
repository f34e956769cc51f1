//! API key model for authentication.
//!
//! Each key belongs to one ledger user. Keys are stored as SHA-256 hashes and
//! looked up by hash; the hash itself is not loaded.

use uuid::Uuid;

/// An active API key joined with the user that owns it.
///
/// # Database Tables
///
/// Read from `api_keys` joined to `users`:
/// - `id`: key identifier
/// - `user_id`: owner of the key; every report query is scoped to it
/// - `username`: owner's display name
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApiKey {
    pub id: Uuid,

    pub user_id: Uuid,

    pub username: String,
}
