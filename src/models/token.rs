use chrono::{DateTime, Utc};

/// A bearer token issued at login, stored under the SHA-256 digest of its value.
#[derive(Debug, Clone)]
pub struct AuthToken {
    /// The ID of the user this token belongs to.
    pub user_id: u64,
    /// The timestamp when the token was issued.
    pub created_at: DateTime<Utc>,
    /// The timestamp when the token expires.
    pub expires_at: DateTime<Utc>,
}

impl AuthToken {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// The caller resolved by the bearer middleware, inserted as a request extension.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: u64,
}
