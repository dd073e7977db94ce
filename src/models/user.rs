use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user profile as exposed by `/api/user/{id}`.
///
/// `password` is write-only: the backend never fills it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A user row as stored by the reference backend.
#[derive(Clone, Debug)]
pub struct UserRecord {
    /// The unique identifier for the user.
    pub id: u64,
    /// The user's email address, also used as login name.
    pub email: String,
    /// The user's first name.
    pub first_name: String,
    /// The user's last name.
    pub last_name: String,
    /// The user's Argon2id password hash.
    pub password_hash: String,
    /// Whether the user is an administrator.
    pub admin: bool,
    /// The timestamp when the user was created.
    pub created_at: DateTime<Utc>,
    /// The timestamp when the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl From<&UserRecord> for User {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            email: record.email.clone(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            admin: record.admin,
            password: None,
            created_at: Some(record.created_at),
            updated_at: Some(record.updated_at),
        }
    }
}
