use serde::{Deserialize, Serialize};

/// The authenticated user's profile and bearer credentials, as returned by login.
///
/// Held in memory only: it is never written to disk and does not survive a restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The user's numeric id.
    pub id: u64,
    /// The login name (the account email).
    pub username: String,
    /// The user's first name.
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// The user's last name.
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Whether the user may create, edit and delete sessions.
    pub admin: bool,
    /// The bearer token to attach to API requests.
    pub token: String,
    /// The token scheme, always `Bearer`.
    #[serde(rename = "type")]
    pub token_type: String,
}

impl Identity {
    /// Formats the `Authorization` header value for this identity.
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.token)
    }
}
