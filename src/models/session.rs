use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};

/// A scheduled yoga class.
///
/// `id`, `createdAt` and `updatedAt` are owned by the backend; they are absent
/// on the body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Session {
    #[garde(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[garde(length(min = 1, max = 50))]
    pub name: String,
    #[garde(skip)]
    pub date: DateTime<Utc>,
    #[garde(skip)]
    pub teacher_id: u64,
    #[garde(length(min = 1, max = 2500))]
    pub description: String,
    /// Ids of the participating users, in the order they joined.
    #[garde(skip)]
    #[serde(default)]
    pub users: Vec<u64>,
    #[garde(skip)]
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[garde(skip)]
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Whether `user_id` is in the participant list.
    pub fn has_participant(&self, user_id: u64) -> bool {
        self.users.contains(&user_id)
    }
}
