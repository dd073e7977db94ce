use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use garde::Validate;

use crate::models::session::Session;

/// The create/update session form.
///
/// Every field is required; the date is a calendar day and is sent as midnight UTC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct SessionForm {
    #[garde(length(min = 1, max = 50))]
    pub name: String,
    #[garde(required)]
    pub date: Option<NaiveDate>,
    #[garde(required)]
    pub teacher_id: Option<u64>,
    #[garde(length(min = 1, max = 2000))]
    pub description: String,
}

impl SessionForm {
    /// Prefills the form from an existing session (update mode).
    pub fn from_session(session: &Session) -> Self {
        Self {
            name: session.name.clone(),
            date: Some(session.date.date_naive()),
            teacher_id: Some(session.teacher_id),
            description: session.description.clone(),
        }
    }

    /// Builds the request body. `None` while a required field is missing.
    ///
    /// The participant list is carried over from `existing` so that an update
    /// does not drop participants.
    pub fn to_session(&self, existing: Option<&Session>) -> Option<Session> {
        let date = Utc.from_utc_datetime(&self.date?.and_time(NaiveTime::MIN));
        Some(Session {
            id: existing.and_then(|s| s.id),
            name: self.name.clone(),
            date,
            teacher_id: self.teacher_id?,
            description: self.description.clone(),
            users: existing.map(|s| s.users.clone()).unwrap_or_default(),
            created_at: None,
            updated_at: None,
        })
    }
}
