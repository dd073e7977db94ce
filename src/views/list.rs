use std::sync::Arc;

use crate::api::SessionApi;
use crate::error::ClientResult;
use crate::models::identity::Identity;
use crate::models::session::Session;
use crate::session_state::SessionState;

/// The session list.
pub struct ListView<S> {
    sessions_api: S,
    session: Arc<SessionState>,
    /// The sessions fetched by the last `load`.
    pub sessions: Vec<Session>,
}

impl<S: SessionApi> ListView<S> {
    pub fn new(sessions_api: S, session: Arc<SessionState>) -> Self {
        Self {
            sessions_api,
            session,
            sessions: Vec::new(),
        }
    }

    /// Fetches every session, replacing whatever was loaded before.
    pub async fn load(&mut self) -> ClientResult<&[Session]> {
        self.sessions = self.sessions_api.all().await?;
        tracing::debug!("Loaded {} sessions", self.sessions.len());
        Ok(self.sessions.as_slice())
    }

    /// The logged-in user, read at call time.
    pub fn user(&self) -> Option<Identity> {
        self.session.identity()
    }

    /// Whether the "Create" button is shown.
    pub fn can_create(&self) -> bool {
        self.session.is_admin()
    }

    /// Whether each card shows an "Edit" button.
    pub fn can_edit(&self) -> bool {
        self.session.is_admin()
    }
}
