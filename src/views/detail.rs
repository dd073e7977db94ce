use std::sync::Arc;

use crate::api::{SessionApi, TeacherApi};
use crate::error::ClientResult;
use crate::models::session::Session;
use crate::models::teacher::Teacher;
use crate::session_state::SessionState;

use super::{require_identity, Navigator, Notifier, Route, NOTICE_ACTION, NOTICE_DURATION};

/// The detail page of one session.
pub struct DetailView<S, T, N, M> {
    sessions_api: S,
    teachers_api: T,
    state: Arc<SessionState>,
    navigator: N,
    notifier: M,
    session_id: u64,
    pub session: Option<Session>,
    pub teacher: Option<Teacher>,
    /// Whether the logged-in user is in the participant list.
    pub is_participating: bool,
    /// Whether the Delete button is shown.
    pub is_admin: bool,
}

impl<S, T, N, M> DetailView<S, T, N, M>
where
    S: SessionApi,
    T: TeacherApi,
    N: Navigator,
    M: Notifier,
{
    pub fn new(
        sessions_api: S,
        teachers_api: T,
        state: Arc<SessionState>,
        navigator: N,
        notifier: M,
        session_id: u64,
    ) -> Self {
        let is_admin = state.is_admin();
        Self {
            sessions_api,
            teachers_api,
            state,
            navigator,
            notifier,
            session_id,
            session: None,
            teacher: None,
            is_participating: false,
            is_admin,
        }
    }

    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    /// Loads the session, then the teacher it references.
    ///
    /// The teacher id only exists once the first response is in, so the two
    /// requests run in sequence. If the session cannot be fetched the error is
    /// returned and the teacher is not requested.
    pub async fn load(&mut self) -> ClientResult<()> {
        let identity = require_identity(&self.state, &self.navigator)?;

        let session = self.sessions_api.detail(self.session_id).await?;
        self.is_participating = session.has_participant(identity.id);
        self.is_admin = identity.admin;
        let teacher_id = session.teacher_id;
        self.session = Some(session);

        self.teacher = Some(self.teachers_api.detail(teacher_id).await?);
        Ok(())
    }

    /// Deletes the session, confirms it and returns to the list.
    pub async fn delete(&mut self) -> ClientResult<()> {
        self.sessions_api.delete(self.session_id).await?;
        self.notifier
            .open("Session deleted !", NOTICE_ACTION, NOTICE_DURATION);
        self.navigator.navigate(Route::Sessions);
        Ok(())
    }

    /// Joins the session, then reloads it.
    pub async fn participate(&mut self) -> ClientResult<()> {
        let identity = require_identity(&self.state, &self.navigator)?;
        self.sessions_api
            .participate(self.session_id, identity.id)
            .await?;
        self.load().await
    }

    /// Leaves the session, then reloads it.
    pub async fn un_participate(&mut self) -> ClientResult<()> {
        let identity = require_identity(&self.state, &self.navigator)?;
        self.sessions_api
            .un_participate(self.session_id, identity.id)
            .await?;
        self.load().await
    }

    pub fn back(&self) {
        self.navigator.back();
    }
}
