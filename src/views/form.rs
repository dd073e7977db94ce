use std::sync::Arc;

use garde::Validate;

use crate::api::{SessionApi, TeacherApi};
use crate::error::{ClientError, ClientResult};
use crate::models::session::Session;
use crate::models::teacher::Teacher;
use crate::session_state::SessionState;
use crate::validation::session::SessionForm;

use super::{Navigator, Notifier, Route, NOTICE_ACTION, NOTICE_DURATION};

/// The create/update session screen. Admins only.
pub struct FormView<S, T, N, M> {
    sessions_api: S,
    teachers_api: T,
    state: Arc<SessionState>,
    navigator: N,
    notifier: M,
    route: Route,
    /// The session being edited, as loaded in update mode.
    original: Option<Session>,
    pub form: SessionForm,
    /// Choices for the teacher selector.
    pub teachers: Vec<Teacher>,
    pub on_update: bool,
}

impl<S, T, N, M> FormView<S, T, N, M>
where
    S: SessionApi,
    T: TeacherApi,
    N: Navigator,
    M: Notifier,
{
    /// `route` is the route the view was opened on; `SessionUpdate(id)` selects
    /// update mode, anything else creates.
    pub fn new(
        sessions_api: S,
        teachers_api: T,
        state: Arc<SessionState>,
        navigator: N,
        notifier: M,
        route: Route,
    ) -> Self {
        Self {
            sessions_api,
            teachers_api,
            state,
            navigator,
            notifier,
            route,
            original: None,
            form: SessionForm::default(),
            teachers: Vec::new(),
            on_update: false,
        }
    }

    /// Redirects non-admins to the list; otherwise loads the teachers and, in
    /// update mode, the session to edit.
    pub async fn init(&mut self) -> ClientResult<()> {
        if !self.state.is_admin() {
            tracing::warn!("❌ Session form opened without admin rights");
            self.navigator.navigate(Route::Sessions);
            return Ok(());
        }

        self.teachers = self.teachers_api.all().await?;

        match self.route {
            Route::SessionUpdate(id) => {
                self.on_update = true;
                let session = self.sessions_api.detail(id).await?;
                self.form = SessionForm::from_session(&session);
                self.original = Some(session);
            }
            _ => {
                self.on_update = false;
                self.original = None;
                self.form = SessionForm::default();
            }
        }

        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        self.form.validate().is_ok()
    }

    /// Creates or updates the session, confirms it and returns to the list.
    pub async fn submit(&mut self) -> ClientResult<()> {
        self.form
            .validate()
            .map_err(|report| ClientError::InvalidForm(report.to_string()))?;

        let body = self
            .form
            .to_session(self.original.as_ref())
            .ok_or_else(|| ClientError::InvalidForm("missing required field".to_string()))?;

        let message = match self.route {
            Route::SessionUpdate(id) if self.on_update => {
                self.sessions_api.update(id, &body).await?;
                "Session updated !"
            }
            _ => {
                self.sessions_api.create(&body).await?;
                "Session created !"
            }
        };

        self.notifier.open(message, NOTICE_ACTION, NOTICE_DURATION);
        self.navigator.navigate(Route::Sessions);
        Ok(())
    }
}
