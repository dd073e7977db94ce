use std::sync::Arc;

use crate::api::AuthApi;
use crate::models::auth::LoginRequest;
use crate::session_state::SessionState;
use crate::validation::auth::is_valid;

use super::{Navigator, Route};

/// The login screen.
pub struct LoginView<A, N> {
    auth: A,
    session: Arc<SessionState>,
    navigator: N,
    /// The bound form.
    pub form: LoginRequest,
    /// Set when the last submission was rejected; drives the inline error notice.
    pub on_error: bool,
    /// Whether the password field is masked.
    pub hide_password: bool,
}

impl<A: AuthApi, N: Navigator> LoginView<A, N> {
    pub fn new(auth: A, session: Arc<SessionState>, navigator: N) -> Self {
        Self {
            auth,
            session,
            navigator,
            form: LoginRequest::default(),
            on_error: false,
            hide_password: true,
        }
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        is_valid(&self.form)
    }

    /// Logs in with the form's credentials.
    ///
    /// On success the identity is stored and the user lands on the session
    /// list. On failure the holder is left untouched and `on_error` is raised.
    /// Does nothing while the form is invalid.
    pub async fn submit(&mut self) {
        if !self.can_submit() {
            tracing::debug!("Login form is invalid, submit ignored");
            return;
        }

        match self.auth.login(&self.form).await {
            Ok(identity) => {
                self.on_error = false;
                self.session.log_in(identity);
                self.navigator.navigate(Route::Sessions);
            }
            Err(e) => {
                tracing::warn!("❌ Login failed: {}", e);
                self.on_error = true;
            }
        }
    }
}
