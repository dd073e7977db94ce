use crate::api::AuthApi;
use crate::models::auth::RegisterRequest;
use crate::validation::auth::is_valid;

use super::{Navigator, Route};

/// The registration screen.
pub struct RegisterView<A, N> {
    auth: A,
    navigator: N,
    pub form: RegisterRequest,
    pub on_error: bool,
}

impl<A: AuthApi, N: Navigator> RegisterView<A, N> {
    pub fn new(auth: A, navigator: N) -> Self {
        Self {
            auth,
            navigator,
            form: RegisterRequest::default(),
            on_error: false,
        }
    }

    pub fn can_submit(&self) -> bool {
        is_valid(&self.form)
    }

    /// Creates the account and moves on to the login page, or raises
    /// `on_error` and stays here.
    pub async fn submit(&mut self) {
        if !self.can_submit() {
            tracing::debug!("Register form is invalid, submit ignored");
            return;
        }

        match self.auth.register(&self.form).await {
            Ok(()) => {
                self.on_error = false;
                self.navigator.navigate(Route::Login);
            }
            Err(e) => {
                tracing::warn!("❌ Registration failed: {}", e);
                self.on_error = true;
            }
        }
    }
}
