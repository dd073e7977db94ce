use std::sync::Arc;

use futures::Stream;

use crate::session_state::SessionState;

use super::{Navigator, Route};

/// The application shell: toolbar links depend on the login flag.
pub struct AppView<N> {
    session: Arc<SessionState>,
    navigator: N,
}

impl<N: Navigator> AppView<N> {
    pub fn new(session: Arc<SessionState>, navigator: N) -> Self {
        Self { session, navigator }
    }

    /// The login flag, replaying the current value first.
    pub fn is_logged_stream(&self) -> impl Stream<Item = bool> + Send + use<N> {
        self.session.is_logged_stream()
    }

    pub fn logout(&self) {
        self.session.log_out();
        self.navigator.navigate(Route::Root);
    }
}
