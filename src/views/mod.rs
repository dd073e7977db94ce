//! Headless coordinators for the application's screens.
//!
//! A view owns its form or loaded data, calls the API clients, updates the
//! [`SessionState`] and reports navigation and notices through the injected
//! [`Navigator`] and [`Notifier`]. Rendering is not part of this crate.

use std::fmt;
use std::time::Duration;

use crate::error::{ClientError, ClientResult};
use crate::models::identity::Identity;
use crate::session_state::SessionState;

pub mod app;
pub mod detail;
pub mod form;
pub mod list;
pub mod login;
pub mod me;
pub mod register;

pub use app::AppView;
pub use detail::DetailView;
pub use form::FormView;
pub use list::ListView;
pub use login::LoginView;
pub use me::MeView;
pub use register::RegisterView;

/// How long confirmation notices stay on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);
/// The action label shown on confirmation notices.
pub const NOTICE_ACTION: &str = "Close";

/// The application's routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Login,
    Register,
    Sessions,
    SessionDetail(u64),
    SessionCreate,
    SessionUpdate(u64),
    Me,
    NotFound,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Sessions => "/sessions".to_string(),
            Route::SessionDetail(id) => format!("/sessions/detail/{id}"),
            Route::SessionCreate => "/sessions/create".to_string(),
            Route::SessionUpdate(id) => format!("/sessions/update/{id}"),
            Route::Me => "/me".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Resolves a path; unknown paths map to `NotFound`.
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match segments.as_slice() {
            [""] => Route::Root,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["sessions"] => Route::Sessions,
            ["sessions", "create"] => Route::SessionCreate,
            ["sessions", "detail", id] => id.parse().map_or(Route::NotFound, Route::SessionDetail),
            ["sessions", "update", id] => id.parse().map_or(Route::NotFound, Route::SessionUpdate),
            ["me"] => Route::Me,
            _ => Route::NotFound,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Performs navigation on behalf of a view.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);

    /// Returns to the previous entry of the history.
    fn back(&self);
}

/// Shows transient confirmation notices.
pub trait Notifier: Send + Sync {
    fn open(&self, message: &str, action: &str, duration: Duration);
}

impl<T: Navigator> Navigator for std::sync::Arc<T> {
    fn navigate(&self, route: Route) {
        (**self).navigate(route)
    }

    fn back(&self) {
        (**self).back()
    }
}

impl<T: Notifier> Notifier for std::sync::Arc<T> {
    fn open(&self, message: &str, action: &str, duration: Duration) {
        (**self).open(message, action, duration)
    }
}

/// A notifier that only logs; used when no UI surface is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn open(&self, message: &str, action: &str, duration: Duration) {
        tracing::info!("🔔 {} [{}] ({:?})", message, action, duration);
    }
}

/// Returns the stored identity, or sends the user to the login page.
pub(crate) fn require_identity<N: Navigator>(
    session: &SessionState,
    navigator: &N,
) -> ClientResult<Identity> {
    session.identity().ok_or_else(|| {
        tracing::warn!("❌ No identity stored, redirecting to login");
        navigator.navigate(Route::Login);
        ClientError::NotAuthenticated
    })
}
