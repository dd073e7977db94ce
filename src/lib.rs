//! Booking client core for a yoga studio: the logged-in session holder, typed
//! clients for the REST API, headless screen coordinators, and an in-memory
//! reference backend serving the same API.

pub mod config;
pub mod error;
pub mod session_state;
pub mod state;
pub mod db;
pub mod routes;

pub mod crypto {
    pub mod token;
}

pub mod models {
    pub mod auth;
    pub mod identity;
    pub mod session;
    pub mod teacher;
    pub mod token;
    pub mod user;
}

pub mod repositories {
    pub mod session;
    pub mod teacher;
    pub mod token;
    pub mod user;
}

pub mod services {
    pub mod auth;
    pub mod sessions;
    pub mod teachers;
    pub mod users;
}

pub mod handlers {
    pub mod auth;
    pub mod json;
    pub mod sessions;
    pub mod teachers;
    pub mod users;
}

pub mod middleware_layer {
    pub mod auth;
}

pub mod validation {
    pub mod auth;
    pub mod session;
}

pub mod api;
pub mod views;

pub use config::Config;
pub use error::{AppError, ClientError, ClientResult};
pub use session_state::{SessionState, Subscription};
pub use state::AppState;
