//! HTTP clients for the booking REST API.
//!
//! Every client is a thin wrapper over [`HttpClient`]: one request per call, no
//! caching, no retries. The traits below are the seams the views depend on, so
//! the views can be driven by the HTTP clients or by test doubles.

use std::future::Future;
use std::sync::Arc;

use reqwest::{header, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::auth::{LoginRequest, RegisterRequest};
use crate::models::identity::Identity;
use crate::models::session::Session;
use crate::models::teacher::Teacher;
use crate::models::user::User;
use crate::session_state::SessionState;

pub mod auth;
pub mod sessions;
pub mod teachers;
pub mod users;

pub use auth::AuthClient;
pub use sessions::SessionApiClient;
pub use teachers::TeacherClient;
pub use users::UserClient;

/// Registration and login.
pub trait AuthApi: Send + Sync {
    fn register(&self, request: &RegisterRequest) -> impl Future<Output = ClientResult<()>> + Send;
    fn login(&self, request: &LoginRequest) -> impl Future<Output = ClientResult<Identity>> + Send;
}

/// Session CRUD and participation.
pub trait SessionApi: Send + Sync {
    fn all(&self) -> impl Future<Output = ClientResult<Vec<Session>>> + Send;
    fn detail(&self, id: u64) -> impl Future<Output = ClientResult<Session>> + Send;
    fn create(&self, session: &Session) -> impl Future<Output = ClientResult<Session>> + Send;
    fn update(&self, id: u64, session: &Session) -> impl Future<Output = ClientResult<Session>> + Send;
    fn delete(&self, id: u64) -> impl Future<Output = ClientResult<()>> + Send;
    fn participate(&self, id: u64, user_id: u64) -> impl Future<Output = ClientResult<()>> + Send;
    fn un_participate(&self, id: u64, user_id: u64) -> impl Future<Output = ClientResult<()>> + Send;
}

/// Read access to teachers.
pub trait TeacherApi: Send + Sync {
    fn all(&self) -> impl Future<Output = ClientResult<Vec<Teacher>>> + Send;
    fn detail(&self, id: u64) -> impl Future<Output = ClientResult<Teacher>> + Send;
}

/// Read and delete access to user profiles.
pub trait UserApi: Send + Sync {
    fn get_by_id(&self, id: u64) -> impl Future<Output = ClientResult<User>> + Send;
    fn delete(&self, id: u64) -> impl Future<Output = ClientResult<()>> + Send;
}

impl<T: AuthApi> AuthApi for Arc<T> {
    fn register(&self, request: &RegisterRequest) -> impl Future<Output = ClientResult<()>> + Send {
        (**self).register(request)
    }

    fn login(&self, request: &LoginRequest) -> impl Future<Output = ClientResult<Identity>> + Send {
        (**self).login(request)
    }
}

impl<T: SessionApi> SessionApi for Arc<T> {
    fn all(&self) -> impl Future<Output = ClientResult<Vec<Session>>> + Send {
        (**self).all()
    }

    fn detail(&self, id: u64) -> impl Future<Output = ClientResult<Session>> + Send {
        (**self).detail(id)
    }

    fn create(&self, session: &Session) -> impl Future<Output = ClientResult<Session>> + Send {
        (**self).create(session)
    }

    fn update(&self, id: u64, session: &Session) -> impl Future<Output = ClientResult<Session>> + Send {
        (**self).update(id, session)
    }

    fn delete(&self, id: u64) -> impl Future<Output = ClientResult<()>> + Send {
        (**self).delete(id)
    }

    fn participate(&self, id: u64, user_id: u64) -> impl Future<Output = ClientResult<()>> + Send {
        (**self).participate(id, user_id)
    }

    fn un_participate(&self, id: u64, user_id: u64) -> impl Future<Output = ClientResult<()>> + Send {
        (**self).un_participate(id, user_id)
    }
}

impl<T: TeacherApi> TeacherApi for Arc<T> {
    fn all(&self) -> impl Future<Output = ClientResult<Vec<Teacher>>> + Send {
        (**self).all()
    }

    fn detail(&self, id: u64) -> impl Future<Output = ClientResult<Teacher>> + Send {
        (**self).detail(id)
    }
}

impl<T: UserApi> UserApi for Arc<T> {
    fn get_by_id(&self, id: u64) -> impl Future<Output = ClientResult<User>> + Send {
        (**self).get_by_id(id)
    }

    fn delete(&self, id: u64) -> impl Future<Output = ClientResult<()>> + Send {
        (**self).delete(id)
    }
}

/// Shared HTTP plumbing: base URL, bearer header, JSON encoding and status mapping.
#[derive(Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionState>,
}

impl HttpClient {
    /// Creates a client that sends requests under `base_url` and authenticates
    /// with whatever identity `session` holds at request time.
    pub fn new(base_url: impl Into<String>, session: Arc<SessionState>) -> ClientResult<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_client(http, base_url, session))
    }

    /// Creates a client targeting the configured `api_base_url`.
    pub fn from_config(config: &Config, session: Arc<SessionState>) -> ClientResult<Self> {
        Self::new(config.api_base_url.clone(), session)
    }

    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        session: Arc<SessionState>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionState> {
        &self.session
    }

    /// Starts a request to `path` (which must begin with `/`), adding the bearer
    /// header when an identity is stored.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("➡️  {} {}", method, url);

        let builder = self.http.request(method, url);
        match self.session.identity() {
            Some(identity) => builder.header(header::AUTHORIZATION, identity.authorization()),
            None => builder,
        }
    }

    /// Attaches `body` encoded as JSON.
    pub(crate) fn with_json<B: Serialize>(
        builder: RequestBuilder,
        body: &B,
    ) -> ClientResult<RequestBuilder> {
        let bytes = sonic_rs::to_vec(body)?;
        Ok(builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(bytes))
    }

    /// Sends the request and decodes a JSON body.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let response = Self::check(builder.send().await?).await?;
        let bytes = response.bytes().await?;
        Ok(sonic_rs::from_slice(&bytes)?)
    }

    /// Sends the request and discards the body.
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> ClientResult<()> {
        Self::check(builder.send().await?).await?;
        Ok(())
    }

    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = sonic_rs::from_slice::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown").to_string());

        tracing::warn!("⚠️  Request failed with {}: {}", status, message);
        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}
