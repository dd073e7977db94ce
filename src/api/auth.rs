use reqwest::Method;

use super::{AuthApi, HttpClient};
use crate::error::ClientResult;
use crate::models::auth::{LoginRequest, RegisterRequest};
use crate::models::identity::Identity;

/// Client for `/api/auth`.
#[derive(Clone)]
pub struct AuthClient {
    http: HttpClient,
}

impl AuthClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl AuthApi for AuthClient {
    /// Creates an account. The backend answers with an empty body.
    async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        tracing::info!("📝 Registering {}", request.email);
        let builder = HttpClient::with_json(
            self.http.request(Method::POST, "/api/auth/register"),
            request,
        )?;
        self.http.execute(builder).await
    }

    /// Exchanges credentials for an [`Identity`].
    ///
    /// The returned identity is not stored; the caller decides what to do with it.
    async fn login(&self, request: &LoginRequest) -> ClientResult<Identity> {
        tracing::info!("🔐 Login attempt for {}", request.email);
        let builder = HttpClient::with_json(
            self.http.request(Method::POST, "/api/auth/login"),
            request,
        )?;
        self.http.fetch(builder).await
    }
}
