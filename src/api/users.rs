use reqwest::Method;

use super::{HttpClient, UserApi};
use crate::error::ClientResult;
use crate::models::user::User;

/// Client for `/api/user`.
#[derive(Clone)]
pub struct UserClient {
    http: HttpClient,
}

impl UserClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl UserApi for UserClient {
    async fn get_by_id(&self, id: u64) -> ClientResult<User> {
        self.http
            .fetch(self.http.request(Method::GET, &format!("/api/user/{id}")))
            .await
    }

    async fn delete(&self, id: u64) -> ClientResult<()> {
        tracing::info!("🗑️ Deleting account {}", id);
        self.http
            .execute(self.http.request(Method::DELETE, &format!("/api/user/{id}")))
            .await
    }
}
