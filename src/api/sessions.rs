use reqwest::Method;

use super::{HttpClient, SessionApi};
use crate::error::ClientResult;
use crate::models::session::Session;

const PATH: &str = "/api/session";

/// Client for `/api/session`.
#[derive(Clone)]
pub struct SessionApiClient {
    http: HttpClient,
}

impl SessionApiClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl SessionApi for SessionApiClient {
    async fn all(&self) -> ClientResult<Vec<Session>> {
        self.http.fetch(self.http.request(Method::GET, PATH)).await
    }

    async fn detail(&self, id: u64) -> ClientResult<Session> {
        self.http
            .fetch(self.http.request(Method::GET, &format!("{PATH}/{id}")))
            .await
    }

    async fn create(&self, session: &Session) -> ClientResult<Session> {
        let builder = HttpClient::with_json(self.http.request(Method::POST, PATH), session)?;
        let created: Session = self.http.fetch(builder).await?;
        tracing::info!("✅ Session created: {:?}", created.id);
        Ok(created)
    }

    async fn update(&self, id: u64, session: &Session) -> ClientResult<Session> {
        let builder = HttpClient::with_json(
            self.http.request(Method::PUT, &format!("{PATH}/{id}")),
            session,
        )?;
        self.http.fetch(builder).await
    }

    async fn delete(&self, id: u64) -> ClientResult<()> {
        self.http
            .execute(self.http.request(Method::DELETE, &format!("{PATH}/{id}")))
            .await
    }

    async fn participate(&self, id: u64, user_id: u64) -> ClientResult<()> {
        self.http
            .execute(
                self.http
                    .request(Method::POST, &format!("{PATH}/{id}/participate/{user_id}")),
            )
            .await
    }

    async fn un_participate(&self, id: u64, user_id: u64) -> ClientResult<()> {
        self.http
            .execute(
                self.http
                    .request(Method::DELETE, &format!("{PATH}/{id}/participate/{user_id}")),
            )
            .await
    }
}
