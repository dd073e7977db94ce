use reqwest::Method;

use super::{HttpClient, TeacherApi};
use crate::error::ClientResult;
use crate::models::teacher::Teacher;

/// Client for `/api/teacher`.
#[derive(Clone)]
pub struct TeacherClient {
    http: HttpClient,
}

impl TeacherClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl TeacherApi for TeacherClient {
    async fn all(&self) -> ClientResult<Vec<Teacher>> {
        self.http
            .fetch(self.http.request(Method::GET, "/api/teacher"))
            .await
    }

    async fn detail(&self, id: u64) -> ClientResult<Teacher> {
        self.http
            .fetch(self.http.request(Method::GET, &format!("/api/teacher/{id}")))
            .await
    }
}
