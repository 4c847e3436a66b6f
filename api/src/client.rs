use crate::{Error, Result};
use reqwest::{Method, RequestBuilder};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::{Arc, RwLock};
use types::{
    AttendanceDraft, AttendanceRecord, Employee, EmployeeDraft, LoginRequest, LoginResponse,
    RegisterRequest, ReportRequest, Session,
};

/// Authenticated HTTP client for the HR backend.
///
/// Wraps outbound calls with a base URL and, once a session exists, a bearer
/// token. The session lifecycle is explicit: set by [`ApiClient::login`],
/// cleared by [`ApiClient::logout`], read once per request. No retries, no
/// caching, no deduplication.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<RwLock<Option<Session>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            session: Arc::new(RwLock::new(None)),
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.session.read().ok().and_then(|guard| guard.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    fn store_session(&self, session: Option<Session>) {
        if let Ok(mut guard) = self.session.write() {
            *guard = session;
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{path}", self.base_url));
        match self.session() {
            Some(session) => builder.bearer_auth(session.token().expose_secret()),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = Error::from_response_parts(status.as_u16(), &body);
        tracing::warn!(status = status.as_u16(), message = err.message(), "request failed");
        Err(err)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Ok(response.json().await?)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        let response = self.send(self.request(method, path).json(body)).await?;
        Ok(response.json().await?)
    }

    // Auth

    pub async fn login(&self, request: &LoginRequest) -> Result<Session> {
        let response: LoginResponse = self.send_json(Method::POST, "/login", request).await?;
        let session = Session::new(request.username.clone(), response);
        self.store_session(Some(session.clone()));
        tracing::info!(username = %session.username, "logged in");
        Ok(session)
    }

    pub fn logout(&self) {
        self.store_session(None);
        tracing::info!("session cleared");
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.send(self.request(Method::POST, "/register").json(request))
            .await?;
        Ok(())
    }

    // Employees

    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.get_json("/employees").await
    }

    pub async fn create_employee(&self, draft: &EmployeeDraft) -> Result<Employee> {
        self.send_json(Method::POST, "/employees", draft).await
    }

    pub async fn update_employee(&self, id: i64, draft: &EmployeeDraft) -> Result<()> {
        self.send(
            self.request(Method::PUT, &format!("/employees/{id}"))
                .json(draft),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_employee(&self, id: i64) -> Result<()> {
        self.send(self.request(Method::DELETE, &format!("/employees/{id}")))
            .await?;
        Ok(())
    }

    // Attendance

    pub async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>> {
        self.get_json("/attendance").await
    }

    pub async fn mark_attendance(&self, draft: &AttendanceDraft) -> Result<AttendanceRecord> {
        self.send_json(Method::POST, "/attendance", draft).await
    }

    // Reports

    /// Fetch one report as raw bytes for a client-side file save.
    pub async fn download_report(&self, request: &ReportRequest) -> Result<Vec<u8>> {
        let response = self.send(self.request(Method::GET, &request.path())).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let client = ApiClient::new("http://localhost:5119/api/");
        assert_eq!(client.base_url, "http://localhost:5119/api");
    }

    #[test]
    fn session_lifecycle() {
        let client = ApiClient::new("http://localhost:5119/api");
        assert!(!client.is_authenticated());

        let session = Session::new(
            "admin".into(),
            serde_json::from_str(r#"{"token": "abc123"}"#).unwrap(),
        );
        client.store_session(Some(session));
        assert!(client.is_authenticated());
        assert_eq!(client.session().unwrap().username, "admin");

        client.logout();
        assert!(!client.is_authenticated());
    }
}
