//! Client for the external verki API service.
//!
//! The identity/credential system lives on the server; this module only
//! mirrors its contract. All requests ride the browser session cookie, so
//! on wasm every call opts into `credentials: include`.
//!
//! `AuthApi` is the seam the auth drivers run against — production code uses
//! the reqwest-backed `ApiClient`, tests substitute an in-memory fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with an error status. `message` is the server's
    /// own wording and is shown to the user unmodified.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the failure means "not signed in" rather than "broken".
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Api { status: 401 | 403, .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Contractor,
}

/// Profile shape owned by the external API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: UserRole,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Detail payload for `GET /api/job-requests/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequestDetail {
    pub title: String,
    pub description: String,
    pub status: String,
    pub postcode: String,
    #[serde(default)]
    pub address: Option<String>,
    pub category: String,
    #[serde(default)]
    pub quotes_count: u32,
}

/// Session-mutating operations of the external contract.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, email: &str, password: &str) -> Result<(), ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    /// `Ok(None)` means the server considers us signed out (401/403).
    async fn current_user(&self) -> Result<Option<UserProfile>, ApiError>;
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError>;
    async fn switch_role(&self, role: UserRole) -> Result<UserProfile, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub async fn job_request(&self, id: &str) -> Result<JobRequestDetail, ApiError> {
        let response = self
            .send(self.http.get(self.url(&format!("/api/job-requests/{id}"))))
            .await?;
        decode(response).await
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let builder = with_credentials(builder);
        let response = builder
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Api {
            status: status.as_u16(),
            message: error_message(status.as_u16(), &body),
        })
    }
}

/// The browser session cookie only travels when fetch opts in.
#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    builder
}

async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Pull the server's message out of an error body, falling back to a plain
/// status line when the body is empty or not the expected JSON shape.
fn error_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            if !message.trim().is_empty() {
                return message;
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() && !trimmed.starts_with('{') {
        return trimmed.to_string();
    }
    format!("Request failed with status {status}")
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }
        self.send(
            self.http
                .post(self.url("/api/auth/login"))
                .json(&LoginRequest { email, password }),
        )
        .await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.send(self.http.post(self.url("/api/auth/logout")))
            .await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<UserProfile>, ApiError> {
        match self.send(self.http.get(self.url("/api/auth/me"))).await {
            Ok(response) => Ok(Some(decode(response).await?)),
            Err(err) if err.is_auth() => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.send(self.http.post(self.url("/api/auth/register")).json(request))
            .await?;
        Ok(())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let response = self
            .send(self.http.patch(self.url("/api/auth/profile")).json(update))
            .await?;
        decode(response).await
    }

    async fn switch_role(&self, role: UserRole) -> Result<UserProfile, ApiError> {
        #[derive(Serialize)]
        struct SwitchRoleRequest {
            role: UserRole,
        }
        let response = self
            .send(
                self.http
                    .post(self.url("/api/auth/switch-role"))
                    .json(&SwitchRoleRequest { role }),
            )
            .await?;
        decode(response).await
    }
}
