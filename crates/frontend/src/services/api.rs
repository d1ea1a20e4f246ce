//! Typed HTTP client for the tracker REST API.
//!
//! Every request carries an `Authorization: Bearer <token>` header
//! when a session token is present; without one the request goes out
//! bare and the server answers 401. No retries, no caching, no
//! deduplication of in-flight requests.

use core_types::{ApiErrorBody, AuthResponse, JobApplication, LoginRequest, RegisterRequest};
use gloo_net::http::{Request, RequestBuilder, Response};
use thiserror::Error;

const API_BASE: &str = "/api";

/// Errors from API operations.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("you are not signed in, or your session has expired")]
    Unauthorized,

    #[error("that application no longer exists on the server")]
    NotFound,

    #[error("this application changed on the server; reload and try again")]
    Conflict,

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Client for the job-applications collection and the auth endpoints.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    /// Create a client; pass the session token when one exists.
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    /// Attach the bearer token, when present.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Map a non-2xx response onto the error taxonomy.
    async fn check(response: Response) -> Result<Response> {
        if response.ok() {
            return Ok(response);
        }
        match response.status() {
            401 => Err(ApiError::Unauthorized),
            404 => Err(ApiError::NotFound),
            409 => Err(ApiError::Conflict),
            status => {
                let body: ApiErrorBody = response.json().await.unwrap_or_default();
                Err(ApiError::Server {
                    status,
                    message: body.message,
                })
            }
        }
    }

    /// POST /users/login
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let response = Request::post(&format!("{API_BASE}/users/login"))
            .json(&LoginRequest { email, password })?
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// POST /users/register
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse> {
        let response = Request::post(&format!("{API_BASE}/users/register"))
            .json(&RegisterRequest {
                name,
                email,
                password,
            })?
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// GET /job-applications
    pub async fn list_jobs(&self) -> Result<Vec<JobApplication>> {
        let response = self
            .authorize(Request::get(&format!("{API_BASE}/job-applications")))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// GET /job-applications/{id}
    ///
    /// Not used by the board, which always refetches the whole list.
    #[allow(dead_code)]
    pub async fn get_job(&self, id: &str) -> Result<JobApplication> {
        let response = self
            .authorize(Request::get(&format!("{API_BASE}/job-applications/{id}")))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// POST /job-applications - create from a draft without an id.
    pub async fn create_job(&self, draft: &JobApplication) -> Result<JobApplication> {
        let response = self
            .authorize(Request::post(&format!("{API_BASE}/job-applications")))
            .json(draft)?
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// PUT /job-applications/{id} - full-record update.
    ///
    /// The record's `updatedAt` rides along so the server can answer
    /// 409 for a stale write instead of silently losing the race.
    pub async fn update_job(&self, id: &str, record: &JobApplication) -> Result<JobApplication> {
        let response = self
            .authorize(Request::put(&format!("{API_BASE}/job-applications/{id}")))
            .json(record)?
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// DELETE /job-applications/{id}
    pub async fn delete_job(&self, id: &str) -> Result<()> {
        let response = self
            .authorize(Request::delete(&format!(
                "{API_BASE}/job-applications/{id}"
            )))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
