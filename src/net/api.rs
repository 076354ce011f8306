//! REST API helpers for communicating with the remote course API.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): stubs returning a network error since
//! these endpoints are only reachable from the browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. `401` surfaces as
//! `ApiError::Unauthorized` so the session provider can sign the user out no
//! matter which page made the call. `403` is `Forbidden`: the credential is
//! fine, the account just lacks the role.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{Course, Credentials, LoginResponse, User};
use crate::config::AppConfig;

/// Transport-level failure of a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The endpoint was unreachable or the request never completed.
    #[error("network request failed: {0}")]
    Network(String),

    /// The API rejected the attached credential (or none was attached).
    #[error("request unauthorized")]
    Unauthorized,

    /// The credential is valid but not allowed to see this resource.
    #[error("request forbidden")]
    Forbidden,

    /// Any other non-success status.
    #[error("request failed: status {0}")]
    Status(u16),

    /// The response body did not match the expected schema.
    #[error("response parse failed: {0}")]
    Decode(String),
}

/// Join the API base URL and a relative path with exactly one slash.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `Authorization` header value for a bearer credential.
pub fn bearer_header(credential: &str) -> String {
    format!("Bearer {credential}")
}

/// Map an HTTP status code onto success or an [`ApiError`].
///
/// # Errors
///
/// Returns `Unauthorized` for `401`, `Forbidden` for `403`, and `Status`
/// for any other non-2xx code.
pub fn classify_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        403 => Err(ApiError::Forbidden),
        other => Err(ApiError::Status(other)),
    }
}

fn course_path(course_id: i64) -> String {
    format!("courses/{course_id}")
}

fn enroll_path(course_id: i64) -> String {
    format!("courses/{course_id}/enroll")
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}

// =============================================================================
// ACCOUNT API TRAIT
// =============================================================================

/// Identity and login endpoints consumed by the session provider.
///
/// Futures are `?Send` because browser fetches are bound to the UI thread.
#[async_trait(?Send)]
pub trait AccountApi {
    /// Verify a stored credential via `GET /account-info`.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` for a rejected or expired credential and
    /// `Network` when the API cannot be reached.
    async fn account_info(&self, credential: &str) -> Result<User, ApiError>;

    /// Exchange credentials for a bearer token via `POST /login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for any non-success response or transport failure.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// Thin JSON client bound to the configured API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    pub fn new(config: &AppConfig) -> Self {
        Self { base_url: config.api_base.clone() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, credential: Option<&str>) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = endpoint(&self.base_url, path);
            log::debug!("GET {url}");
            let mut request = gloo_net::http::Request::get(&url);
            if let Some(credential) = credential {
                request = request.header("Authorization", &bearer_header(credential));
            }
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            classify_status(resp.status())?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, credential);
            Err(unavailable())
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        credential: Option<&str>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = endpoint(&self.base_url, path);
            log::debug!("POST {url}");
            let mut builder = gloo_net::http::Request::post(&url);
            if let Some(credential) = credential {
                builder = builder.header("Authorization", &bearer_header(credential));
            }
            let request = builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            classify_status(resp.status())?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body, credential);
            Err(unavailable())
        }
    }

    /// Fetch the public catalog via `GET /courses`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is malformed.
    pub async fn fetch_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.get_json("courses", None).await
    }

    /// Fetch one public course via `GET /courses/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is malformed.
    pub async fn fetch_course(&self, course_id: i64) -> Result<Course, ApiError> {
        self.get_json(&course_path(course_id), None).await
    }

    /// Fetch the signed-in user's enrollments via `GET /my-courses`.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` when the credential is rejected.
    pub async fn fetch_my_courses(&self, credential: &str) -> Result<Vec<Course>, ApiError> {
        self.get_json("my-courses", Some(credential)).await
    }

    /// Enroll the signed-in user via `POST /courses/{id}/enroll`.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` when the credential is rejected.
    pub async fn enroll(&self, credential: &str, course_id: i64) -> Result<(), ApiError> {
        let result: Result<serde_json::Value, ApiError> =
            self.post_json(&enroll_path(course_id), &serde_json::json!({}), Some(credential)).await;
        match result {
            // Success may come back with an empty body.
            Ok(_) | Err(ApiError::Decode(_)) => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Fetch all accounts for the admin panel via `GET /admin/users`.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` when the credential is rejected.
    pub async fn fetch_admin_users(&self, credential: &str) -> Result<Vec<User>, ApiError> {
        self.get_json("admin/users", Some(credential)).await
    }

    /// Fetch every course, drafts included, via `GET /admin/courses`.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` when the credential is rejected.
    pub async fn fetch_admin_courses(&self, credential: &str) -> Result<Vec<Course>, ApiError> {
        self.get_json("admin/courses", Some(credential)).await
    }
}

#[async_trait(?Send)]
impl AccountApi for HttpClient {
    async fn account_info(&self, credential: &str) -> Result<User, ApiError> {
        self.get_json("account-info", Some(credential)).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.post_json("login", credentials, None).await
    }
}
