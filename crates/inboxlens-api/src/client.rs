//! HTTP client for the analysis backend.

use std::future::Future;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::types::{
    BatchEmail, BatchRequest, BatchResponse, DeleteResponse, EmailListResponse, EmailResponse,
    HealthStatus, ListFilters, MAX_BATCH_SIZE, ProcessEmailRequest, ProcessResponse,
    StatsResponse,
};

/// Backend capable of analysing a single email.
///
/// This is the only operation batch submission needs, so it is split out
/// to let callers substitute an in-memory implementation.
pub trait EmailBackend: Send + Sync {
    /// Submits one email for analysis.
    fn process_email(
        &self,
        request: &ProcessEmailRequest,
    ) -> impl Future<Output = Result<ProcessResponse>> + Send;
}

/// Async client for the backend REST surface.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::client(format!("Failed to initialize HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submits one email for analysis.
    ///
    /// # Errors
    ///
    /// Returns a normalized [`ApiError`] on transport, HTTP or decoding failure.
    pub async fn process_email(&self, request: &ProcessEmailRequest) -> Result<ProcessResponse> {
        let url = self.config.endpoint(&["email", "process"]);
        self.execute(Method::POST, url, |r| r.json(request)).await
    }

    /// Submits up to [`MAX_BATCH_SIZE`] emails in a single request.
    ///
    /// # Errors
    ///
    /// Returns a client-side error for an empty or oversized batch, otherwise
    /// a normalized [`ApiError`] on failure.
    pub async fn process_batch(
        &self,
        user_id: &str,
        emails: Vec<BatchEmail>,
    ) -> Result<BatchResponse> {
        if emails.is_empty() {
            return Err(ApiError::client("No emails provided"));
        }
        if emails.len() > MAX_BATCH_SIZE {
            return Err(ApiError::client(format!(
                "A batch can contain at most {MAX_BATCH_SIZE} emails"
            )));
        }

        let body = BatchRequest {
            user_id: user_id.to_string(),
            emails,
        };
        let url = self.config.endpoint(&["email", "batch"]);
        self.execute(Method::POST, url, |r| r.json(&body)).await
    }

    /// Lists stored analyses for a user.
    ///
    /// # Errors
    ///
    /// Returns a normalized [`ApiError`] on failure.
    pub async fn get_emails(
        &self,
        user_id: &str,
        filters: &ListFilters,
    ) -> Result<EmailListResponse> {
        let url = self.config.endpoint(&["emails"]);
        let query = filters.query(user_id);
        self.execute(Method::GET, url, |r| r.query(&query)).await
    }

    /// Fetches one stored analysis.
    ///
    /// # Errors
    ///
    /// Returns a normalized [`ApiError`]; a missing record yields status 404.
    pub async fn get_email_by_id(&self, email_id: &str, user_id: &str) -> Result<EmailResponse> {
        let url = self.config.endpoint(&["emails", email_id]);
        self.execute(Method::GET, url, |r| r.query(&[("user_id", user_id)]))
            .await
    }

    /// Deletes one stored analysis.
    ///
    /// # Errors
    ///
    /// Returns a normalized [`ApiError`]; a missing record yields status 404.
    pub async fn delete_email(&self, email_id: &str, user_id: &str) -> Result<DeleteResponse> {
        let url = self.config.endpoint(&["emails", email_id]);
        self.execute(Method::DELETE, url, |r| r.query(&[("user_id", user_id)]))
            .await
    }

    /// Fetches aggregate counts for a user.
    ///
    /// # Errors
    ///
    /// Returns a normalized [`ApiError`] on failure.
    pub async fn get_stats(&self, user_id: &str) -> Result<StatsResponse> {
        let url = self.config.endpoint(&["stats"]);
        self.execute(Method::GET, url, |r| r.query(&[("user_id", user_id)]))
            .await
    }

    /// Checks backend liveness.
    ///
    /// # Errors
    ///
    /// Returns a normalized [`ApiError`] when the backend is unreachable or
    /// answers with an error status.
    pub async fn health_check(&self) -> Result<HealthStatus> {
        let url = self.config.endpoint(&["health"]);
        self.execute(Method::GET, url, |r| r).await
    }

    /// Sends a request and decodes a JSON success body.
    async fn execute<T, F>(&self, method: Method, url: Url, prepare: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        debug!("API request: {} {}", method, url.path());

        let request = prepare(self.http.request(method.clone(), url.clone()));
        let response = request.send().await.map_err(|e| {
            warn!("API request {} {} failed: {}", method, url.path(), e);
            ApiError::from_transport(&e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!("Reading response body for {} {} failed: {}", method, url.path(), e);
            ApiError::from_transport(&e)
        })?;

        debug!(
            "API response: {} {} -> {} ({} bytes)",
            method,
            url.path(),
            status.as_u16(),
            body.len()
        );

        if !status.is_success() {
            let err = ApiError::from_response(status.as_u16(), &body);
            warn!(
                "API error: {} {} -> {}: {}",
                method,
                url.path(),
                err.status,
                err.message
            );
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!("Undecodable response for {} {}: {}", method, url.path(), e);
            ApiError::decode(&e)
        })
    }
}

impl EmailBackend for ApiClient {
    fn process_email(
        &self,
        request: &ProcessEmailRequest,
    ) -> impl Future<Output = Result<ProcessResponse>> + Send {
        Self::process_email(self, request)
    }
}
