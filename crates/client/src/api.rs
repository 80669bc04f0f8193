//! REST client for the `/api/trails` endpoints.
//!
//! [`TrailsApi`] is the seam the editor talks to; [`HttpTrailsApi`] is the
//! [`reqwest`]-backed implementation.

use async_trait::async_trait;
use trails_core::types::DbId;

use crate::config::ClientConfig;
use crate::models::{MessageResponse, Trail, TrailPayload};

/// Errors from the trails REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum TrailsApiError {
    /// The HTTP request itself failed (network, DNS, body decoding, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("Trails API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Operations the client needs from the trails server.
#[async_trait]
pub trait TrailsApi: Send + Sync {
    /// Fetch every trail, newest first, modules included.
    async fn list_trails(&self) -> Result<Vec<Trail>, TrailsApiError>;

    /// Fetch a single trail.
    async fn get_trail(&self, id: DbId) -> Result<Trail, TrailsApiError>;

    /// Create a trail with its modules.
    async fn create_trail(&self, payload: &TrailPayload) -> Result<Trail, TrailsApiError>;

    /// Replace a trail's fields and its whole module set.
    async fn replace_trail(&self, id: DbId, payload: &TrailPayload)
        -> Result<Trail, TrailsApiError>;

    /// Delete a trail and its modules.
    async fn delete_trail(&self, id: DbId) -> Result<(), TrailsApiError>;
}

/// HTTP client for a trails server.
pub struct HttpTrailsApi {
    client: reqwest::Client,
    api_url: String,
}

impl HttpTrailsApi {
    /// Create a new API client.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://localhost:5000`.
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Create an API client from loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    fn trails_url(&self) -> String {
        format!("{}/api/trails", self.api_url)
    }

    fn trail_url(&self, id: DbId) -> String {
        format!("{}/api/trails/{id}", self.api_url)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, or turn it into a
    /// [`TrailsApiError::ApiError`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, TrailsApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(TrailsApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, TrailsApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl TrailsApi for HttpTrailsApi {
    async fn list_trails(&self) -> Result<Vec<Trail>, TrailsApiError> {
        let response = self.client.get(self.trails_url()).send().await?;
        Self::parse_response(response).await
    }

    async fn get_trail(&self, id: DbId) -> Result<Trail, TrailsApiError> {
        let response = self.client.get(self.trail_url(id)).send().await?;
        Self::parse_response(response).await
    }

    async fn create_trail(&self, payload: &TrailPayload) -> Result<Trail, TrailsApiError> {
        let response = self
            .client
            .post(self.trails_url())
            .json(payload)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn replace_trail(
        &self,
        id: DbId,
        payload: &TrailPayload,
    ) -> Result<Trail, TrailsApiError> {
        let response = self
            .client
            .put(self.trail_url(id))
            .json(payload)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn delete_trail(&self, id: DbId) -> Result<(), TrailsApiError> {
        let response = self.client.delete(self.trail_url(id)).send().await?;
        let confirmation: MessageResponse = Self::parse_response(response).await?;
        tracing::debug!(trail_id = id, message = %confirmation.message, "Trail deleted");
        Ok(())
    }
}
