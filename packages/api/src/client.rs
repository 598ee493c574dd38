//! Shared request plumbing for [`ApiClient`].

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::{KeyValueStorage, Session};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// HTTP client for the todo backend.
///
/// The client reads the bearer token from its [`Session`] on every request and
/// never writes to it; saving after login and clearing on logout is up to the
/// caller. Cloning is cheap and clones share the connection pool and the
/// session storage.
#[derive(Debug, Clone)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    config: ApiConfig,
    session: Session<S>,
}

impl<S: KeyValueStorage> ApiClient<S> {
    pub fn new(config: ApiConfig, session: Session<S>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Start a JSON request, with `Authorization: Bearer` when a token is stored.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self
            .http
            .request(method, self.config.url(path))
            .header(CONTENT_TYPE, "application/json");
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send and map any non-2xx status to `failure`.
    pub(crate) async fn send(
        &self,
        request: RequestBuilder,
        failure: &str,
    ) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(url = %response.url(), %status, "api response");
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::status(status, failure))
        }
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        failure: &str,
    ) -> Result<T, ApiError> {
        let response = self.send(request, failure).await?;
        Ok(response.json().await?)
    }

    /// `GET /health`. `Ok(false)` means the backend answered but is unhealthy.
    pub async fn health(&self) -> Result<bool, ApiError> {
        let response = self.request(Method::GET, "/health").send().await?;
        Ok(response.status().is_success())
    }
}
