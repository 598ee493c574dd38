//! Register, login and profile.
//!
//! Unlike the resource endpoints, a failed register/login passes the backend's
//! `{"error": "..."}` text through untouched, since it is what the user needs
//! to read ("user already exists", "invalid email or password").

use reqwest::{Method, Response};
use serde::{Deserialize, Serialize};
use store::{AuthResponse, KeyValueStorage, User};

use crate::client::ApiClient;
use crate::error::ApiError;

const REGISTER_FAILED: &str = "Registration failed";
const LOGIN_FAILED: &str = "Login failed";

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl<S: KeyValueStorage> ApiClient<S> {
    /// `POST /api/register`.
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.authenticate("/api/register", email, password, REGISTER_FAILED)
            .await
    }

    /// `POST /api/login`.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.authenticate("/api/login", email, password, LOGIN_FAILED)
            .await
    }

    /// `GET /api/profile`: the current user as the backend sees it.
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.send_json(
            self.request(Method::GET, "/api/profile"),
            "Failed to fetch profile",
        )
        .await
    }

    async fn authenticate(
        &self,
        path: &str,
        email: &str,
        password: &str,
        fallback: &str,
    ) -> Result<AuthResponse, ApiError> {
        let response = self
            .request(Method::POST, path)
            .json(&Credentials { email, password })
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(response.json().await?);
        }

        let status = response.status();
        let message = backend_message(response)
            .await
            .unwrap_or_else(|| fallback.to_string());
        tracing::debug!(%status, %path, "authentication rejected: {}", message);
        Err(ApiError::status(status, message))
    }
}

async fn backend_message(response: Response) -> Option<String> {
    let body: ErrorBody = response.json().await.ok()?;
    body.error.filter(|e| !e.is_empty())
}
