//! Backend location.

/// Environment variable naming the backend base URL.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Used when nothing is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:8000`.
    pub backend_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl ApiConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let backend_url = backend_url.into().trim().trim_end_matches('/').to_string();
        Self { backend_url }
    }

    /// Resolve the backend URL.
    ///
    /// Native builds look at `BACKEND_URL` in the process environment (after
    /// loading `.env`). Every build then falls back to the value of
    /// `BACKEND_URL` at compile time, which is how the wasm bundle gets
    /// configured, and finally to [`DEFAULT_BACKEND_URL`].
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(url) = std::env::var(BACKEND_URL_VAR) {
                if !url.trim().is_empty() {
                    return Self::new(url);
                }
            }
        }

        match option_env!("BACKEND_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Join an absolute API path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }
}
