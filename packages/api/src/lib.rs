//! # API crate: HTTP client for the todo backend
//!
//! Everything the frontend knows about the backend lives here. The backend owns
//! all data and all authorization; this crate only shapes requests, attaches
//! the bearer token from the [`store::Session`] and turns responses into typed
//! values or an [`ApiError`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Backend base URL (`BACKEND_URL`, default `http://localhost:8000`) |
//! | [`error`] | [`ApiError`]: transport failure or non-2xx status with a user-facing message |
//! | `client` | [`ApiClient`] and the shared request/response plumbing, `health` |
//! | `auth` | `register`, `login`, `profile` |
//! | `todos` | `todos`, `todo`, `create_todo`, `update_todo`, `delete_todo` |
//! | `admin` | `users`, `user`, `update_user_role`, `delete_user`, `all_todos` |
//!
//! ## Failure model
//!
//! There is no retry, timeout or offline queue. A failed call is reported once
//! and the caller decides how to show it. An expired or revoked token is not
//! detected ahead of time; it surfaces as the next call failing.

pub mod config;
pub mod error;

mod admin;
mod auth;
mod client;
mod todos;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;

pub use store::{AuthResponse, NewTodo, Role, Todo, TodoUpdate, User};
