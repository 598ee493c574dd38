//! Admin endpoints under `/api/admin`.
//!
//! The backend rejects these for non-admin tokens; the client sends them
//! regardless of the cached role.

use reqwest::Method;
use store::{KeyValueStorage, Role, RoleUpdate, Todo, User};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::ApiError;

impl<S: KeyValueStorage> ApiClient<S> {
    /// `GET /api/admin/users`.
    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.send_json(
            self.request(Method::GET, "/api/admin/users"),
            "Failed to fetch users",
        )
        .await
    }

    /// `GET /api/admin/users/{id}`.
    pub async fn user(&self, id: Uuid) -> Result<User, ApiError> {
        self.send_json(
            self.request(Method::GET, &format!("/api/admin/users/{id}")),
            "Failed to fetch user",
        )
        .await
    }

    /// `PUT /api/admin/users/{id}/role`. Returns the updated user.
    pub async fn update_user_role(&self, id: Uuid, role: Role) -> Result<User, ApiError> {
        self.send_json(
            self.request(Method::PUT, &format!("/api/admin/users/{id}/role"))
                .json(&RoleUpdate { role }),
            "Failed to update user role",
        )
        .await
    }

    /// `DELETE /api/admin/users/{id}`.
    pub async fn delete_user(&self, id: Uuid) -> Result<(), ApiError> {
        self.send(
            self.request(Method::DELETE, &format!("/api/admin/users/{id}")),
            "Failed to delete user",
        )
        .await?;
        Ok(())
    }

    /// `GET /api/admin/todos`: every user's todos.
    pub async fn all_todos(&self) -> Result<Vec<Todo>, ApiError> {
        self.send_json(
            self.request(Method::GET, "/api/admin/todos"),
            "Failed to fetch all todos",
        )
        .await
    }
}
