use reqwest::Method;
use store::{KeyValueStorage, NewTodo, Todo, TodoUpdate};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::ApiError;

impl<S: KeyValueStorage> ApiClient<S> {
    /// `GET /api/todos`: the caller's todos, newest first.
    pub async fn todos(&self) -> Result<Vec<Todo>, ApiError> {
        self.send_json(
            self.request(Method::GET, "/api/todos"),
            "Failed to fetch todos",
        )
        .await
    }

    /// `GET /api/todos/{id}`.
    pub async fn todo(&self, id: Uuid) -> Result<Todo, ApiError> {
        self.send_json(
            self.request(Method::GET, &format!("/api/todos/{id}")),
            "Failed to fetch todo",
        )
        .await
    }

    /// `POST /api/todos`.
    pub async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, ApiError> {
        self.send_json(
            self.request(Method::POST, "/api/todos").json(todo),
            "Failed to create todo",
        )
        .await
    }

    /// `PUT /api/todos/{id}`. Fields left `None` in `update` are not sent.
    pub async fn update_todo(&self, id: Uuid, update: &TodoUpdate) -> Result<Todo, ApiError> {
        self.send_json(
            self.request(Method::PUT, &format!("/api/todos/{id}"))
                .json(update),
            "Failed to update todo",
        )
        .await
    }

    /// `DELETE /api/todos/{id}`.
    pub async fn delete_todo(&self, id: Uuid) -> Result<(), ApiError> {
        self.send(
            self.request(Method::DELETE, &format!("/api/todos/{id}")),
            "Failed to delete todo",
        )
        .await?;
        Ok(())
    }
}
