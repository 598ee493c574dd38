//! In-process stand-in for the todo backend.
//!
//! Implements the same routes and JSON shapes on an ephemeral port, keeping
//! everything in memory. Tokens are random UUID strings mapped to user ids.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use store::{AuthResponse, NewTodo, Role, RoleUpdate, Todo, TodoUpdate, User};
use uuid::Uuid;

#[derive(Default)]
struct Db {
    users: Vec<(User, String)>,
    tokens: HashMap<String, Uuid>,
    todos: Vec<Todo>,
}

type Shared = Arc<Mutex<Db>>;

#[derive(Deserialize)]
struct Credentials {
    email: String,
    password: String,
}

pub struct FakeBackend {
    pub url: String,
    db: Shared,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let db = Shared::default();
        let url = serve(router(db.clone())).await;
        Self { url, db }
    }

    /// Give an existing account the admin role, server-side.
    pub fn promote(&self, email: &str) {
        let mut db = self.db.lock().unwrap();
        let (user, _) = db.users.iter_mut().find(|(u, _)| u.email == email).unwrap();
        user.role = Role::Admin;
    }

    /// Revoke every token, as a server-side logout would.
    pub fn revoke_all(&self) {
        self.db.lock().unwrap().tokens.clear();
    }
}

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn router(db: Shared) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/profile", get(profile))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/api/admin/users", get(admin_users))
        .route("/api/admin/users/{id}", get(admin_user).delete(admin_delete_user))
        .route("/api/admin/users/{id}/role", put(admin_update_role))
        .route("/api/admin/todos", get(admin_todos))
        .with_state(db)
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn caller(db: &Db, headers: &HeaderMap) -> Option<User> {
    let token = headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?;
    let id = db.tokens.get(token)?;
    db.users
        .iter()
        .find(|(u, _)| u.id == *id)
        .map(|(u, _)| u.clone())
}

fn issue_token(db: &mut Db, user: &User) -> String {
    let token = Uuid::new_v4().to_string();
    db.tokens.insert(token.clone(), user.id);
    token
}

async fn register(State(db): State<Shared>, Json(creds): Json<Credentials>) -> Response {
    let mut db = db.lock().unwrap();
    if creds.password.len() < 6 {
        return error(StatusCode::BAD_REQUEST, "password must be at least 6 characters");
    }
    if db.users.iter().any(|(u, _)| u.email == creds.email) {
        return error(StatusCode::CONFLICT, "user already exists");
    }
    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        email: creds.email,
        role: Role::User,
        created_at: now,
        updated_at: now,
    };
    db.users.push((user.clone(), creds.password));
    let token = issue_token(&mut db, &user);
    (StatusCode::CREATED, Json(AuthResponse { token, user })).into_response()
}

async fn login(State(db): State<Shared>, Json(creds): Json<Credentials>) -> Response {
    let mut db = db.lock().unwrap();
    let found = db
        .users
        .iter()
        .find(|(u, p)| u.email == creds.email && *p == creds.password)
        .map(|(u, _)| u.clone());
    match found {
        Some(user) => {
            let token = issue_token(&mut db, &user);
            Json(AuthResponse { token, user }).into_response()
        }
        None => error(StatusCode::UNAUTHORIZED, "invalid email or password"),
    }
}

async fn profile(State(db): State<Shared>, headers: HeaderMap) -> Response {
    let db = db.lock().unwrap();
    match caller(&db, &headers) {
        Some(user) => Json(user).into_response(),
        None => error(StatusCode::UNAUTHORIZED, "unauthorized"),
    }
}

async fn list_todos(State(db): State<Shared>, headers: HeaderMap) -> Response {
    let db = db.lock().unwrap();
    let Some(user) = caller(&db, &headers) else {
        return error(StatusCode::UNAUTHORIZED, "unauthorized");
    };
    let todos: Vec<Todo> = db
        .todos
        .iter()
        .filter(|t| t.user_id == user.id)
        .cloned()
        .collect();
    Json(todos).into_response()
}

async fn get_todo(
    State(db): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Response {
    let db = db.lock().unwrap();
    let Some(user) = caller(&db, &headers) else {
        return error(StatusCode::UNAUTHORIZED, "unauthorized");
    };
    match db.todos.iter().find(|t| t.id == id && t.user_id == user.id) {
        Some(todo) => Json(todo.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "todo not found"),
    }
}

async fn create_todo(
    State(db): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<NewTodo>,
) -> Response {
    let mut db = db.lock().unwrap();
    let Some(user) = caller(&db, &headers) else {
        return error(StatusCode::UNAUTHORIZED, "unauthorized");
    };
    if body.title.trim().is_empty() {
        return error(StatusCode::BAD_REQUEST, "title is required");
    }
    let now = Utc::now();
    let todo = Todo {
        id: Uuid::new_v4(),
        user_id: user.id,
        title: body.title,
        description: body.description,
        completed: false,
        created_at: now,
        updated_at: now,
    };
    // Newest first, like the real listing.
    db.todos.insert(0, todo.clone());
    (StatusCode::CREATED, Json(todo)).into_response()
}

async fn update_todo(
    State(db): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(update): Json<TodoUpdate>,
) -> Response {
    let mut db = db.lock().unwrap();
    let Some(user) = caller(&db, &headers) else {
        return error(StatusCode::UNAUTHORIZED, "unauthorized");
    };
    let Some(todo) = db
        .todos
        .iter_mut()
        .find(|t| t.id == id && t.user_id == user.id)
    else {
        return error(StatusCode::NOT_FOUND, "todo not found");
    };
    if let Some(title) = update.title {
        todo.title = title;
    }
    if let Some(description) = update.description {
        todo.description = Some(description);
    }
    if let Some(completed) = update.completed {
        todo.completed = completed;
    }
    todo.updated_at = Utc::now();
    Json(todo.clone()).into_response()
}

async fn delete_todo(
    State(db): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Response {
    let mut db = db.lock().unwrap();
    let Some(user) = caller(&db, &headers) else {
        return error(StatusCode::UNAUTHORIZED, "unauthorized");
    };
    let before = db.todos.len();
    db.todos.retain(|t| !(t.id == id && t.user_id == user.id));
    if db.todos.len() == before {
        return error(StatusCode::NOT_FOUND, "todo not found");
    }
    Json(json!({ "message": "todo deleted" })).into_response()
}

fn require_admin(db: &Db, headers: &HeaderMap) -> Result<User, Response> {
    match caller(db, headers) {
        Some(user) if user.role == Role::Admin => Ok(user),
        Some(_) => Err(error(StatusCode::FORBIDDEN, "admin access required")),
        None => Err(error(StatusCode::UNAUTHORIZED, "unauthorized")),
    }
}

async fn admin_users(State(db): State<Shared>, headers: HeaderMap) -> Response {
    let db = db.lock().unwrap();
    if let Err(resp) = require_admin(&db, &headers) {
        return resp;
    }
    let users: Vec<User> = db.users.iter().map(|(u, _)| u.clone()).collect();
    Json(users).into_response()
}

async fn admin_user(
    State(db): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Response {
    let db = db.lock().unwrap();
    if let Err(resp) = require_admin(&db, &headers) {
        return resp;
    }
    match db.users.iter().find(|(u, _)| u.id == id) {
        Some((user, _)) => Json(user.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "user not found"),
    }
}

async fn admin_update_role(
    State(db): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(body): Json<RoleUpdate>,
) -> Response {
    let mut db = db.lock().unwrap();
    if let Err(resp) = require_admin(&db, &headers) {
        return resp;
    }
    match db.users.iter_mut().find(|(u, _)| u.id == id) {
        Some((user, _)) => {
            user.role = body.role;
            user.updated_at = Utc::now();
            Json(user.clone()).into_response()
        }
        None => error(StatusCode::NOT_FOUND, "user not found"),
    }
}

async fn admin_delete_user(
    State(db): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Response {
    let mut db = db.lock().unwrap();
    let admin = match require_admin(&db, &headers) {
        Ok(admin) => admin,
        Err(resp) => return resp,
    };
    if admin.id == id {
        return error(StatusCode::BAD_REQUEST, "cannot delete yourself");
    }
    let before = db.users.len();
    db.users.retain(|(u, _)| u.id != id);
    if db.users.len() == before {
        return error(StatusCode::NOT_FOUND, "user not found");
    }
    db.todos.retain(|t| t.user_id != id);
    db.tokens.retain(|_, user_id| *user_id != id);
    Json(json!({ "message": "user deleted" })).into_response()
}

async fn admin_todos(State(db): State<Shared>, headers: HeaderMap) -> Response {
    let db = db.lock().unwrap();
    if let Err(resp) = require_admin(&db, &headers) {
        return resp;
    }
    Json(db.todos.clone()).into_response()
}
