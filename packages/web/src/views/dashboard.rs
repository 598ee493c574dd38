use dioxus::prelude::*;
use store::{NewTodo, Todo, TodoUpdate};
use ui::{alert, confirm, use_app, use_auth_guard, GuardOptions, TodoItem};
use uuid::Uuid;

use crate::Route;

/// The signed-in user's todo list.
#[component]
pub fn Dashboard() -> Element {
    let app = use_app();
    let nav = use_navigator();
    let guard = use_auth_guard(GuardOptions::new(Route::Login {}));
    let mut todos = use_signal(Vec::<Todo>::new);
    let mut loading = use_signal(|| true);
    let mut new_title = use_signal(String::new);
    let mut new_description = use_signal(String::new);

    // Load todos once the guard has let us in
    let client = app.client.clone();
    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            if !guard.is_authenticated() {
                return;
            }
            loading.set(true);
            match client.todos().await {
                Ok(list) => todos.set(list),
                Err(e) => tracing::error!("Failed to load todos: {}", e),
            }
            loading.set(false);
        }
    });

    let client = app.client.clone();
    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let title = new_title();
        if title.trim().is_empty() {
            return;
        }
        let description = new_description();
        let client = client.clone();
        spawn(async move {
            let mut todo = NewTodo::new(title);
            if !description.is_empty() {
                todo = todo.with_description(description);
            }
            match client.create_todo(&todo).await {
                Ok(created) => {
                    todos.write().insert(0, created);
                    new_title.set(String::new());
                    new_description.set(String::new());
                }
                Err(e) => {
                    tracing::error!("Failed to create todo: {}", e);
                    alert("Failed to create the todo");
                }
            }
        });
    };

    let client = app.client.clone();
    let handle_update = use_callback(move |(id, update): (Uuid, TodoUpdate)| {
        let client = client.clone();
        spawn(async move {
            match client.update_todo(id, &update).await {
                Ok(updated) => {
                    if let Some(slot) = todos.write().iter_mut().find(|t| t.id == id) {
                        *slot = updated;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to update todo: {}", e);
                    alert("Failed to update the todo");
                }
            }
        });
    });

    let client = app.client.clone();
    let handle_delete = use_callback(move |id: Uuid| {
        if !confirm("Delete this todo?") {
            return;
        }
        let client = client.clone();
        spawn(async move {
            match client.delete_todo(id).await {
                Ok(()) => todos.write().retain(|t| t.id != id),
                Err(e) => {
                    tracing::error!("Failed to delete todo: {}", e);
                    alert("Failed to delete the todo");
                }
            }
        });
    });

    if guard.is_loading() || loading() {
        return rsx! {
            div {
                class: "page page--centered",
                p { "Loading..." }
            }
        };
    }

    let email = guard
        .user
        .read()
        .as_ref()
        .map(|u| u.email.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "page",

            header {
                class: "page-header",
                h1 { "Todos" }
                div {
                    class: "page-header-actions",
                    span { class: "user-email", "{email}" }
                    if guard.is_admin() {
                        button {
                            class: "button",
                            onclick: move |_| {
                                nav.push(Route::Admin {});
                            },
                            "Admin"
                        }
                    }
                    button {
                        class: "button",
                        onclick: move |_| guard.logout(),
                        "Log out"
                    }
                }
            }

            main {
                class: "page-main",

                form {
                    class: "create-form",
                    onsubmit: handle_create,
                    input {
                        r#type: "text",
                        placeholder: "What needs doing?",
                        value: new_title(),
                        oninput: move |evt| new_title.set(evt.value()),
                    }
                    textarea {
                        placeholder: "Description (optional)",
                        value: new_description(),
                        oninput: move |evt| new_description.set(evt.value()),
                    }
                    button {
                        class: "button button--primary",
                        r#type: "submit",
                        "Add"
                    }
                }

                div {
                    class: "todo-list",
                    if todos.read().is_empty() {
                        p { class: "empty-message", "No todos yet" }
                    } else {
                        for todo in todos() {
                            TodoItem {
                                key: "{todo.id}",
                                todo: todo.clone(),
                                on_update: handle_update,
                                on_delete: handle_delete,
                            }
                        }
                    }
                }
            }
        }
    }
}
