//! Admin panel: user management and every user's todos.
//!
//! Guarded with `require_admin`, but the guard only reads the cached role. The
//! backend rejects these calls for non-admin tokens regardless.

use dioxus::prelude::*;
use store::{Role, Todo, User};
use ui::{alert, confirm, use_app, use_auth_guard, GuardOptions};
use uuid::Uuid;

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Users,
    Todos,
}

#[component]
pub fn Admin() -> Element {
    let app = use_app();
    let nav = use_navigator();
    let guard = use_auth_guard(
        GuardOptions::new(Route::Login {})
            .redirect_to(Route::Dashboard {})
            .require_admin(),
    );
    let mut users = use_signal(Vec::<User>::new);
    let mut todos = use_signal(Vec::<Todo>::new);
    let mut loading = use_signal(|| true);
    let mut active_tab = use_signal(|| Tab::Users);

    let client = app.client.clone();
    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            if !guard.is_authenticated() {
                return;
            }
            loading.set(true);
            let (users_res, todos_res) = futures::join!(client.users(), client.all_todos());
            match (users_res, todos_res) {
                (Ok(u), Ok(t)) => {
                    users.set(u);
                    todos.set(t);
                }
                (Err(e), _) | (_, Err(e)) => tracing::error!("Failed to load admin data: {}", e),
            }
            loading.set(false);
        }
    });

    let client = app.client.clone();
    let handle_role = use_callback(move |(id, role): (Uuid, Role)| {
        let client = client.clone();
        spawn(async move {
            match client.update_user_role(id, role).await {
                Ok(updated) => {
                    if let Some(slot) = users.write().iter_mut().find(|u| u.id == id) {
                        *slot = updated;
                    }
                    alert("User role updated");
                }
                Err(e) => {
                    tracing::error!("Failed to update role: {}", e);
                    alert("Failed to update the role");
                }
            }
        });
    });

    let client = app.client.clone();
    let handle_delete = use_callback(move |id: Uuid| {
        if !confirm("Delete this user?") {
            return;
        }
        let client = client.clone();
        spawn(async move {
            match client.delete_user(id).await {
                Ok(()) => {
                    users.write().retain(|u| u.id != id);
                    alert("User deleted");
                }
                Err(e) => {
                    tracing::error!("Failed to delete user: {}", e);
                    alert(&e.to_string());
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

    let user_count = users.read().len();
    let todo_count = todos.read().len();
    let tab_class = move |tab: Tab| {
        if active_tab() == tab {
            "tab tab--active"
        } else {
            "tab"
        }
    };

    rsx! {
        div {
            class: "page",

            header {
                class: "page-header",
                h1 { "Admin" }
                div {
                    class: "page-header-actions",
                    button {
                        class: "button",
                        onclick: move |_| {
                            nav.push(Route::Dashboard {});
                        },
                        "Back to dashboard"
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

                div {
                    class: "tabs",
                    button {
                        class: tab_class(Tab::Users),
                        onclick: move |_| active_tab.set(Tab::Users),
                        "Users ({user_count})"
                    }
                    button {
                        class: tab_class(Tab::Todos),
                        onclick: move |_| active_tab.set(Tab::Todos),
                        "All todos ({todo_count})"
                    }
                }

                if active_tab() == Tab::Users {
                    section {
                        class: "section",
                        h2 { "Users" }
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "Email" }
                                    th { "Role" }
                                    th { "Registered" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                for user in users() {
                                    UserRow {
                                        key: "{user.id}",
                                        user: user.clone(),
                                        on_role_change: handle_role,
                                        on_delete: handle_delete,
                                    }
                                }
                            }
                        }
                    }
                } else {
                    section {
                        class: "section",
                        h2 { "All todos" }
                        div {
                            class: "todo-grid",
                            for todo in todos() {
                                TodoCard { key: "{todo.id}", todo: todo.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(
    user: User,
    on_role_change: EventHandler<(Uuid, Role)>,
    on_delete: EventHandler<Uuid>,
) -> Element {
    let id = user.id;
    let registered = user.created_at.format("%Y-%m-%d").to_string();

    rsx! {
        tr {
            td { "{user.email}" }
            td {
                select {
                    class: "select",
                    value: user.role.as_str(),
                    onchange: move |evt: FormEvent| {
                        if let Some(role) = Role::parse(&evt.value()) {
                            on_role_change.call((id, role));
                        }
                    },
                    for role in Role::ALL {
                        option {
                            value: role.as_str(),
                            selected: role == user.role,
                            "{role}"
                        }
                    }
                }
            }
            td { "{registered}" }
            td {
                button {
                    class: "button button--danger",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn TodoCard(todo: Todo) -> Element {
    let owner = todo.user_id.to_string();
    let owner_short = &owner[..8];

    rsx! {
        div {
            class: "todo-card",
            h3 { "{todo.title}" }
            if let Some(desc) = &todo.description {
                p { "{desc}" }
            }
            div {
                class: "todo-meta",
                if todo.completed {
                    span { class: "badge badge--done", "Done" }
                } else {
                    span { class: "badge badge--pending", "Pending" }
                }
                span { class: "todo-owner", "User {owner_short}..." }
            }
        }
    }
}
