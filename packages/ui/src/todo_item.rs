use dioxus::prelude::*;
use store::{Todo, TodoUpdate};
use uuid::Uuid;

/// One todo with a completion checkbox and inline editing.
///
/// Toggling sends only `completed`; saving the edit form sends only the title
/// and description.
#[component]
pub fn TodoItem(
    todo: Todo,
    on_update: EventHandler<(Uuid, TodoUpdate)>,
    on_delete: EventHandler<Uuid>,
) -> Element {
    let mut editing = use_signal(|| false);
    let mut title = use_signal(|| todo.title.clone());
    let mut description = use_signal(|| todo.description.clone().unwrap_or_default());

    let id = todo.id;
    let completed = todo.completed;
    let item_class = if completed {
        "todo-item todo-item--completed"
    } else {
        "todo-item"
    };

    if editing() {
        let original_title = todo.title.clone();
        let original_description = todo.description.clone().unwrap_or_default();

        return rsx! {
            div {
                class: "todo-item",
                input {
                    class: "todo-input",
                    r#type: "text",
                    value: title(),
                    oninput: move |evt| title.set(evt.value()),
                }
                textarea {
                    class: "todo-textarea",
                    placeholder: "Description (optional)",
                    value: description(),
                    oninput: move |evt| description.set(evt.value()),
                }
                div {
                    class: "todo-actions",
                    button {
                        class: "button button--primary",
                        onclick: move |_| {
                            on_update.call((id, TodoUpdate::text(title(), description())));
                            editing.set(false);
                        },
                        "Save"
                    }
                    button {
                        class: "button",
                        onclick: move |_| {
                            title.set(original_title.clone());
                            description.set(original_description.clone());
                            editing.set(false);
                        },
                        "Cancel"
                    }
                }
            }
        };
    }

    rsx! {
        div {
            class: "{item_class}",
            div {
                class: "todo-checkbox",
                input {
                    r#type: "checkbox",
                    checked: completed,
                    onchange: move |_| on_update.call((id, TodoUpdate::completed(!completed))),
                }
            }
            div {
                class: "todo-content",
                h3 { class: "todo-title", "{todo.title}" }
                if let Some(desc) = &todo.description {
                    p { class: "todo-description", "{desc}" }
                }
            }
            div {
                class: "todo-actions",
                button {
                    class: "button",
                    onclick: move |_| editing.set(true),
                    "Edit"
                }
                button {
                    class: "button button--danger",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}
