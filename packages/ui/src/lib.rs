//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{use_app, AppContext, PlatformStorage, SessionProvider};

pub mod guard;
pub use guard::{
    sign_out, use_auth_guard, use_auth_redirect, use_signed_in_redirect, AuthGuard,
    AuthStatus, GuardOptions,
};

mod notify;
pub use notify::{alert, confirm};

mod todo_item;
pub use todo_item::TodoItem;
