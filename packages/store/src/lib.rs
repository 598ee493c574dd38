pub mod models;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use models::{AuthResponse, NewTodo, Role, RoleUpdate, Todo, TodoUpdate, User};
pub use session::Session;
pub use storage::{KeyValueStorage, StorageError};
