//! Session context for the UI.
//!
//! The app-wide [`AppContext`] bundles the [`Session`] and an [`ApiClient`]
//! reading from the same storage. It is created once by [`SessionProvider`]
//! and fetched with [`use_app`]; nothing reads browser storage directly.

use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;
use store::Session;

/// Storage backing the session on this platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = store::MemoryStorage;

/// Session plus API client, shared through the Dioxus context.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub session: Session<PlatformStorage>,
    pub client: ApiClient<PlatformStorage>,
}

impl AppContext {
    pub fn new(config: ApiConfig, storage: PlatformStorage) -> Self {
        let session = Session::new(storage);
        let client = ApiClient::new(config, session.clone());
        Self { session, client }
    }
}

/// Get the app context provided by [`SessionProvider`].
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

/// Provider component that owns the session context.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    use_context_provider(|| {
        let config = ApiConfig::from_env();
        tracing::info!("using backend at {}", config.backend_url);
        AppContext::new(config, PlatformStorage::new())
    });

    rsx! {
        {children}
    }
}
