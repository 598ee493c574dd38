//! Blocking browser dialogs.
//!
//! Outside the browser there is nobody to ask, so `alert` only logs and
//! `confirm` answers yes.

/// Show a blocking message.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("alert: {}", message);
    }
}

/// Ask the user to confirm an action.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("confirm: {}", message);
        true
    }
}
