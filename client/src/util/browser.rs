//! Thin wrappers over browser APIs (clipboard, location, dialogs).
//!
//! TRADE-OFFS
//! ==========
//! Every call is best-effort: failures are ignored and SSR paths no-op, so
//! callers never need a browser to run state transitions.

/// Write `text` to the system clipboard.
pub fn copy_to_clipboard(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            // Optional in older web-sys releases.
            let clipboard: Option<web_sys::Clipboard> = window.navigator().clipboard().into();
            if let Some(clipboard) = clipboard {
                let _ = clipboard.write_text(text);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}

/// Navigate the whole page (used for `mailto:` links and provider redirects).
pub fn set_location(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

/// Current page URL including query string, if running in a browser.
pub fn current_href() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.location().href().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Absolute URL for an app path on the current origin.
pub fn absolute_url(path: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let origin = web_sys::window()?.location().origin().ok()?;
        Some(format!("{origin}{path}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        None
    }
}

/// Blocking yes/no prompt. Off-browser there is nobody to ask, so `false`.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
