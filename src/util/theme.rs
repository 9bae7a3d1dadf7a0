//! Theme initialization and toggle.
//!
//! Reads the visitor's preference from `localStorage` and applies the
//! `dark` class to the `<html>` element. Toggle writes back to
//! `localStorage` and updates the class. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; a blocked
//! or full storage still flips the class, the choice just does not survive
//! the next page load. SSR paths safely no-op to keep server rendering
//! deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;
#[cfg(feature = "hydrate")]
use crate::state::theme::THEME_STORAGE_KEY;

/// Read the theme preference from localStorage.
///
/// Returns [`Theme::Dark`] only when the stored value is exactly `"dark"`;
/// an absent key or any other value means light.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
        Theme::from_stored(stored.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Apply the `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.class_list().toggle_with_force("dark", theme.is_dark());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme and persist the new preference to localStorage.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(THEME_STORAGE_KEY, next.as_str());
            }
        }
    }
    next
}
