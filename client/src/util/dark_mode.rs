//! Dark mode initialization and toggle.
//!
//! Reads the preference from `localStorage` and applies the `.dark` class to
//! the `<html>` element. Toggle writes back to `localStorage` and updates the
//! class. Requires a browser environment.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

const STORAGE_KEY: &str = "nestmate_dark";

/// Parse a stored preference value.
fn parse_stored(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Read the dark mode preference.
///
/// A stored value wins; otherwise the system `prefers-color-scheme` applies.
pub fn read_preference() -> bool {
    if let Some(stored) = super::storage::load_string(STORAGE_KEY).as_deref().and_then(parse_stored) {
        return stored;
    }
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        let class_list = el.class_list();
        let _ = if enabled { class_list.add_1("dark") } else { class_list.remove_1("dark") };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    super::storage::save_string(STORAGE_KEY, if next { "true" } else { "false" });
    next
}
