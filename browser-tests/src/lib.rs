//! Browser-side checks for the click handler shipped in every generated page.

/// Same script `fiddletools` inlines into its pages.
pub const THEME_TOGGLE_JS: &str = include_str!("../../src/toggle.js");
