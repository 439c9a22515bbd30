pub const LIGHT_CSS: &str = include_str!("fiddletools.css");
pub const DARK_CSS: &str = include_str!("fiddletools_dark.css");

/// Click handler wired to the `#theme-toggle` button of every generated page.
pub const THEME_TOGGLE_JS: &str = include_str!("toggle.js");
