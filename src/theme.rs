//! Light/dark theme model shared by the page generator and the toggler.
//!
//! The button label and the stylesheet path are both derived from [`Theme`] through the
//! lookup methods below, so the generator and the toggler cannot drift apart.

use clap::ValueEnum;
use serde::Deserialize;

pub const LIGHT_STYLESHEET: &str = "fiddletools.css";
pub const DARK_STYLESHEET: &str = "fiddletools_dark.css";

pub const DARK_MODE_LABEL: &str = "Dark Mode";
pub const LIGHT_MODE_LABEL: &str = "Light Mode";

/// Class value marking a stylesheet link that lives one directory below the stylesheets.
pub const PAGE_CLASS: &str = "page";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label of the control while this theme is active: it names the action it offers.
    pub fn button_label(self) -> &'static str {
        match self {
            Theme::Light => DARK_MODE_LABEL,
            Theme::Dark => LIGHT_MODE_LABEL,
        }
    }

    pub fn stylesheet_file(self) -> &'static str {
        match self {
            Theme::Light => LIGHT_STYLESHEET,
            Theme::Dark => DARK_STYLESHEET,
        }
    }

    pub fn stylesheet_href(self, scope: StylesheetScope) -> String {
        format!("{}{}", scope.prefix(), self.stylesheet_file())
    }

    /// Theme implied by a control label. Only `"Dark Mode"` reads as light; every other
    /// text (including `"Light Mode"`) reads as dark.
    pub fn from_label(label: &str) -> Self {
        if label == DARK_MODE_LABEL {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// Theme implied by a stylesheet href.
    pub fn from_href(href: &str) -> Self {
        if href.contains(LIGHT_STYLESHEET) {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Theme::Dark } else { Theme::Light }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StylesheetScope {
    /// Page sits next to the stylesheets.
    #[default]
    Root,
    /// Page sits in a subdirectory; hrefs get a `../` prefix.
    Page,
}

impl StylesheetScope {
    pub fn from_class(class: Option<&str>) -> Self {
        match class {
            Some(PAGE_CLASS) => StylesheetScope::Page,
            _ => StylesheetScope::Root,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            StylesheetScope::Root => "",
            StylesheetScope::Page => "../",
        }
    }

    pub fn class(self) -> Option<&'static str> {
        match self {
            StylesheetScope::Root => None,
            StylesheetScope::Page => Some(PAGE_CLASS),
        }
    }
}

/// Label the control shows after one toggle.
pub fn next_label(current: &str) -> &'static str {
    Theme::from_label(current).toggled().button_label()
}

/// Stylesheet href after one toggle. The whole path is replaced, not patched.
pub fn next_stylesheet_href(class: Option<&str>, href: &str) -> String {
    Theme::from_href(href)
        .toggled()
        .stylesheet_href(StylesheetScope::from_class(class))
}
