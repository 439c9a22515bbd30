use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

use crate::fiddle::KeyFilter;
use crate::theme::StylesheetScope;

pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Contents of `settings.json`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub parser_settings: ParserSettings,
    pub comparator_settings: ComparatorSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    /// Folder holding the game's JSON files.
    pub game_path: PathBuf,
    /// Render `<details>` elements expanded.
    pub is_open: bool,
    /// Link the dark stylesheet initially.
    pub dark_mode: bool,
    pub filter: KeyFilter,
    /// Nest `a/b/c` keys into objects before rendering.
    pub serialize: bool,
    pub stylesheet_scope: StylesheetScope,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            game_path: PathBuf::from("."),
            is_open: false,
            dark_mode: false,
            filter: KeyFilter::default(),
            serialize: false,
            stylesheet_scope: StylesheetScope::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VersionSource {
    pub path: PathBuf,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ComparatorSettings {
    pub v1: VersionSource,
    pub v2: VersionSource,
    pub output_folder: PathBuf,
    pub filter: KeyFilter,
    pub serialize: bool,
    pub name: String,
    pub dump_json: bool,
    pub dump_html: bool,
}

impl Default for ComparatorSettings {
    fn default() -> Self {
        Self {
            v1: VersionSource::default(),
            v2: VersionSource::default(),
            output_folder: PathBuf::from("."),
            filter: KeyFilter::default(),
            serialize: false,
            name: String::new(),
            dump_json: true,
            dump_html: true,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from `settings.json` in the working directory when no
    /// path is given. Only the implicit default file may be absent.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
        };

        if !explicit && !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file; using defaults");
            return Ok(Self::default());
        }

        let bytes = std::fs::read(&path).with_context(|| format!("read {}", path.display()))?;
        let settings: Settings = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse settings {}", path.display()))?;
        tracing::info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }
}
