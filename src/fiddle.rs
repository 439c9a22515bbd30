use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::ValueEnum;
use serde::Deserialize;
use serde_json::Value;

use crate::nest::nest_slash_keys;
use crate::theme::{StylesheetScope, Theme};

pub const DEFAULT_FIDDLE_NAME: &str = "__fiddle__";

/// Which top-level keys of a document get rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeyFilter {
    /// Skip keys containing `/`; the fiddle repeats most entries under slash paths.
    #[default]
    Slashes,
    /// Keep every key.
    None,
}

impl KeyFilter {
    pub fn keeps(self, key: &str) -> bool {
        match self {
            KeyFilter::Slashes => !key.contains('/'),
            KeyFilter::None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub is_open: bool,
    pub theme: Theme,
    pub scope: StylesheetScope,
    pub filter: KeyFilter,
    pub serialize: bool,
}

/// A game data JSON file ready to be rendered.
#[derive(Debug)]
pub struct FiddleDocument {
    name: String,
    data: Value,
    options: RenderOptions,
}

impl FiddleDocument {
    /// Reads `<dir>/<name>.json`.
    pub fn load(dir: &Path, name: &str, options: RenderOptions) -> anyhow::Result<Self> {
        let path = dir.join(format!("{name}.json"));
        if !path.exists() {
            anyhow::bail!(
                "{} does not exist in the given directory {}",
                path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default(),
                dir.display()
            );
        }
        let bytes = std::fs::read(&path).with_context(|| format!("read {}", path.display()))?;
        let data: Value = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded fiddle document");
        Ok(Self::from_value(name, data, options))
    }

    pub fn from_value(name: impl Into<String>, data: Value, options: RenderOptions) -> Self {
        let data = match data {
            Value::Object(map) if options.serialize => Value::Object(nest_slash_keys(map)),
            other => other,
        };
        Self {
            name: name.into(),
            data,
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Top-level keys that survive the key filter, in document order.
    pub fn keys(&self) -> Vec<&str> {
        match &self.data {
            Value::Object(map) => map
                .keys()
                .map(String::as_str)
                .filter(|k| self.options.filter.keeps(k))
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn html_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(format!("{}.html", self.name))
    }
}
