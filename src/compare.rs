use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde_json::{Map, Value};

use crate::fiddle::{FiddleDocument, RenderOptions};
use crate::settings::VersionSource;

/// Keys that differ between `old` and `new`.
///
/// A key present in both whose values are unequal maps to `{v1: old, v2: new}`, or to the
/// recursive difference when both values are objects. Keys present on one side only map to
/// `{v1: old}` or `{v2: new}`.
pub fn find_differences(
    old: &Map<String, Value>,
    new: &Map<String, Value>,
    v1: &str,
    v2: &str,
) -> Map<String, Value> {
    let mut diff = Map::new();

    for (key, a) in old {
        match (a, new.get(key)) {
            (a, Some(b)) if a == b => {}
            (Value::Object(a), Some(Value::Object(b))) => {
                diff.insert(key.clone(), Value::Object(find_differences(a, b, v1, v2)));
            }
            (a, Some(b)) => {
                diff.insert(key.clone(), side_by_side([(v1, a), (v2, b)]));
            }
            (a, None) => {
                diff.insert(key.clone(), side_by_side([(v1, a)]));
            }
        }
    }

    for (key, b) in new {
        if !old.contains_key(key) {
            diff.insert(key.clone(), side_by_side([(v2, b)]));
        }
    }

    diff
}

fn side_by_side<const N: usize>(entries: [(&str, &Value); N]) -> Value {
    Value::Object(
        entries
            .into_iter()
            .map(|(version, value)| (version.to_string(), value.clone()))
            .collect(),
    )
}

/// Differences between two versions of a game data file.
#[derive(Debug)]
pub struct Comparator {
    name: String,
    v1: String,
    v2: String,
    differences: Map<String, Value>,
}

impl Comparator {
    /// Reads both versions concurrently and computes their differences.
    pub async fn load(old: &VersionSource, new: &VersionSource, name: &str) -> anyhow::Result<Self> {
        let (a, b) = tokio::try_join!(read_object(&old.path), read_object(&new.path))?;
        let differences = find_differences(&a, &b, &old.version, &new.version);
        tracing::info!(
            v1 = %old.version,
            v2 = %new.version,
            changed = differences.len(),
            "compared versions"
        );
        Ok(Self {
            name: name.to_string(),
            v1: old.version.clone(),
            v2: new.version.clone(),
            differences,
        })
    }

    pub fn differences(&self) -> &Map<String, Value> {
        &self.differences
    }

    pub fn file_stem(&self) -> String {
        format!("compare-{}-_{}-{}", self.name, self.v1, self.v2)
    }

    /// Writes the differences next to the html page; returns the path and the byte count written.
    pub fn write_json(&self, out_dir: &Path) -> anyhow::Result<(PathBuf, usize)> {
        let path = out_dir.join(format!("{}.json", self.file_stem()));
        let json = serde_json::to_string(&self.differences).context("encode differences")?;
        crate::assets::write_output(&path, &json)?;
        Ok((path, json.len()))
    }

    pub fn to_document(&self, options: RenderOptions) -> FiddleDocument {
        FiddleDocument::from_value(
            self.file_stem(),
            Value::Object(self.differences.clone()),
            options,
        )
    }
}

async fn read_object(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("read {}", path.display()))?;
    let value: Value =
        serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => anyhow::bail!("{} is not a JSON object", path.display()),
    }
}
