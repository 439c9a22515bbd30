use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::builtin;
use crate::theme::{StylesheetScope, Theme};

/// Directory a page's stylesheet hrefs resolve against.
pub fn stylesheet_dir(out_dir: &Path, scope: StylesheetScope) -> PathBuf {
    match scope {
        StylesheetScope::Root => out_dir.to_path_buf(),
        StylesheetScope::Page => out_dir.join(".."),
    }
}

/// Writes both theme stylesheets so either href a page can toggle to exists.
pub fn write_stylesheets(out_dir: &Path, scope: StylesheetScope) -> anyhow::Result<PathBuf> {
    let dir = stylesheet_dir(out_dir, scope);
    std::fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    for (theme, css) in [(Theme::Light, builtin::LIGHT_CSS), (Theme::Dark, builtin::DARK_CSS)] {
        let path = dir.join(theme.stylesheet_file());
        std::fs::write(&path, css).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(dir)
}

pub fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }
    std::fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}
