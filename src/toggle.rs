use anyhow::Context as _;
use kuchiki::iter::NodeIterator as _;
use kuchiki::traits::TendrilSink as _;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

use crate::theme::{self, DARK_MODE_LABEL, LIGHT_MODE_LABEL, Theme};

pub const STYLESHEET_ID: &str = "stylesheet";
pub const DEFAULT_CONTROL_ID: &str = "theme-toggle";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ToggleError {
    #[error("no element with id {id:?} in document")]
    MissingElement { id: String },
}

/// Flips the control label and the `#stylesheet` href of `document`.
///
/// Both elements are resolved before anything is written, so a missing stylesheet leaves the
/// document untouched. Returns the theme the stylesheet selects afterwards.
pub fn toggle_theme(
    document: &NodeRef,
    control: &NodeDataRef<ElementData>,
) -> Result<Theme, ToggleError> {
    let stylesheet = find_by_id(document, STYLESHEET_ID)?;

    let label = control.as_node().text_contents();
    let (class, href) = {
        let attrs = stylesheet.attributes.borrow();
        (
            attrs.get("class").map(str::to_string),
            attrs.get("href").unwrap_or("").to_string(),
        )
    };

    if label != DARK_MODE_LABEL && label != LIGHT_MODE_LABEL {
        tracing::warn!(%label, "unrecognized control label; normalizing to {DARK_MODE_LABEL:?}");
    } else if Theme::from_label(&label) != Theme::from_href(&href) {
        tracing::warn!(%label, %href, "control label and stylesheet disagree before toggle");
    }

    let next_label = theme::next_label(&label);
    let next_href = theme::next_stylesheet_href(class.as_deref(), &href);

    set_text(control.as_node(), next_label);
    stylesheet
        .attributes
        .borrow_mut()
        .insert("href", next_href.clone());

    tracing::debug!(label = next_label, href = %next_href, "theme toggled");
    Ok(Theme::from_href(&next_href))
}

/// Like [`toggle_theme`], resolving the control element by id as well.
pub fn toggle_theme_by_id(document: &NodeRef, control_id: &str) -> Result<Theme, ToggleError> {
    let control = find_by_id(document, control_id)?;
    toggle_theme(document, &control)
}

/// Parses `html`, toggles it and serializes the whole document back.
pub fn toggle_html(html: &str, control_id: &str) -> anyhow::Result<(String, Theme)> {
    let document = kuchiki::parse_html().one(html);
    let theme = toggle_theme_by_id(&document, control_id)?;

    let mut out = Vec::new();
    document
        .serialize(&mut out)
        .context("serialize toggled document")?;
    let html = String::from_utf8(out).context("toggled html not utf-8")?;
    Ok((html, theme))
}

pub(crate) fn find_by_id(
    document: &NodeRef,
    id: &str,
) -> Result<NodeDataRef<ElementData>, ToggleError> {
    document
        .descendants()
        .elements()
        .find(|el| el.attributes.borrow().get("id") == Some(id))
        .ok_or_else(|| ToggleError::MissingElement { id: id.to_string() })
}

fn set_text(node: &NodeRef, text: &str) {
    let children: Vec<_> = node.children().collect();
    for child in children {
        child.detach();
    }
    node.append(NodeRef::new_text(text));
}
