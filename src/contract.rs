use kuchiki::iter::NodeIterator as _;
use kuchiki::traits::TendrilSink as _;

use crate::theme::{DARK_MODE_LABEL, LIGHT_MODE_LABEL, StylesheetScope, Theme};
use crate::toggle::{DEFAULT_CONTROL_ID, STYLESHEET_ID};

/// Checks that a generated page is something `switchDisplay` can operate on.
pub fn assert_toggle_contract(html: &str) -> anyhow::Result<()> {
    let doc = kuchiki::parse_html().one(html);

    let stylesheets: Vec<_> = doc
        .descendants()
        .elements()
        .filter(|el| el.attributes.borrow().get("id") == Some(STYLESHEET_ID))
        .collect();
    let stylesheet = match stylesheets.as_slice() {
        [one] => one,
        [] => anyhow::bail!("toggle contract failed: no #{STYLESHEET_ID} element"),
        many => anyhow::bail!(
            "toggle contract failed: {} elements share id {STYLESHEET_ID:?}",
            many.len()
        ),
    };

    let tag = stylesheet.name.local.to_string();
    if tag != "link" {
        anyhow::bail!("toggle contract failed: #{STYLESHEET_ID} is <{tag}>, expected <link>");
    }

    let attrs = stylesheet.attributes.borrow();
    let href = attrs.get("href").unwrap_or("");
    let scope = StylesheetScope::from_class(attrs.get("class"));
    let theme = Theme::from_href(href);
    let expected = theme.stylesheet_href(scope);
    if href != expected {
        anyhow::bail!(
            "toggle contract failed: <link href=\"{}\"> is not a recognized stylesheet (expected {})",
            href,
            expected
        );
    }

    let control = doc
        .descendants()
        .elements()
        .find(|el| el.attributes.borrow().get("id") == Some(DEFAULT_CONTROL_ID));
    let Some(control) = control else {
        anyhow::bail!("toggle contract failed: no #{DEFAULT_CONTROL_ID} control");
    };
    let label = control.as_node().text_contents();
    if label != DARK_MODE_LABEL && label != LIGHT_MODE_LABEL {
        anyhow::bail!("toggle contract failed: control label {label:?} is not a theme action");
    }
    if Theme::from_label(&label) != theme {
        anyhow::bail!(
            "toggle contract failed: control label {label:?} does not match stylesheet {href}"
        );
    }

    Ok(())
}
