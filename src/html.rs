use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde_json::{Map, Value};

use crate::builtin;
use crate::fiddle::{FiddleDocument, RenderOptions};
use crate::nest::nest_slash_keys;
use crate::toggle::{DEFAULT_CONTROL_ID, STYLESHEET_ID};

pub fn build_html(doc: &FiddleDocument) -> String {
    let opts = doc.options();
    let title = doc.name();
    let href = opts.theme.stylesheet_href(opts.scope);

    let body = match doc.data() {
        Value::Object(map) => render_details(map, doc.keys(), opts),
        Value::Array(items) => render_list(items, opts),
        other => html! { div { (scalar_text(other)) } },
    };

    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" id=(STYLESHEET_ID) class=[opts.scope.class()] href=(href);
            }
            body class="fiddle" {
                header class="fiddle-topbar" {
                    h1 class="fiddle-title" { (title) }
                    button type="button" id=(DEFAULT_CONTROL_ID) class="fiddle-btn"
                        onclick="switchDisplay(this)" { (opts.theme.button_label()) }
                }
                main class="fiddle-main" {
                    (body)
                }
                script { (PreEscaped(builtin::THEME_TOGGLE_JS)) }
            }
        }
    };
    markup.into_string()
}

fn render_details<'a>(
    map: &Map<String, Value>,
    keys: impl IntoIterator<Item = &'a str>,
    opts: &RenderOptions,
) -> Markup {
    html! {
        @for key in keys {
            @if let Some(value) = map.get(key) {
                details open[opts.is_open] {
                    summary { (key) }
                    (render_entry(value, opts))
                }
            }
        }
    }
}

fn render_entry(value: &Value, opts: &RenderOptions) -> Markup {
    match value {
        Value::Object(map) => render_object(map, opts),
        Value::Array(items) => render_list(items, opts),
        other => html! { div { (scalar_text(other)) } },
    }
}

fn render_object(map: &Map<String, Value>, opts: &RenderOptions) -> Markup {
    if opts.serialize {
        let nested = nest_slash_keys(map.clone());
        render_details(&nested, nested.keys().map(String::as_str), opts)
    } else {
        render_details(map, map.keys().map(String::as_str), opts)
    }
}

fn render_list(items: &[Value], opts: &RenderOptions) -> Markup {
    html! {
        ul {
            @for item in items {
                li {
                    @match item {
                        Value::Object(map) => { (render_object(map, opts)) }
                        Value::Array(inner) => { (render_list(inner, opts)) }
                        other => { (scalar_text(other)) }
                    }
                }
            }
        }
    }
}

/// Strings render bare; other scalars in their JSON form.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::fiddle::KeyFilter;
    use crate::theme::{StylesheetScope, Theme};

    fn doc(data: Value, opts: RenderOptions) -> FiddleDocument {
        FiddleDocument::from_value("items", data, opts)
    }

    #[test]
    fn objects_become_details_and_arrays_lists() {
        let html = build_html(&doc(
            json!({"apple": {"price": 5, "tags": ["red", {"x": true}]}}),
            RenderOptions::default(),
        ));
        assert!(html.contains("<details><summary>apple</summary>"));
        assert!(html.contains("<details><summary>price</summary><div>5</div></details>"));
        assert!(html.contains("<ul><li>red</li><li><details><summary>x</summary><div>true</div></details></li></ul>"));
    }

    #[test]
    fn open_flag_expands_details() {
        let html = build_html(&doc(
            json!({"a": "b"}),
            RenderOptions {
                is_open: true,
                ..Default::default()
            },
        ));
        assert!(html.contains("<details open><summary>a</summary><div>b</div></details>"));
    }

    #[test]
    fn head_links_stylesheet_for_theme_and_scope() {
        let html = build_html(&doc(json!({}), RenderOptions::default()));
        assert!(html.contains(r#"<link rel="stylesheet" id="stylesheet" href="fiddletools.css">"#));
        assert!(html.contains(">Dark Mode</button>"));

        let html = build_html(&doc(
            json!({}),
            RenderOptions {
                theme: Theme::Dark,
                scope: StylesheetScope::Page,
                ..Default::default()
            },
        ));
        assert!(html.contains(
            r#"<link rel="stylesheet" id="stylesheet" class="page" href="../fiddletools_dark.css">"#
        ));
        assert!(html.contains(">Light Mode</button>"));
    }

    #[test]
    fn filtered_keys_are_skipped_and_text_escaped() {
        let html = build_html(&doc(
            json!({"a/b": 1, "c": "<b>&</b>"}),
            RenderOptions {
                filter: KeyFilter::Slashes,
                ..Default::default()
            },
        ));
        assert!(!html.contains("<summary>a/b</summary>"));
        assert!(html.contains("<div>&lt;b&gt;&amp;&lt;/b&gt;</div>"));
    }

    #[test]
    fn nested_objects_are_serialized_when_enabled() {
        let html = build_html(&doc(
            json!({"npc": {"dialogue/hello": "hi"}}),
            RenderOptions {
                serialize: true,
                ..Default::default()
            },
        ));
        assert!(html.contains("<summary>dialogue</summary><details><summary>hello</summary><div>hi</div></details>"));
    }
}
