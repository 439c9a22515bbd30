#![cfg(target_arch = "wasm32")]

use fiddletools_browser_tests::THEME_TOGGLE_JS;
use wasm_bindgen::JsCast as _;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// A `#stylesheet` link and a `#theme-toggle` button wired the way generated pages wire them.
struct Page {
    root: Element,
    control: HtmlElement,
}

impl Page {
    fn new(label: &str, class: Option<&str>, href: Option<&str>) -> Self {
        js_sys::eval(&format!("{THEME_TOGGLE_JS}\nwindow.switchDisplay = switchDisplay;")).unwrap();

        let doc = document();
        let root = doc.create_element("div").unwrap();
        if let Some(href) = href {
            let link = doc.create_element("link").unwrap();
            link.set_id("stylesheet");
            link.set_attribute("rel", "stylesheet").unwrap();
            link.set_attribute("href", href).unwrap();
            if let Some(class) = class {
                link.set_attribute("class", class).unwrap();
            }
            root.append_child(&link).unwrap();
        }

        let control: HtmlElement = doc.create_element("button").unwrap().dyn_into().unwrap();
        control.set_id("theme-toggle");
        control.set_attribute("onclick", "switchDisplay(this)").unwrap();
        control.set_text_content(Some(label));
        root.append_child(&control).unwrap();

        doc.body().unwrap().append_child(&root).unwrap();
        Self { root, control }
    }

    fn click(&self) {
        self.control.click();
    }

    fn label(&self) -> String {
        self.control.text_content().unwrap_or_default()
    }

    fn href(&self) -> Option<String> {
        document()
            .get_element_by_id("stylesheet")
            .and_then(|s| s.get_attribute("href"))
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.root.remove();
    }
}

#[wasm_bindgen_test]
fn dark_mode_label_on_root_page() {
    let page = Page::new("Dark Mode", None, Some("fiddletools.css"));
    page.click();
    assert_eq!(page.label(), "Light Mode");
    assert_eq!(page.href().as_deref(), Some("fiddletools_dark.css"));
}

#[wasm_bindgen_test]
fn light_mode_label_on_nested_page() {
    let page = Page::new("Light Mode", Some("page"), Some("../fiddletools_dark.css"));
    page.click();
    assert_eq!(page.label(), "Dark Mode");
    assert_eq!(page.href().as_deref(), Some("../fiddletools.css"));
}

#[wasm_bindgen_test]
fn unknown_label_normalizes_to_dark_mode() {
    let page = Page::new("Welcome", None, Some("fiddletools_dark.css"));
    page.click();
    assert_eq!(page.label(), "Dark Mode");
    assert_eq!(page.href().as_deref(), Some("fiddletools.css"));
}

#[wasm_bindgen_test]
fn two_clicks_restore_the_page() {
    let page = Page::new("Dark Mode", None, Some("fiddletools.css"));
    page.click();
    page.click();
    assert_eq!(page.label(), "Dark Mode");
    assert_eq!(page.href().as_deref(), Some("fiddletools.css"));
}

#[wasm_bindgen_test]
fn missing_stylesheet_leaves_label_alone() {
    let page = Page::new("Dark Mode", None, None);
    page.click();
    assert_eq!(page.label(), "Dark Mode");
    assert_eq!(page.href(), None);
}
