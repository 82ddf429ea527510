//! Element Builder
//!
//! Builds a single DOM element from a declarative configuration and returns
//! the element itself.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

type Handler = Box<dyn FnMut(web_sys::Event)>;

/// A child appended in order
pub enum Child {
    /// Existing node, appended as is
    Node(web_sys::Node),
    /// Element built from its own configuration
    Element { tag: String, config: ElementConfig },
}

#[derive(Default)]
pub struct ElementConfig {
    class_name: Option<String>,
    id: Option<String>,
    /// Set as text content, so markup in it is escaped
    text: Option<String>,
    /// Inserted as markup without escaping
    html: Option<String>,
    children: Vec<Child>,
    attrs: Vec<(String, String)>,
    events: Vec<(String, Handler)>,
}

impl ElementConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[allow(dead_code)]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Raw markup; callers must not pass user-supplied text here
    #[allow(dead_code)]
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    #[allow(dead_code)]
    pub fn child(mut self, node: impl Into<web_sys::Node>) -> Self {
        self.children.push(Child::Node(node.into()));
        self
    }

    #[allow(dead_code)]
    pub fn child_element(mut self, tag: impl Into<String>, config: ElementConfig) -> Self {
        self.children.push(Child::Element { tag: tag.into(), config });
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    #[allow(dead_code)]
    pub fn on(mut self, event: impl Into<String>, handler: impl FnMut(web_sys::Event) + 'static) -> Self {
        self.events.push((event.into(), Box::new(handler)));
        self
    }
}

/// Creates `<tag>` configured by `config`. Options apply in order: class, id,
/// text, markup, children, attributes, then listeners.
pub fn create_element(tag: &str, config: ElementConfig) -> Result<web_sys::Element, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    build(&document, tag, config)
}

fn build(document: &web_sys::Document, tag: &str, config: ElementConfig) -> Result<web_sys::Element, JsValue> {
    let element = document.create_element(tag)?;

    if let Some(class_name) = &config.class_name {
        element.set_class_name(class_name);
    }
    if let Some(id) = &config.id {
        element.set_id(id);
    }
    if let Some(text) = &config.text {
        element.set_text_content(Some(text));
    }
    if let Some(html) = &config.html {
        element.set_inner_html(html);
    }

    for child in config.children {
        match child {
            Child::Node(node) => {
                element.append_child(&node)?;
            }
            Child::Element { tag, config } => {
                let built = build(document, &tag, config)?;
                element.append_child(&built)?;
            }
        }
    }

    for (name, value) in &config.attrs {
        element.set_attribute(name, value)?;
    }

    for (event, handler) in config.events {
        let closure = Closure::wrap(handler);
        element.add_event_listener_with_callback(&event, closure.as_ref().unchecked_ref())?;
        // Lives as long as the page
        closure.forget();
    }

    Ok(element)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_text_is_escaped_and_html_is_not() {
        let escaped = create_element("h3", ElementConfig::new().text("<b>Ann</b>")).unwrap();
        assert_eq!(escaped.inner_html(), "&lt;b&gt;Ann&lt;/b&gt;");

        let raw = create_element("div", ElementConfig::new().html("<span>ok</span>")).unwrap();
        assert_eq!(raw.children().length(), 1);
    }

    #[wasm_bindgen_test]
    fn test_class_id_attrs_and_children() {
        let element = create_element(
            "div",
            ElementConfig::new()
                .class_name("stat-card")
                .id("total")
                .attr("data-user-id", "42")
                .child_element("div", ElementConfig::new().class_name("stat-value").text("3"))
                .child_element("div", ElementConfig::new().class_name("stat-label").text("Всего")),
        )
        .unwrap();

        assert_eq!(element.class_name(), "stat-card");
        assert_eq!(element.id(), "total");
        assert_eq!(element.get_attribute("data-user-id").as_deref(), Some("42"));
        assert_eq!(element.text_content().as_deref(), Some("3Всего"));
    }

    #[wasm_bindgen_test]
    fn test_event_handler_is_bound() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let button = create_element(
            "button",
            ElementConfig::new().text("+").on("click", move |_| counter.set(counter.get() + 1)),
        )
        .unwrap();

        let event = web_sys::Event::new("click").unwrap();
        button.dispatch_event(&event).unwrap();
        button.dispatch_event(&event).unwrap();
        assert_eq!(clicks.get(), 2);
    }
}
