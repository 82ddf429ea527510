//! Nexus Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod data_store;
mod element;
mod error;
mod filters;
mod models;
mod pages;
mod router;
mod storage;
mod store;
mod utils;

use app::App;
use config::AppConfig;
use element::{create_element, ElementConfig};
use leptos::mount::{mount_to, mount_to_body};
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.log_level)
            .build(),
    );
    tracing::info!("Nexus Dashboard starting, API at {}", config.api_base_url);

    match build_scaffold() {
        Ok(root) => mount_to(root, move || view! { <App config=config /> }).forget(),
        Err(e) => {
            tracing::error!("Could not build page scaffold, mounting on <body>: {:?}", e);
            mount_to_body(move || view! { <App config=config /> });
        }
    }
}

/// Background overlay and the `#root` mount point, inside `#app` when present
fn build_scaffold() -> Result<web_sys::HtmlElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let host: web_sys::Element = match document.get_element_by_id("app") {
        Some(app) => app,
        None => document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .into(),
    };

    let overlay = create_element(
        "div",
        ElementConfig::new().class_name("grid-overlay").attr("aria-hidden", "true"),
    )?;
    let root = create_element("div", ElementConfig::new().id("root"))?;
    host.append_child(&overlay)?;
    host.append_child(&root)?;

    root.dyn_into::<web_sys::HtmlElement>().map_err(JsValue::from)
}
