//! VaultAI App: WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the stubs and browser adapters and hands them to the egui UI.

mod app;

use vault_types::config::AppConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const CANVAS_ID: &str = "vault_canvas";

/// WASM entry point, called from index.html
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("VaultAI WASM starting...");

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("No canvas element with id 'vault_canvas'"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("Element is not a canvas"))?;

    let config = load_config(&canvas);
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::VaultApp::new(cc, config)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });
    Ok(())
}

/// Settings come from the canvas `data-config` attribute as JSON.
fn load_config(canvas: &web_sys::HtmlCanvasElement) -> AppConfig {
    match canvas.get_attribute("data-config") {
        Some(json) => AppConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring invalid data-config: {}", e);
            AppConfig::default()
        }),
        None => AppConfig::default(),
    }
}
