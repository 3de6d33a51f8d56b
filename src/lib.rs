#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod frame;
mod loader;
mod noise;
mod overlay;
mod parallax;
mod preload;
mod reveal;
mod schedule;

/// Decorations that only make sense once the content is visible.
fn init_page(document: &web::Document) -> Option<frame::ParallaxHandle> {
    canvas::init_noise(document);
    frame::start_parallax(document)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("labubu-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    spawn_local(loader::run(document, init_page));
    Ok(())
}
