use crate::constants::{NOISE_CANVAS_ID, RESIZE_DEBOUNCE_MS};
use crate::dom;
use crate::noise;
use wasm_bindgen::{Clamped, JsCast};
use web_sys as web;

/// Size the canvas backing store to the viewport.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (w, h) = dom::viewport_size();
    let w_px = (w as u32).max(1);
    let h_px = (h as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

pub fn paint_noise(canvas: &web::HtmlCanvasElement) -> anyhow::Result<()> {
    let (w, h) = sync_canvas_to_viewport(canvas);
    let ctx = canvas
        .get_context("2d")
        .map_err(dom::js_err)?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let mut pixels = vec![0u8; noise::rgba_len(w, h)];
    noise::fill_noise(&mut pixels, &mut rand::thread_rng());
    let image = web::ImageData::new_with_u8_clamped_array_and_sh(Clamped(pixels.as_slice()), w, h)
        .map_err(dom::js_err)?;
    ctx.put_image_data(&image, 0.0, 0.0).map_err(dom::js_err)?;
    Ok(())
}

/// Paint the noise overlay once and repaint it after resizes settle.
pub fn init_noise(document: &web::Document) {
    let Some(canvas) = document
        .get_element_by_id(NOISE_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::debug!("[noise] no #{} on page", NOISE_CANVAS_ID);
        return;
    };
    if let Err(e) = paint_noise(&canvas) {
        log::warn!("[noise] paint failed: {:?}", e);
        return;
    }
    dom::on_debounced_resize(RESIZE_DEBOUNCE_MS, move || {
        if let Err(e) = paint_noise(&canvas) {
            log::warn!("[noise] repaint failed: {:?}", e);
        }
    });
}
