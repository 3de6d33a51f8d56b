use crate::constants::{
    HIDDEN_CLASS, LOADED_CLASS, LOADING_PROGRESS_ID, LOADING_SCREEN_ID, MAIN_CONTENT_ID,
};
use crate::reveal::RevealSurface;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The page's loading screen and main content container.
pub struct DocumentOverlay {
    document: web::Document,
}

impl DocumentOverlay {
    pub fn new(document: &web::Document) -> Self {
        Self {
            document: document.clone(),
        }
    }
}

impl RevealSurface for DocumentOverlay {
    fn hide_overlay(&self) {
        if let Some(el) = self.document.get_element_by_id(LOADING_SCREEN_ID) {
            _ = el.class_list().add_1(HIDDEN_CLASS);
        }
    }

    fn mark_content_loaded(&self) {
        if let Some(el) = self.document.get_element_by_id(MAIN_CONTENT_ID) {
            _ = el.class_list().add_1(LOADED_CLASS);
        }
    }

    fn remove_overlay(&self) {
        if let Some(el) = self.document.get_element_by_id(LOADING_SCREEN_ID) {
            el.remove();
        }
    }
}

/// Reflect preload progress on `#loading-progress` if the markup has one.
pub fn set_progress(document: &web::Document, percent: f64) {
    if let Some(el) = document
        .get_element_by_id(LOADING_PROGRESS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = el
            .style()
            .set_property("width", &format!("{:.0}%", percent.clamp(0.0, 100.0)));
    }
}
