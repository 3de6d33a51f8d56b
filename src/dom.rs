use crate::parallax::{SectionBox, TransformSink};
use crate::preload::SheetProbe;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[inline]
pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all_html(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

impl TransformSink for web::HtmlElement {
    fn translate_y(&self, px: f64) {
        _ = self
            .style()
            .set_property("transform", &crate::parallax::translate_y_css(px));
    }
}

impl SectionBox for web::HtmlElement {
    fn document_top(&self) -> f64 {
        self.get_bounding_client_rect().top() + scroll_y()
    }

    fn height(&self) -> f64 {
        self.offset_height() as f64
    }
}

/// Resolves after `ms` milliseconds (immediately without a window).
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web::window()
            .map(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                    .is_ok()
            })
            .unwrap_or(false);
        if !scheduled {
            _ = resolve.call0(&JsValue::NULL);
        }
    });
    _ = JsFuture::from(promise).await;
}

pub async fn wait_dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    JsFuture::from(promise).await.map_err(js_err)?;
    Ok(())
}

pub fn probe_first_stylesheet(document: &web::Document) -> SheetProbe {
    let sheets = document.style_sheets();
    if sheets.length() == 0 {
        return SheetProbe::Absent;
    }
    let Some(sheet) = sheets
        .item(0)
        .and_then(|s| s.dyn_into::<web::CssStyleSheet>().ok())
    else {
        return SheetProbe::Pending;
    };
    match sheet.css_rules() {
        Ok(_) => SheetProbe::Readable,
        Err(_) => SheetProbe::CrossOrigin,
    }
}

pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

pub fn set_timeout(ms: i32, handler: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(handler);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        ms,
    );
}

/// Run `handler` once resize events have been quiet for `delay_ms`.
pub fn on_debounced_resize(delay_ms: i32, handler: impl FnMut() + 'static) {
    use crate::schedule::Debounce;
    use std::cell::RefCell;
    use std::rc::Rc;

    let debounce = Rc::new(RefCell::new(Debounce::default()));
    let handler = Rc::new(RefCell::new(handler));
    add_window_listener("resize", move || {
        let ticket = debounce.borrow_mut().trigger();
        let debounce = debounce.clone();
        let handler = handler.clone();
        set_timeout(delay_ms, move || {
            if debounce.borrow_mut().settle(ticket) {
                (&mut *handler.borrow_mut())();
            }
        });
    });
}
