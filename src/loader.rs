use crate::constants::{
    ASSETS, CRITICAL_ASSETS, OVERLAY_REMOVE_DELAY_MS, REVEAL_DELAY_MS,
    STYLESHEET_POLL_INTERVAL_MS, STYLESHEET_POLL_TIMEOUT_MS,
};
use crate::dom;
use crate::frame::ParallaxHandle;
use crate::overlay::{self, DocumentOverlay};
use crate::preload::{
    stylesheet_poll_attempts, AssetOutcome, PreloadPlan, PreloadProgress, PreloadStrategy,
    StylesheetWait,
};
use crate::reveal::{finish_load, RevealSurface, Revealer};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub const PRELOAD_STRATEGY: PreloadStrategy = PreloadStrategy::CriticalFirst;

type SharedProgress = Rc<RefCell<PreloadProgress>>;

fn settle(progress: &SharedProgress, src: &str, outcome: AssetOutcome) {
    let (done, percent) = {
        let mut p = progress.borrow_mut();
        let done = p.record(outcome);
        (done, p.percent())
    };
    if outcome == AssetOutcome::Failed {
        log::warn!("[preload] failed to load {}", src);
    }
    if let Some(document) = dom::window_document() {
        overlay::set_progress(&document, percent);
    }
    if done {
        let p = progress.borrow();
        log::info!(
            "[preload] all {} assets settled ({} loaded, {} failed)",
            p.total(),
            p.loaded(),
            p.failed()
        );
    }
}

/// Start fetching `src` as an image. The promise resolves on load and on
/// error alike; it never rejects.
pub fn preload_image(src: &'static str, progress: SharedProgress) -> js_sys::Promise {
    let img = match web::HtmlImageElement::new() {
        Ok(img) => img,
        Err(_) => {
            settle(&progress, src, AssetOutcome::Failed);
            return js_sys::Promise::resolve(&JsValue::FALSE);
        }
    };
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let on_load_resolve = resolve.clone();
        let on_load_progress = progress.clone();
        let onload = Closure::once_into_js(move || {
            settle(&on_load_progress, src, AssetOutcome::Loaded);
            _ = on_load_resolve.call1(&JsValue::NULL, &JsValue::TRUE);
        });
        let on_error_progress = progress.clone();
        let onerror = Closure::once_into_js(move || {
            settle(&on_error_progress, src, AssetOutcome::Failed);
            _ = resolve.call1(&JsValue::NULL, &JsValue::FALSE);
        });
        img.set_onload(Some(onload.unchecked_ref()));
        img.set_onerror(Some(onerror.unchecked_ref()));
    });
    img.set_src(src);
    promise
}

/// Start every fetch now; the returned promise settles once all of them have.
fn preload_batch(assets: &[&'static str], progress: &SharedProgress) -> js_sys::Promise {
    let promises = js_sys::Array::new();
    for &src in assets {
        promises.push(&preload_image(src, progress.clone()));
    }
    js_sys::Promise::all(&promises)
}

pub async fn wait_stylesheet(document: &web::Document) -> StylesheetWait {
    let attempts =
        stylesheet_poll_attempts(STYLESHEET_POLL_INTERVAL_MS, STYLESHEET_POLL_TIMEOUT_MS);
    for _ in 0..attempts {
        let probe = dom::probe_first_stylesheet(document);
        if probe.is_settled() {
            return StylesheetWait::Settled(probe);
        }
        dom::sleep_ms(STYLESHEET_POLL_INTERVAL_MS).await;
    }
    StylesheetWait::TimedOut
}

async fn load_and_reveal(
    document: &web::Document,
    surface: &DocumentOverlay,
    revealer: &RefCell<Revealer>,
    init_page: impl FnOnce(&web::Document) -> Option<ParallaxHandle>,
) -> anyhow::Result<()> {
    let started = Instant::now();
    dom::wait_dom_ready(document).await?;

    match wait_stylesheet(document).await {
        StylesheetWait::Settled(probe) => log::debug!("[preload] stylesheet {:?}", probe),
        StylesheetWait::TimedOut => log::warn!(
            "[preload] stylesheet not ready after {}ms, continuing",
            STYLESHEET_POLL_TIMEOUT_MS
        ),
    }

    let plan = PreloadPlan::new(ASSETS, CRITICAL_ASSETS, PRELOAD_STRATEGY);
    let progress: SharedProgress = Rc::new(RefCell::new(PreloadProgress::new(plan.total())));
    JsFuture::from(preload_batch(&plan.gating, &progress))
        .await
        .map_err(dom::js_err)?;
    log::info!(
        "[preload] {} gating assets settled in {:?}",
        plan.gating.len(),
        started.elapsed()
    );

    let deferred =
        (!plan.deferred.is_empty()).then(|| preload_batch(&plan.deferred, &progress));

    dom::sleep_ms(REVEAL_DELAY_MS).await;
    revealer.borrow_mut().reveal(surface);
    let parallax = init_page(document);

    // deferred images change section heights once decoded
    if let Some(pending) = deferred {
        spawn_local(async move {
            if let Err(e) = JsFuture::from(pending).await {
                log::warn!("[preload] background pass error: {:?}", e);
            }
            if let Some(parallax) = parallax {
                parallax.remeasure();
            }
        });
    }

    let remover = DocumentOverlay::new(document);
    dom::set_timeout(OVERLAY_REMOVE_DELAY_MS, move || remover.remove_overlay());
    Ok(())
}

/// Preload, reveal and hand over to `init_page`. Never leaves the user on
/// the loading screen: any failure still reveals the content.
pub async fn run(
    document: web::Document,
    init_page: impl FnOnce(&web::Document) -> Option<ParallaxHandle>,
) {
    let surface = DocumentOverlay::new(&document);
    let revealer = RefCell::new(Revealer::default());
    let result = load_and_reveal(&document, &surface, &revealer, init_page).await;
    if finish_load(result, &mut revealer.borrow_mut(), &surface) {
        log::info!("[preload] content force-revealed");
    }
}
