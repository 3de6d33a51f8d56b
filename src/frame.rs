use crate::constants::{PARALLAX_SPECS, RESIZE_DEBOUNCE_MS};
use crate::dom;
use crate::parallax::{ParallaxBinding, ParallaxDriver};
use crate::schedule::FrameGate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type DomDriver = ParallaxDriver<web::HtmlElement, web::HtmlElement>;
type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct ParallaxRuntime {
    pub driver: DomDriver,
    pub gate: FrameGate,
}

impl ParallaxRuntime {
    pub fn frame(&mut self) -> bool {
        self.driver.frame(dom::scroll_y())
    }
}

/// Resolve every configured binding present in the markup.
pub fn collect_bindings(document: &web::Document) -> DomDriver {
    ParallaxDriver::new(PARALLAX_SPECS.iter().filter_map(|spec| {
        let section = dom::query_html(document, spec.section);
        let targets = if spec.all_matches {
            dom::query_all_html(document, spec.target)
        } else {
            dom::query_html(document, spec.target).into_iter().collect()
        };
        match section {
            Some(section) if !targets.is_empty() => {
                Some(ParallaxBinding::new(targets, section, spec))
            }
            _ => {
                log::debug!("[parallax] skipping {} (missing element or section)", spec.target);
                None
            }
        }
    }))
}

fn request_frame(runtime: &Rc<RefCell<ParallaxRuntime>>, tick: &TickSlot) {
    if !runtime.borrow_mut().gate.try_begin() {
        return;
    }
    let requested = match (web::window(), tick.borrow().as_ref()) {
        (Some(w), Some(cb)) => w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok(),
        _ => false,
    };
    if !requested {
        runtime.borrow_mut().gate.finish();
    }
}

/// Handle kept by the loader so late layout changes (deferred assets
/// landing) can refresh the cached ranges.
#[derive(Clone)]
pub struct ParallaxHandle {
    runtime: Rc<RefCell<ParallaxRuntime>>,
    tick: TickSlot,
}

impl ParallaxHandle {
    /// Re-read section geometry and animate toward the new targets if any range moved.
    pub fn remeasure(&self) {
        let (_, viewport_h) = dom::viewport_size();
        let changed = {
            let mut rt = self.runtime.borrow_mut();
            let changed = rt.driver.measure(viewport_h);
            log::debug!(
                "[parallax] ranges recomputed for viewport {}px (changed: {})",
                rt.driver.viewport_height(),
                changed
            );
            changed
        };
        if changed {
            request_frame(&self.runtime, &self.tick);
        }
    }
}

/// Wire scroll/resize listeners and run the first frame. Returns None when
/// the page has none of the decorative elements.
pub fn start_parallax(document: &web::Document) -> Option<ParallaxHandle> {
    let mut driver = collect_bindings(document);
    if driver.is_empty() {
        log::info!("[parallax] no bindings on page");
        return None;
    }
    let (_, viewport_h) = dom::viewport_size();
    driver.measure(viewport_h);
    log::info!("[parallax] {} bindings", driver.bindings().len());

    let runtime = Rc::new(RefCell::new(ParallaxRuntime {
        driver,
        gate: FrameGate::default(),
    }));

    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let runtime_tick = runtime.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let moving = {
            let mut rt = runtime_tick.borrow_mut();
            rt.gate.finish();
            rt.frame()
        };
        if moving {
            request_frame(&runtime_tick, &tick_clone);
        }
    }) as Box<dyn FnMut()>));

    let handle = ParallaxHandle { runtime, tick };
    {
        let runtime = handle.runtime.clone();
        let tick = handle.tick.clone();
        dom::add_window_listener("scroll", move || request_frame(&runtime, &tick));
    }
    {
        let handle = handle.clone();
        dom::on_debounced_resize(RESIZE_DEBOUNCE_MS, move || handle.remeasure());
    }

    request_frame(&handle.runtime, &handle.tick);
    Some(handle)
}
