use crate::constants::{ParallaxSpec, MIN_SMOOTHING_SPEED, PARALLAX_SLOTS, SETTLE_EPSILON_PX};
use smallvec::SmallVec;

/// Something a vertical translation can be applied to.
pub trait TransformSink {
    fn translate_y(&self, px: f64);
}

/// Document-relative geometry of a reference section.
pub trait SectionBox {
    fn document_top(&self) -> f64;
    fn height(&self) -> f64;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    pub fn for_section(top: f64, height: f64, viewport_height: f64, lead_viewport: bool) -> Self {
        let start = if lead_viewport {
            top - viewport_height
        } else {
            top
        };
        Self {
            start,
            end: top + height,
        }
    }

    /// Position of `scroll_y` inside the range, clamped to [0, 1].
    pub fn progress(&self, scroll_y: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 || !span.is_finite() {
            return if scroll_y >= self.end { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / span).clamp(0.0, 1.0)
    }
}

#[inline]
pub fn raw_offset(progress: f64, max_movement: f64) -> f64 {
    progress * max_movement
}

/// One step of linear interpolation toward `target`.
#[inline]
pub fn approach(current: f64, target: f64, speed: f64) -> f64 {
    current + (target - current) * speed
}

pub fn translate_y_css(px: f64) -> String {
    // two decimals is below what the compositor can show; avoid "-0"
    let rounded = (px * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("translateY({}px)", rounded)
}

pub struct ParallaxBinding<E, S> {
    pub targets: Vec<E>,
    pub section: S,
    pub max_movement: f64,
    pub speed: f64,
    pub lead_viewport: bool,
    range: Option<ScrollRange>,
    offset: f64,
    applied: Option<f64>,
}

impl<E: TransformSink, S: SectionBox> ParallaxBinding<E, S> {
    pub fn new(targets: Vec<E>, section: S, spec: &ParallaxSpec) -> Self {
        Self {
            targets,
            section,
            max_movement: spec.max_movement,
            speed: spec.speed.clamp(MIN_SMOOTHING_SPEED, 1.0),
            lead_viewport: spec.lead_viewport,
            range: None,
            offset: 0.0,
            applied: None,
        }
    }

    /// Returns true if the cached range moved.
    pub fn measure(&mut self, viewport_height: f64) -> bool {
        let range = Some(ScrollRange::for_section(
            self.section.document_top(),
            self.section.height(),
            viewport_height,
            self.lead_viewport,
        ));
        let changed = self.range != range;
        self.range = range;
        changed
    }

    #[cfg_attr(not(test), allow(dead_code))]
    #[inline]
    pub fn range(&self) -> Option<ScrollRange> {
        self.range
    }

    #[cfg_attr(not(test), allow(dead_code))]
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn target(&self, scroll_y: f64) -> Option<f64> {
        self.range
            .map(|r| raw_offset(r.progress(scroll_y), self.max_movement))
    }

    /// Advance one frame. Returns true while the offset has not reached its target.
    pub fn step(&mut self, scroll_y: f64) -> bool {
        let Some(target) = self.target(scroll_y) else {
            return false;
        };
        let mut next = approach(self.offset, target, self.speed);
        if (target - next).abs() <= SETTLE_EPSILON_PX {
            next = target;
        }
        self.offset = next;
        if self.applied != Some(next) {
            for el in &self.targets {
                el.translate_y(next);
            }
            self.applied = Some(next);
        }
        (target - next).abs() > SETTLE_EPSILON_PX
    }
}

/// Owns every active binding of the page.
pub struct ParallaxDriver<E, S> {
    bindings: SmallVec<[ParallaxBinding<E, S>; PARALLAX_SLOTS]>,
    viewport_height: f64,
}

impl<E: TransformSink, S: SectionBox> ParallaxDriver<E, S> {
    pub fn new(bindings: impl IntoIterator<Item = ParallaxBinding<E, S>>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            viewport_height: 0.0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    #[inline]
    pub fn bindings(&self) -> &[ParallaxBinding<E, S>] {
        &self.bindings
    }

    #[inline]
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Recompute cached scroll ranges from current layout. Returns true if
    /// any range moved, i.e. the offsets need another frame.
    pub fn measure(&mut self, viewport_height: f64) -> bool {
        self.viewport_height = viewport_height;
        let mut changed = false;
        for b in self.bindings.iter_mut() {
            changed |= b.measure(viewport_height);
        }
        changed
    }

    /// Advance every binding; true if another frame is needed.
    pub fn frame(&mut self, scroll_y: f64) -> bool {
        let mut moving = false;
        for b in self.bindings.iter_mut() {
            moving |= b.step(scroll_y);
        }
        moving
    }
}
