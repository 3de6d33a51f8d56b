// Page tuning constants: asset lists, loader timings, parallax bindings and
// noise parameters. There is no runtime configuration surface.

// Assets preloaded before the page is revealed
pub const ASSETS: &[&str] = &[
    // Images
    "image/labubuBorder.png",
    "image/dubaiBorder.png",
    "image/labubuBorder2.png",
    "image/labubuBorder3.png",
    "image/laurine1.png",
    "image/laurine2.png",
    "image/laurine3.png",
    // GIFs
    "giff/giff1.gif",
    "giff/giff2.gif",
    "giff/giff3.gif",
    "giff/giff_star.gif",
    "giff/fond.gif",
];

// Assets visible above the fold; the reveal waits on these only
pub const CRITICAL_ASSETS: &[&str] = &["giff/fond.gif", "image/labubuBorder.png"];

// Loader timings (milliseconds)
pub const REVEAL_DELAY_MS: i32 = 300; // settle time between asset gate and reveal
pub const OVERLAY_REMOVE_DELAY_MS: i32 = 500; // matches the CSS fade-out
pub const STYLESHEET_POLL_INTERVAL_MS: i32 = 10;
pub const STYLESHEET_POLL_TIMEOUT_MS: i32 = 3_000;

// DOM hooks
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const MAIN_CONTENT_ID: &str = "main-content";
pub const LOADING_PROGRESS_ID: &str = "loading-progress";
pub const NOISE_CANVAS_ID: &str = "noise-canvas";
pub const HIDDEN_CLASS: &str = "hidden";
pub const LOADED_CLASS: &str = "loaded";

// Parallax
pub const SETTLE_EPSILON_PX: f64 = 0.01; // below this distance a binding snaps to target
pub const MIN_SMOOTHING_SPEED: f64 = 0.001;
pub const RESIZE_DEBOUNCE_MS: i32 = 150;
pub const PARALLAX_SLOTS: usize = 5;

/// Static description of one scroll-linked element group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxSpec {
    /// Selector of the moving element(s).
    pub target: &'static str,
    /// Selector of the section whose geometry defines the scroll range.
    pub section: &'static str,
    pub max_movement: f64,
    pub speed: f64,
    /// Start the range one viewport height before the section top.
    pub lead_viewport: bool,
    /// Move every element matching `target`, not only the first.
    pub all_matches: bool,
}

pub const PARALLAX_SPECS: [ParallaxSpec; PARALLAX_SLOTS] = [
    ParallaxSpec {
        target: ".labubu-border",
        section: ".hero",
        max_movement: 20.0,
        speed: 0.12,
        lead_viewport: false,
        all_matches: false,
    },
    ParallaxSpec {
        target: ".dubai-border",
        section: ".text-block",
        max_movement: 40.0,
        speed: 0.10,
        lead_viewport: false,
        all_matches: false,
    },
    ParallaxSpec {
        target: ".labubu-border-2",
        section: ".text-block_2",
        max_movement: 70.0,
        speed: 0.08,
        lead_viewport: true,
        all_matches: false,
    },
    ParallaxSpec {
        target: ".labubu-border-3",
        section: ".text-block_2",
        max_movement: 40.0,
        speed: 0.10,
        lead_viewport: false,
        all_matches: false,
    },
    ParallaxSpec {
        target: ".gif-front",
        section: ".moving-text-section",
        max_movement: 60.0,
        speed: 0.10,
        lead_viewport: false,
        all_matches: true,
    },
];

// Noise overlay
pub const NOISE_BASE_RGB: [f32; 3] = [255.0, 240.0, 240.0]; // near-white, warm tint
pub const NOISE_AMPLITUDE: f32 = 10.0; // per-pixel offset in [-A, A)
pub const NOISE_ALPHA: u8 = 30;
