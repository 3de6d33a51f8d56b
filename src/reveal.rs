// Loading overlay -> main content transition.

/// Whatever can be revealed: the real document in the browser, a recorder in tests.
pub trait RevealSurface {
    fn hide_overlay(&self);
    fn mark_content_loaded(&self);
    fn remove_overlay(&self);
}

/// Applies the reveal exactly once, whichever path (normal or fail-open) gets there first.
#[derive(Debug, Default)]
pub struct Revealer {
    revealed: bool,
}

impl Revealer {
    /// Hide the overlay and mark the content loaded, together.
    /// Returns false if the page was already revealed.
    pub fn reveal<S: RevealSurface + ?Sized>(&mut self, surface: &S) -> bool {
        if self.revealed {
            return false;
        }
        surface.hide_overlay();
        surface.mark_content_loaded();
        self.revealed = true;
        true
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Close out the load sequence. An error still reveals the page unless the
/// normal path already did; returns true if this call forced the reveal.
pub fn finish_load<E, S>(result: Result<(), E>, revealer: &mut Revealer, surface: &S) -> bool
where
    E: std::fmt::Debug,
    S: RevealSurface + ?Sized,
{
    let Err(e) = result else {
        return false;
    };
    log::error!("[preload] error loading assets: {:?}", e);
    if revealer.is_revealed() {
        return false;
    }
    revealer.reveal(surface)
}
