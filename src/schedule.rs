// Frame coalescing and resize debouncing. Timers live in the browser glue.

/// At most one animation frame in flight.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns true if the caller should request a frame now.
    #[inline]
    pub fn try_begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called at the start of the frame callback (or when the request failed).
    #[inline]
    pub fn finish(&mut self) {
        self.pending = false;
    }

    #[cfg_attr(not(test), allow(dead_code))]
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Trailing-edge debounce: every trigger supersedes the previous one and only
/// the timer carrying the newest ticket settles.
#[derive(Debug, Default)]
pub struct Debounce {
    generation: u64,
    settled: u64,
}

impl Debounce {
    pub fn trigger(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        Ticket(self.generation)
    }

    /// Called when the delay for `ticket` elapsed.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation || self.settled == self.generation {
            return false;
        }
        self.settled = self.generation;
        true
    }
}
