// Asset preloading bookkeeping, independent of the browser.

#[cfg_attr(not(test), allow(dead_code))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloadStrategy {
    /// Block the reveal until every asset has settled.
    All,
    /// Block on the critical assets only; fetch the rest in the background.
    CriticalFirst,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetOutcome {
    Loaded,
    Failed,
}

/// Split of the asset list into the set gating the reveal and the set
/// fetched afterwards. Every asset lands in exactly one of the two.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreloadPlan {
    pub gating: Vec<&'static str>,
    pub deferred: Vec<&'static str>,
}

impl PreloadPlan {
    pub fn new(
        assets: &[&'static str],
        critical: &[&'static str],
        strategy: PreloadStrategy,
    ) -> Self {
        let mut plan = PreloadPlan::default();
        for &asset in assets {
            let gates = match strategy {
                PreloadStrategy::All => true,
                PreloadStrategy::CriticalFirst => critical.contains(&asset),
            };
            if gates {
                plan.gating.push(asset);
            } else {
                plan.deferred.push(asset);
            }
        }
        plan
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.gating.len() + self.deferred.len()
    }
}

/// Settled-asset counter. Loads and failures both count as settled.
#[derive(Clone, Debug, Default)]
pub struct PreloadProgress {
    total: usize,
    loaded: usize,
    failed: usize,
}

impl PreloadProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Count one settled asset. Returns true on the call that settles the
    /// last asset; settlements beyond `total` are ignored.
    pub fn record(&mut self, outcome: AssetOutcome) -> bool {
        if self.is_complete() {
            return false;
        }
        match outcome {
            AssetOutcome::Loaded => self.loaded += 1,
            AssetOutcome::Failed => self.failed += 1,
        }
        self.is_complete()
    }

    #[inline]
    pub fn settled(&self) -> usize {
        self.loaded + self.failed
    }

    #[inline]
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    #[inline]
    pub fn failed(&self) -> usize {
        self.failed
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.settled() >= self.total
    }

    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.settled() as f64 / self.total as f64) * 100.0
    }
}

/// Result of probing the first stylesheet of the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetProbe {
    /// The document has no stylesheet at all.
    Absent,
    /// A sheet exists but its rules are not reachable yet.
    Pending,
    Readable,
    /// Rule access threw; the sheet is served from another origin.
    CrossOrigin,
}

impl SheetProbe {
    #[inline]
    pub fn is_settled(self) -> bool {
        !matches!(self, SheetProbe::Pending)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StylesheetWait {
    Settled(SheetProbe),
    TimedOut,
}

/// Number of probes made before giving up on the stylesheet.
#[inline]
pub fn stylesheet_poll_attempts(interval_ms: i32, timeout_ms: i32) -> u32 {
    if interval_ms <= 0 {
        return 1;
    }
    (timeout_ms.max(0) / interval_ms).max(1) as u32
}
