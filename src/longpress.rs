//! Long-press detection for the force-menu gesture.
//!
//! Sampled every control-loop iteration from the raw button level, not
//! from edges. Holding a button for the configured duration while a
//! non-menu mode is active emits exactly one event per continuous hold;
//! an explicit armed latch (cleared only on release) prevents re-firing
//! while the button stays down.

/// Tracks one button's continuous-hold duration.
pub struct LongPress {
    threshold_ms: u64,
    press_start_ms: u64,
    held: bool,
    armed: bool,
}

impl LongPress {
    pub const fn new(threshold_ms: u64) -> Self {
        Self {
            threshold_ms,
            press_start_ms: 0,
            held: false,
            armed: true,
        }
    }

    /// Sample the raw button level.
    ///
    /// `eligible` is the caller's mode condition (false while in the
    /// menu). Returns true exactly once per hold when the level has
    /// been continuously active for the threshold and the hold is
    /// eligible at that moment.
    pub fn poll(&mut self, level_active: bool, now_ms: u64, eligible: bool) -> bool {
        if !level_active {
            self.held = false;
            self.armed = true;
            return false;
        }

        if !self.held {
            self.held = true;
            self.press_start_ms = now_ms;
            return false;
        }

        if self.armed && eligible && now_ms.saturating_sub(self.press_start_ms) >= self.threshold_ms
        {
            self.armed = false;
            return true;
        }

        false
    }
}
