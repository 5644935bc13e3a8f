//! Press-event debouncer.
//!
//! Raw GPIO edges arrive through the input queue; a logical press is
//! emitted only if more than the configured window has passed since the
//! last accepted event on the same source. Each source is tracked
//! independently, so a Button A press never masks a Button B press.

use crate::state::InputSource;

/// Per-source timestamp filter.
pub struct Debouncer {
    window_ms: u64,
    last_accept_ms: [Option<u64>; 3],
}

impl Debouncer {
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_accept_ms: [None; 3],
        }
    }

    /// Returns true if the edge should become a logical press event,
    /// recording its timestamp. The first edge on a source always
    /// passes.
    pub fn filter(&mut self, source: InputSource, now_ms: u64) -> bool {
        let slot = &mut self.last_accept_ms[Self::index(source)];
        match *slot {
            Some(last) if now_ms.saturating_sub(last) <= self.window_ms => false,
            _ => {
                *slot = Some(now_ms);
                true
            }
        }
    }

    fn index(source: InputSource) -> usize {
        match source {
            InputSource::ButtonA => 0,
            InputSource::ButtonB => 1,
            InputSource::JoystickPress => 2,
        }
    }
}
