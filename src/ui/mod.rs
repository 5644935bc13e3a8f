//! User interface subsystem - OLED display + physical inputs.
//!
//! Button/joystick edges are produced by per-pin async tasks and
//! queued for the control loop, which owns debouncing, the mode state
//! machine, and rendering of the current screen on the SSD1306 OLED.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Inputs**: buttons A/B and the joystick push-button (active-low)

pub mod buttons;
pub mod display;

use crate::state::InputSource;

/// A raw falling edge on one input source, timestamped at delivery.
///
/// Debouncing happens in the control loop, so the queue carries every
/// edge that survives the electrical settle check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawEdge {
    pub source: InputSource,
    pub at_ms: u64,
}
