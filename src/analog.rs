//! Analog sample mapping.
//!
//! Converts raw 12-bit joystick readings into the domain quantities the
//! feedback and display logic consume. All functions are pure and
//! recomputed once per control-loop iteration.

use crate::config::{BAR_FULL_WIDTH, VOLTAGE_FULL_SCALE};

/// Maximum raw ADC reading (12-bit).
pub const ADC_MAX: u16 = 4095;

/// Nominal joystick center position on the vertical axis.
pub const CENTER: u16 = 2048;

/// Vertical joystick direction relative to center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
    Neutral,
}

/// One raw sample pair, read at the top of each loop iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickSample {
    /// Vertical axis, 0..=4095, center 2048.
    pub vertical: u16,
    /// Horizontal axis, 0..=4095.
    pub horizontal: u16,
}

/// Absolute displacement of the vertical axis from center.
pub fn displacement(vertical: u16) -> u16 {
    if vertical > CENTER {
        vertical - CENTER
    } else {
        CENTER - vertical
    }
}

/// Displacement as a truncated percentage of the half-range (0..=100).
pub fn percent(vertical: u16) -> u16 {
    (displacement(vertical) as u32 * 100 / CENTER as u32) as u16
}

/// Displacement scaled to a display bar width in pixels.
pub fn test_bar_width(vertical: u16) -> u16 {
    (displacement(vertical) as u32 * BAR_FULL_WIDTH as u32 / CENTER as u32) as u16
}

pub fn direction(vertical: u16) -> Direction {
    if vertical < CENTER {
        Direction::Up
    } else if vertical > CENTER {
        Direction::Down
    } else {
        Direction::Neutral
    }
}

/// Horizontal axis mapped to a simulated line voltage in volts
/// (0..=36000, truncated).
pub fn voltage(horizontal: u16) -> u32 {
    horizontal as u32 * VOLTAGE_FULL_SCALE / ADC_MAX as u32
}

/// Horizontal axis scaled to a display bar width in pixels.
pub fn voltage_bar_width(horizontal: u16) -> u16 {
    (horizontal as u32 * BAR_FULL_WIDTH as u32 / ADC_MAX as u32) as u16
}

/// All derived quantities for one sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogView {
    pub sample: JoystickSample,
    pub direction: Direction,
    pub percent: u16,
    pub test_bar_width: u16,
    pub voltage: u32,
    pub voltage_bar_width: u16,
}

impl AnalogView {
    pub fn from_sample(sample: JoystickSample) -> Self {
        Self {
            sample,
            direction: direction(sample.vertical),
            percent: percent(sample.vertical),
            test_bar_width: test_bar_width(sample.vertical),
            voltage: voltage(sample.horizontal),
            voltage_bar_width: voltage_bar_width(sample.horizontal),
        }
    }
}
