//! Unified error type for isomon.
//!
//! The monitoring core itself has no failure modes (hardware reads and
//! writes are treated as total); only the peripheral glue can fail.
//! All variants carry fixed-size data and implement `defmt::Format`
//! for on-target logging.

use defmt::Format;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, Format)]
pub enum Error {
    /// I²C transaction to the OLED display failed.
    Display,
    /// ADC conversion failed.
    Adc,
}
