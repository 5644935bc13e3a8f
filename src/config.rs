//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and monitoring
//! thresholds live here so they can be tuned in one place.

// Input timing

/// Minimum interval between accepted press events per source (ms).
pub const DEBOUNCE_WINDOW_MS: u64 = 200;

/// Continuous hold duration that forces a return to the menu (ms).
pub const LONG_PRESS_MS: u64 = 3000;

/// Settle delay after a raw GPIO edge before the level is re-checked (ms).
pub const BUTTON_SETTLE_MS: u64 = 5;

// Monitoring thresholds

/// Joystick displacement (percent of half-range) above which the
/// isolator state is considered critical in Test mode.
pub const TEST_FAULT_PERCENT: u16 = 80;

/// Full-scale simulated line voltage (V) at maximum ADC reading.
pub const VOLTAGE_FULL_SCALE: u32 = 36_000;

/// Voltage (V) above which the isolator is considered unable to hold.
/// 90% of full scale.
pub const VOLTAGE_FAULT_LIMIT: u32 = 32_400;

// Display

/// Width of a full-scale horizontal bar (pixels, display width).
pub const BAR_FULL_WIDTH: u16 = 128;

// Actuators

/// PWM wrap value for the LED slice.
pub const LED_PWM_TOP: u16 = 4096;

/// LED intensity when on (full duty against `LED_PWM_TOP`).
pub const LED_LEVEL_ON: u16 = 4096;

/// PWM wrap for the buzzer slice: 125 MHz / 31250 = 4 kHz carrier.
pub const BUZZER_PWM_TOP: u16 = 31_250;

/// Buzzer compare level when sounding (50% duty).
pub const BUZZER_DUTY_ON: u16 = 15_625;

// Control loop

/// Main loop cadence (ms).
pub const LOOP_PERIOD_MS: u64 = 100;

/// Minimum interval between diagnostic log lines (ms).
pub const DIAG_INTERVAL_MS: u64 = 1000;

// GPIO pin assignments (BitDogLab / Pico defaults)
//
// These are logical names; actual `embassy_rp::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Joystick vertical (ADC0)   → GPIO 26
//   Joystick horizontal (ADC1) → GPIO 27
//   Joystick push-button       → GPIO 22
//   Button A                   → GPIO 5
//   Button B                   → GPIO 6
//   Buzzer (PWM 5A)            → GPIO 10
//   LED green (PWM 5B)         → GPIO 11
//   LED blue (PWM 6A)          → GPIO 12
//   LED red (PWM 6B)           → GPIO 13
//   I²C SDA                    → GPIO 14
//   I²C SCL                    → GPIO 15
