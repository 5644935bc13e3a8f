//! Feedback controller.
//!
//! Maps the current mode and the mapped analog values to LED / buzzer
//! outputs, drives the edge-triggered fault counting, and picks the
//! status text the display shows. Pure apart from the state mutation
//! through the fault latches.

use crate::analog::{AnalogView, Direction};
use crate::config::{LED_LEVEL_ON, TEST_FAULT_PERCENT, VOLTAGE_FAULT_LIMIT};
use crate::state::{Mode, MonitorState};

/// Actuator output levels for one iteration.
///
/// LED intensities are PWM duty levels (0 or full); the buzzer is a
/// fixed-carrier on/off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Outputs {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
    pub buzzer_on: bool,
}

impl Outputs {
    pub const fn off() -> Self {
        Self {
            red: 0,
            green: 0,
            blue: 0,
            buzzer_on: false,
        }
    }
}

/// Evaluate one iteration of the sensor-to-actuator mapping.
///
/// Also feeds the fault latches: the Test-mode condition is
/// joystick fully up past the critical percentage, the VoltageData
/// condition is an over-limit voltage. Each sustained condition is
/// counted once per false→true edge.
pub fn evaluate(state: &mut MonitorState, view: &AnalogView) -> Outputs {
    match state.mode {
        Mode::Menu | Mode::FaultData => Outputs::off(),
        Mode::Test => {
            if !state.monitoring_active {
                return Outputs::off();
            }

            let mut out = Outputs::off();
            match view.direction {
                Direction::Up => out.red = LED_LEVEL_ON,
                Direction::Down => out.green = LED_LEVEL_ON,
                Direction::Neutral => {}
            }

            let fault = view.direction == Direction::Up && view.percent > TEST_FAULT_PERCENT;
            out.buzzer_on = fault;
            state.update_test_fault(fault);
            out
        }
        Mode::VoltageData => {
            let mut out = Outputs::off();
            let fault = view.voltage > VOLTAGE_FAULT_LIMIT;
            if fault {
                out.red = LED_LEVEL_ON;
                out.buzzer_on = true;
            } else {
                out.green = LED_LEVEL_ON;
            }
            state.update_voltage_fault(fault);
            out
        }
    }
}

/// Status line shown in Test mode for the current joystick position.
pub fn test_status_label(direction: Direction, percent: u16) -> &'static str {
    match direction {
        Direction::Down => "ISOLADOR OK!",
        Direction::Up if percent <= TEST_FAULT_PERCENT => "ISOLADOR RUIM",
        Direction::Up => "ESTADO CRITICO",
        Direction::Neutral => "NEUTRO",
    }
}

/// Verdict line shown in VoltageData mode.
pub fn voltage_status_label(voltage: u32) -> &'static str {
    if voltage > VOLTAGE_FAULT_LIMIT {
        "NAO SUPORTA"
    } else {
        "SUPORTA"
    }
}
