//! Mode state machine for the isolator monitor.
//!
//! Four operating modes selected with buttons A/B and the joystick
//! push-button.  All mutable monitoring state (mode, display flags,
//! fault counter and latches) is grouped in [`MonitorState`] so the
//! control loop and the input queue share one context object instead
//! of scattered globals.

/// Operating mode. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Start screen; buttons pick a mode.
    Menu,
    /// Joystick displacement test with LED/buzzer feedback.
    Test,
    /// Simulated line voltage readout.
    VoltageData,
    /// Fault counter readout.
    FaultData,
}

/// Logical input sources (all active-low momentary switches).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputSource {
    ButtonA,
    ButtonB,
    JoystickPress,
}

/// Shared monitoring state.
///
/// Write ownership: `apply_press` / `force_menu` mutate the mode and
/// display flags from debounced input events; the fault counter and
/// latches are mutated only through `update_test_fault` /
/// `update_voltage_fault` from the feedback evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonitorState {
    /// Current operating mode.
    pub mode: Mode,
    /// Test mode run/pause flag; paused turns all actuators off.
    pub monitoring_active: bool,
    /// Test display sub-mode: status message only vs bar + percentage.
    pub message_only: bool,
    /// Whether the voltage bar is rendered in VoltageData mode.
    pub bar_visible: bool,
    /// Total fault edges observed. Never reset during operation.
    pub faults: u32,
    fault_latched_test: bool,
    fault_latched_voltage: bool,
}

impl MonitorState {
    pub const fn new() -> Self {
        Self {
            mode: Mode::Menu,
            monitoring_active: true,
            message_only: false,
            bar_visible: false,
            faults: 0,
            fault_latched_test: false,
            fault_latched_voltage: false,
        }
    }

    /// Apply one debounced press event.
    ///
    /// Implements the mode transition table; (mode, source) pairs not
    /// listed leave the state untouched.
    pub fn apply_press(&mut self, source: InputSource) {
        match (self.mode, source) {
            (Mode::Menu, InputSource::ButtonA) => self.mode = Mode::Test,
            (Mode::Menu, InputSource::ButtonB) => self.mode = Mode::VoltageData,
            (Mode::Test, InputSource::ButtonA) => {
                self.monitoring_active = !self.monitoring_active;
            }
            (Mode::Test, InputSource::JoystickPress) => {
                self.message_only = !self.message_only;
            }
            (Mode::VoltageData, InputSource::ButtonB) => {
                self.mode = Mode::FaultData;
                // Bar visibility does not carry over to the fault screen.
                self.bar_visible = false;
            }
            (Mode::VoltageData, InputSource::JoystickPress) => {
                self.bar_visible = !self.bar_visible;
            }
            (Mode::FaultData, InputSource::ButtonB) => self.mode = Mode::VoltageData,
            _ => {}
        }
    }

    /// Apply a force-menu event from a long press.
    ///
    /// Button A restores the Test-mode defaults as well; Button B only
    /// changes the mode. No effect while already in the menu. The fault
    /// counter is deliberately left alone.
    pub fn force_menu(&mut self, source: InputSource) {
        if self.mode == Mode::Menu {
            return;
        }
        self.mode = Mode::Menu;
        if source == InputSource::ButtonA {
            self.monitoring_active = true;
            self.message_only = false;
        }
    }

    /// Feed the Test-mode fault condition for this iteration.
    ///
    /// The counter increments only on a false→true transition of the
    /// condition; sustained faults are counted once.
    pub fn update_test_fault(&mut self, active: bool) {
        if active && !self.fault_latched_test {
            self.faults += 1;
        }
        self.fault_latched_test = active;
    }

    /// Feed the VoltageData-mode fault condition for this iteration.
    pub fn update_voltage_fault(&mut self, active: bool) {
        if active && !self.fault_latched_voltage {
            self.faults += 1;
        }
        self.fault_latched_voltage = active;
    }
}

impl Default for MonitorState {
    fn default() -> Self {
        Self::new()
    }
}
