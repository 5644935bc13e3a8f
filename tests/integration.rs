//! Integration tests for isomon host-testable logic.
//!
//! Drives the full input → mode machine → feedback pipeline the way
//! the control loop does, without hardware.

use isomon::analog::{AnalogView, JoystickSample};
use isomon::debounce::Debouncer;
use isomon::feedback;
use isomon::longpress::LongPress;
use isomon::state::{InputSource, Mode, MonitorState};

fn view(vertical: u16, horizontal: u16) -> AnalogView {
    AnalogView::from_sample(JoystickSample {
        vertical,
        horizontal,
    })
}

/// One control-loop iteration worth of input handling.
fn press(state: &mut MonitorState, debouncer: &mut Debouncer, source: InputSource, at_ms: u64) {
    if debouncer.filter(source, at_ms) {
        state.apply_press(source);
    }
}

#[test]
fn bouncing_edge_produces_one_transition() {
    let mut state = MonitorState::new();
    let mut debouncer = Debouncer::new(200);

    // Menu → Test on the first edge; the bounce 30 ms later would
    // toggle run/pause if it got through.
    press(&mut state, &mut debouncer, InputSource::ButtonA, 1000);
    press(&mut state, &mut debouncer, InputSource::ButtonA, 1030);

    assert_eq!(state.mode, Mode::Test);
    assert!(state.monitoring_active);
}

#[test]
fn menu_to_fault_screen_walkthrough() {
    let mut state = MonitorState::new();
    let mut debouncer = Debouncer::new(200);

    press(&mut state, &mut debouncer, InputSource::ButtonB, 1000);
    assert_eq!(state.mode, Mode::VoltageData);

    press(&mut state, &mut debouncer, InputSource::JoystickPress, 1500);
    assert!(state.bar_visible);

    press(&mut state, &mut debouncer, InputSource::ButtonB, 2000);
    assert_eq!(state.mode, Mode::FaultData);
    assert!(!state.bar_visible);

    press(&mut state, &mut debouncer, InputSource::ButtonB, 2500);
    assert_eq!(state.mode, Mode::VoltageData);
}

#[test]
fn sustained_displacement_fault_counts_once_across_iterations() {
    let mut state = MonitorState::new();
    let mut debouncer = Debouncer::new(200);
    press(&mut state, &mut debouncer, InputSource::ButtonA, 0);
    assert_eq!(state.mode, Mode::Test);

    // Joystick held fully up for a dozen 100 ms iterations.
    for _ in 0..12 {
        let out = feedback::evaluate(&mut state, &view(0, 2000));
        assert!(out.buzzer_on);
        assert_eq!(out.red, 4096);
    }
    assert_eq!(state.faults, 1);

    // Back to center, then up again: a second edge.
    feedback::evaluate(&mut state, &view(2048, 2000));
    feedback::evaluate(&mut state, &view(0, 2000));
    assert_eq!(state.faults, 2);
}

#[test]
fn three_fault_edges_then_fault_screen_shows_three() {
    let mut state = MonitorState::new();
    let mut debouncer = Debouncer::new(200);
    press(&mut state, &mut debouncer, InputSource::ButtonB, 0);

    for _ in 0..3 {
        feedback::evaluate(&mut state, &view(2048, 4095));
        feedback::evaluate(&mut state, &view(2048, 0));
    }

    press(&mut state, &mut debouncer, InputSource::ButtonB, 1000);
    assert_eq!(state.mode, Mode::FaultData);
    assert_eq!(state.faults, 3);

    let mut line: heapless::String<20> = heapless::String::new();
    use core::fmt::Write as _;
    let _ = write!(line, "FALHAS: {}", state.faults);
    assert_eq!(line.as_str(), "FALHAS: 3");
}

#[test]
fn long_hold_forces_menu_and_resets_test_flags() {
    let mut state = MonitorState::new();
    let mut debouncer = Debouncer::new(200);
    let mut long_a = LongPress::new(3000);

    press(&mut state, &mut debouncer, InputSource::ButtonA, 0);
    press(&mut state, &mut debouncer, InputSource::ButtonA, 500); // pause
    press(&mut state, &mut debouncer, InputSource::JoystickPress, 800);
    assert!(!state.monitoring_active);
    assert!(state.message_only);

    // Hold Button A, sampled every 100 ms as the loop would.
    let mut fired = 0;
    let mut t = 1000;
    while t <= 5000 {
        if long_a.poll(true, t, state.mode != Mode::Menu) {
            state.force_menu(InputSource::ButtonA);
            fired += 1;
        }
        t += 100;
    }

    assert_eq!(fired, 1);
    assert_eq!(state.mode, Mode::Menu);
    assert!(state.monitoring_active);
    assert!(!state.message_only);
}

#[test]
fn over_voltage_scenario_full_pipeline() {
    let mut state = MonitorState::new();
    let mut debouncer = Debouncer::new(200);
    press(&mut state, &mut debouncer, InputSource::ButtonB, 0);

    let v = view(2048, 4095);
    assert_eq!(v.voltage, 36_000);

    let out = feedback::evaluate(&mut state, &v);
    assert_eq!(out.red, 4096);
    assert!(out.buzzer_on);
    assert_eq!(state.faults, 1);
    assert_eq!(feedback::voltage_status_label(v.voltage), "NAO SUPORTA");
}
