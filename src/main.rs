//! Isolator monitor firmware entry point.
//!
//! One fixed-cadence control loop: sample the joystick ADC channels,
//! drain the queued input edges through the debouncer into the mode
//! state machine, poll the long-press trackers, evaluate the feedback
//! mapping, write the actuators, and render the active screen. Input
//! edges are produced asynchronously by the per-pin tasks in
//! `ui::buttons`.

#![no_std]
#![no_main]

mod actuators;
mod analog;
mod config;
mod debounce;
mod error;
mod feedback;
mod longpress;
mod state;
mod ui;

use core::sync::atomic::Ordering;

use actuators::Actuators;
use analog::{AnalogView, JoystickSample};
use debounce::Debouncer;
use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Pin, Pull};
use embassy_rp::i2c;
use embassy_rp::pwm::Pwm;
use embassy_time::{Duration, Instant, Timer};
use error::Error;
use longpress::LongPress;
use state::{InputSource, Mode, MonitorState};
use ui::buttons::{self, BUTTON_A_HELD, BUTTON_B_HELD, JOYSTICK_HELD};
use ui::display;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
});

/// Read one axis, falling back to a fixed value on a conversion error.
async fn read_axis(
    adc: &mut Adc<'static, adc::Async>,
    channel: &mut adc::Channel<'static>,
    fallback: u16,
) -> u16 {
    match adc.read(channel).await {
        Ok(raw) => raw,
        Err(_) => {
            warn!("adc read failed: {}", Error::Adc);
            fallback
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("isomon starting");

    // Joystick analog axes.
    let mut adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let mut vertical_ch = adc::Channel::new_pin(p.PIN_26, Pull::None);
    let mut horizontal_ch = adc::Channel::new_pin(p.PIN_27, Pull::None);

    // Input tasks feed the raw-edge queue.
    let tx = buttons::INPUT_EVENTS.sender();
    unwrap!(spawner.spawn(buttons::input_task(
        p.PIN_5.degrade(),
        InputSource::ButtonA,
        &BUTTON_A_HELD,
        tx,
    )));
    unwrap!(spawner.spawn(buttons::input_task(
        p.PIN_6.degrade(),
        InputSource::ButtonB,
        &BUTTON_B_HELD,
        tx,
    )));
    unwrap!(spawner.spawn(buttons::input_task(
        p.PIN_22.degrade(),
        InputSource::JoystickPress,
        &JOYSTICK_HELD,
        tx,
    )));

    // PWM actuators: buzzer + green on one slice, blue + red on another.
    let buzzer_green = Pwm::new_output_ab(
        p.PWM_SLICE5,
        p.PIN_10,
        p.PIN_11,
        actuators::buzzer_slice_config(),
    );
    let blue_red = Pwm::new_output_ab(
        p.PWM_SLICE6,
        p.PIN_12,
        p.PIN_13,
        actuators::led_slice_config(),
    );
    let mut actuators = Actuators::new(buzzer_green, blue_red);

    // SSD1306 over I2C1 at 400 kHz.
    let mut i2c_cfg = i2c::Config::default();
    i2c_cfg.frequency = 400_000;
    let i2c_bus = i2c::I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_cfg);
    let mut oled = display::init(i2c_bus);

    let mut state = MonitorState::new();
    let mut debouncer = Debouncer::new(config::DEBOUNCE_WINDOW_MS);
    let mut long_a = LongPress::new(config::LONG_PRESS_MS);
    let mut long_b = LongPress::new(config::LONG_PRESS_MS);
    let mut last_diag_ms: u64 = 0;

    loop {
        let sample = JoystickSample {
            vertical: read_axis(&mut adc, &mut vertical_ch, analog::CENTER).await,
            horizontal: read_axis(&mut adc, &mut horizontal_ch, 0).await,
        };

        // Drain queued edges through the debouncer into the mode machine.
        while let Ok(edge) = buttons::INPUT_EVENTS.try_receive() {
            if debouncer.filter(edge.source, edge.at_ms) {
                state.apply_press(edge.source);
                info!("Press: {} -> {}", edge.source, state.mode);
            }
        }

        // A long hold on either button forces a return to the menu.
        let now_ms = Instant::now().as_millis();
        let a_held = BUTTON_A_HELD.load(Ordering::Relaxed);
        if long_a.poll(a_held, now_ms, state.mode != Mode::Menu) {
            state.force_menu(InputSource::ButtonA);
            info!("Button A held - back to menu");
        }
        let b_held = BUTTON_B_HELD.load(Ordering::Relaxed);
        if long_b.poll(b_held, now_ms, state.mode != Mode::Menu) {
            state.force_menu(InputSource::ButtonB);
            info!("Button B held - back to menu");
        }

        let view = AnalogView::from_sample(sample);
        let outputs = feedback::evaluate(&mut state, &view);
        actuators.apply(&outputs);

        let frame = match state.mode {
            Mode::Menu => display::draw_menu(&mut oled),
            Mode::Test => display::draw_test(&mut oled, &state, &view),
            Mode::VoltageData => display::draw_voltage(&mut oled, &state, &view),
            Mode::FaultData => display::draw_faults(&mut oled, state.faults),
        };
        if let Err(e) = frame {
            warn!("frame dropped: {}", e);
        }

        if now_ms - last_diag_ms >= config::DIAG_INTERVAL_MS {
            info!(
                "VRY: {} VRX: {} mode: {} faults: {}",
                sample.vertical, sample.horizontal, state.mode, state.faults
            );
            last_diag_ms = now_ms;
        }

        Timer::after(Duration::from_millis(config::LOOP_PERIOD_MS)).await;
    }
}
