//! GPIO input edge detection.
//!
//! Three physical inputs (active-low with internal pull-up):
//!   - Button A  - enter Test mode / toggle run-pause
//!   - Button B  - enter Data modes / cycle data screens
//!   - Joystick  - toggle display sub-modes
//!
//! Each input is handled by an async task that waits for a GPIO edge,
//! re-checks the level after a short settle delay, and queues a
//! [`RawEdge`] for the control loop. The task also mirrors the held
//! level into an `AtomicBool` the control loop samples for long-press
//! detection; the flag is a single word, so no locking is needed
//! against the loop.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::config::BUTTON_SETTLE_MS;
use crate::state::InputSource;
use crate::ui::RawEdge;
use defmt::info;
use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Sender};
use embassy_time::{Duration, Instant, Timer};

/// Queue of raw input edges, drained by the control loop each
/// iteration. Stands in for the original GPIO interrupt handler.
pub static INPUT_EVENTS: Channel<CriticalSectionRawMutex, RawEdge, 8> = Channel::new();

/// Raw held levels, written only by the input tasks.
pub static BUTTON_A_HELD: AtomicBool = AtomicBool::new(false);
pub static BUTTON_B_HELD: AtomicBool = AtomicBool::new(false);
pub static JOYSTICK_HELD: AtomicBool = AtomicBool::new(false);

/// Run a single input polling loop.
///
/// Waits for the pin to go low (pressed), settles, queues the edge,
/// then waits for release before repeating.
#[embassy_executor::task(pool_size = 3)]
pub async fn input_task(
    pin: AnyPin,
    source: InputSource,
    held: &'static AtomicBool,
    tx: Sender<'static, CriticalSectionRawMutex, RawEdge, 8>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (press, active-low).
        btn.wait_for_falling_edge().await;

        // Settle and re-check; logical debouncing is the control
        // loop's job.
        Timer::after(Duration::from_millis(BUTTON_SETTLE_MS)).await;

        if btn.is_low() {
            held.store(true, Ordering::Relaxed);
            info!("Input edge: {}", source);
            tx.send(RawEdge {
                source,
                at_ms: Instant::now().as_millis(),
            })
            .await;

            btn.wait_for_rising_edge().await;
            held.store(false, Ordering::Relaxed);
            Timer::after(Duration::from_millis(BUTTON_SETTLE_MS)).await;
        }
    }
}
