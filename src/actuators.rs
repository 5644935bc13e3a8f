//! PWM actuators: tri-color LED and buzzer.
//!
//! The board wires the buzzer (GPIO 10) and the green LED (GPIO 11)
//! to the A/B channels of one PWM slice, and the blue/red LEDs
//! (GPIO 12/13) to another. The buzzer slice runs the 4 kHz carrier
//! wrap, so the green LED level is rescaled onto that slice's top.

use crate::config::{BUZZER_DUTY_ON, BUZZER_PWM_TOP, LED_PWM_TOP};
use crate::feedback::Outputs;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};

/// Owns the two PWM slices driving all four outputs.
pub struct Actuators {
    /// Buzzer (channel A) + green LED (channel B), top = 4 kHz wrap.
    buzzer_green: Pwm<'static>,
    buzzer_green_cfg: PwmConfig,
    /// Blue LED (channel A) + red LED (channel B), top = LED wrap.
    blue_red: Pwm<'static>,
    blue_red_cfg: PwmConfig,
}

/// PWM config for the buzzer/green slice (4 kHz carrier, all off).
pub fn buzzer_slice_config() -> PwmConfig {
    let mut cfg = PwmConfig::default();
    cfg.top = BUZZER_PWM_TOP;
    cfg.compare_a = 0;
    cfg.compare_b = 0;
    cfg
}

/// PWM config for the blue/red LED slice (all off).
pub fn led_slice_config() -> PwmConfig {
    let mut cfg = PwmConfig::default();
    cfg.top = LED_PWM_TOP;
    cfg.compare_a = 0;
    cfg.compare_b = 0;
    cfg
}

impl Actuators {
    /// Wrap two slices already configured with the matching configs.
    pub fn new(buzzer_green: Pwm<'static>, blue_red: Pwm<'static>) -> Self {
        Self {
            buzzer_green,
            buzzer_green_cfg: buzzer_slice_config(),
            blue_red,
            blue_red_cfg: led_slice_config(),
        }
    }

    /// Write one iteration's output levels to all four channels.
    pub fn apply(&mut self, out: &Outputs) {
        self.buzzer_green_cfg.compare_a = if out.buzzer_on { BUZZER_DUTY_ON } else { 0 };
        self.buzzer_green_cfg.compare_b = rescale(out.green, BUZZER_PWM_TOP);
        self.buzzer_green.set_config(&self.buzzer_green_cfg);

        self.blue_red_cfg.compare_a = rescale(out.blue, LED_PWM_TOP);
        self.blue_red_cfg.compare_b = rescale(out.red, LED_PWM_TOP);
        self.blue_red.set_config(&self.blue_red_cfg);
    }
}

/// Map a 0..=4096 intensity onto a slice's counter range.
fn rescale(level: u16, top: u16) -> u16 {
    (level as u32 * top as u32 / LED_PWM_TOP as u32) as u16
}
