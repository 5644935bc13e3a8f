//! SSD1306 OLED display wrapper.
//!
//! One draw function per screen; each renders a full frame
//! (clear buffer → draw → flush).

use core::fmt::Write as _;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::analog::AnalogView;
use crate::error::Error;
use crate::feedback::{test_status_label, voltage_status_label};
use crate::state::MonitorState;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn text_style() -> embedded_graphics::mono_font::MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn bar(width: u16, y: i32) -> Rectangle {
    Rectangle::new(Point::new(0, y), Size::new(width as u32, 8))
}

fn flush<I2C>(display: &mut Display<I2C>) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.flush().map_err(|_| Error::Display)
}

/// Render the start menu.
pub fn draw_menu<I2C>(display: &mut Display<I2C>) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let _ = Text::new(" APERTE O BOTAO", Point::new(0, 20), text_style()).draw(display);
    let _ = Text::new("   A  TESTE", Point::new(0, 40), text_style()).draw(display);
    let _ = Text::new("   B  DADOS", Point::new(0, 50), text_style()).draw(display);

    flush(display)
}

/// Render the Test screen.
///
/// Paused shows only the pause marker; otherwise the status message is
/// drawn, optionally with the displacement bar and percentage.
pub fn draw_test<I2C>(
    display: &mut Display<I2C>,
    state: &MonitorState,
    view: &AnalogView,
) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    if !state.monitoring_active {
        let _ = Text::new("    PAUSADO", Point::new(0, 40), text_style()).draw(display);
        return flush(display);
    }

    let status = test_status_label(view.direction, view.percent);
    if state.message_only {
        let _ = Text::new(status, Point::new(0, 24), text_style()).draw(display);
    } else {
        let _ = bar(view.test_bar_width, 20)
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(display);

        let mut line: heapless::String<16> = heapless::String::new();
        let _ = write!(line, "{}%", view.percent);
        let _ = Text::new(line.as_str(), Point::new(0, 30), text_style()).draw(display);

        let _ = Text::new(status, Point::new(0, 40), text_style()).draw(display);
    }

    flush(display)
}

/// Render the voltage data screen.
pub fn draw_voltage<I2C>(
    display: &mut Display<I2C>,
    state: &MonitorState,
    view: &AnalogView,
) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let mut line: heapless::String<20> = heapless::String::new();
    let _ = write!(line, "TENSAO: {}V", view.voltage);
    let _ = Text::new(line.as_str(), Point::new(0, 20), text_style()).draw(display);

    let _ = Text::new(
        voltage_status_label(view.voltage),
        Point::new(0, 40),
        text_style(),
    )
    .draw(display);

    if state.bar_visible {
        let _ = bar(view.voltage_bar_width, 30)
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(display);
    }

    flush(display)
}

/// Render the fault counter screen.
pub fn draw_faults<I2C>(display: &mut Display<I2C>, faults: u32) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let mut line: heapless::String<20> = heapless::String::new();
    let _ = write!(line, "FALHAS: {}", faults);
    let _ = Text::new(line.as_str(), Point::new(0, 30), text_style()).draw(display);

    flush(display)
}
