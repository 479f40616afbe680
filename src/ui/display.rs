//! SSD1306 OLED display wrapper.

use defmt::warn;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use reflex_knob::config::{LINE_FIRST_BASELINE, LINE_STEP};
use reflex_knob::ports::DisplayPort;
use reflex_knob::screens::Screen;
use reflex_knob::Error;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// The OLED as a game text sink.
pub struct Oled<I2C> {
    display: Display<I2C>,
}

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Result<Oled<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(Oled { display })
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

impl<I2C> DisplayPort for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn show(&mut self, screen: &Screen) {
        self.display.clear_buffer();

        for (row, line) in screen.lines().iter().enumerate() {
            let y = LINE_FIRST_BASELINE + row as i32 * LINE_STEP;
            let _ = Text::new(line.as_str(), Point::new(0, y), text_style()).draw(&mut self.display);
        }

        if self.display.flush().is_err() {
            warn!("Display: flush failed, {}", Error::Display);
        }
    }
}
