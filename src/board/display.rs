//! SSD1306 OLED wrapper.
//!
//! The UI writes into two RAM buffers, [`TextGrid`] and [`LedGrid`];
//! [`render`] redraws the panel from them once per poll tick when either
//! changed.
//!
//! Panel layout (128×64):
//! ```text
//! y  0..10   text row 0
//! y 12..22   text row 1
//! y 24..64   8×8 matrix, 5 px per cell, row 0 at the bottom
//! ```

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use quasi_snake::config::{LCD_COLS, LCD_ROWS, MATRIX_SIZE};
use quasi_snake::hal::{PixelMatrix, TextDisplay};
use quasi_snake::Error;
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

const ROW_HEIGHT: i32 = 12;
const CELL_PITCH: i32 = 5;
const CELL_SIZE: u32 = 4;
const MATRIX_ORIGIN: Point = Point::new(44, 24);

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

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// Character buffer standing in for a 16×2 character LCD.
pub struct TextGrid {
    cells: [[u8; LCD_COLS]; LCD_ROWS],
    col: usize,
    row: usize,
    dirty: bool,
}

impl TextGrid {
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; LCD_COLS]; LCD_ROWS],
            col: 0,
            row: 0,
            dirty: true,
        }
    }
}

impl TextDisplay for TextGrid {
    fn clear(&mut self) {
        self.cells = [[b' '; LCD_COLS]; LCD_ROWS];
        self.col = 0;
        self.row = 0;
        self.dirty = true;
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.col = col as usize;
        self.row = (row as usize).min(LCD_ROWS - 1);
    }

    fn print(&mut self, text: &str) {
        for b in text.bytes() {
            // Characters past the last column are dropped, like the LCD does.
            if self.col < LCD_COLS {
                self.cells[self.row][self.col] = if b.is_ascii() { b } else { b'?' };
                self.dirty = true;
            }
            self.col += 1;
        }
    }
}

/// Image of a single 8×8 LED matrix.
pub struct LedGrid {
    rows: [u8; MATRIX_SIZE as usize],
    intensity: u8,
    shutdown: bool,
    dirty: bool,
    settings_dirty: bool,
}

impl LedGrid {
    pub const fn new() -> Self {
        Self {
            rows: [0; MATRIX_SIZE as usize],
            intensity: 0,
            shutdown: true,
            dirty: true,
            settings_dirty: true,
        }
    }
}

impl PixelMatrix for LedGrid {
    fn set_pixel(&mut self, _idx: u8, row: u8, col: u8, on: bool) {
        if row >= MATRIX_SIZE || col >= MATRIX_SIZE {
            return;
        }
        let bit = 1u8 << col;
        let row = &mut self.rows[row as usize];
        if on {
            *row |= bit;
        } else {
            *row &= !bit;
        }
        self.dirty = true;
    }

    fn clear_all(&mut self, _idx: u8) {
        self.rows = [0; MATRIX_SIZE as usize];
        self.dirty = true;
    }

    fn set_intensity(&mut self, _idx: u8, level: u8) {
        // MAX7219-style 0..=15 scale.
        self.intensity = level.min(15);
        self.settings_dirty = true;
    }

    fn set_shutdown(&mut self, _idx: u8, shutdown: bool) {
        self.shutdown = shutdown;
        self.settings_dirty = true;
    }
}

/// Redraw the panel from the text and matrix buffers if either changed.
pub fn render<I2C>(
    display: &mut Display<I2C>,
    text: &mut TextGrid,
    leds: &mut LedGrid,
) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    if leds.settings_dirty {
        leds.settings_dirty = false;
        display
            .set_display_on(!leds.shutdown)
            .map_err(|_| Error::Display)?;
        display
            .set_brightness(Brightness::custom(1, leds.intensity.saturating_mul(17)))
            .map_err(|_| Error::Display)?;
    }

    if !text.dirty && !leds.dirty {
        return Ok(());
    }
    text.dirty = false;
    leds.dirty = false;

    display.clear_buffer();

    for (row, cells) in text.cells.iter().enumerate() {
        if let Ok(line) = core::str::from_utf8(cells) {
            let origin = Point::new(0, row as i32 * ROW_HEIGHT);
            Text::with_baseline(line, origin, text_style(), Baseline::Top)
                .draw(display)
                .map_err(|_| Error::Display)?;
        }
    }

    let lit = PrimitiveStyle::with_fill(BinaryColor::On);
    let last = MATRIX_SIZE as i32 - 1;
    for (row, bits) in leds.rows.iter().enumerate() {
        for col in 0..MATRIX_SIZE {
            if bits & (1 << col) == 0 {
                continue;
            }
            // Column 0 on the right, row 0 at the bottom: matches how the
            // game moves the player.
            let x = (last - col as i32) * CELL_PITCH;
            let y = (last - row as i32) * CELL_PITCH;
            Rectangle::new(MATRIX_ORIGIN + Point::new(x, y), Size::new(CELL_SIZE, CELL_SIZE))
                .into_styled(lit)
                .draw(display)
                .map_err(|_| Error::Display)?;
        }
    }

    display.flush().map_err(|_| Error::Display)
}
