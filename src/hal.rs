//! Capabilities the UI core consumes.
//!
//! Each trait is a narrow, object-safe view of one piece of hardware.
//! The firmware binds them to nRF52840 peripherals; tests bind them to
//! in-memory fakes.

use crate::error::Error;
use core::fmt::Write;

/// Logical pin identifier.
pub type Pin = u8;

/// Electrical configuration of a digital pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    Input,
    InputPullUp,
    Output,
}

/// Monotonic millisecond clock, wrapping at `u32::MAX`.
pub trait Clock {
    fn now_ms(&mut self) -> u32;
}

pub trait DigitalIo {
    fn read(&mut self, pin: Pin) -> bool;
    fn write(&mut self, pin: Pin, level: bool);
    fn set_mode(&mut self, pin: Pin, mode: PinMode);
}

/// Analog input sampled in `0..=ANALOG_MAX`.
pub trait AnalogIo {
    fn read(&mut self, pin: Pin) -> u16;
}

/// Character display addressed in columns and rows.
pub trait TextDisplay {
    fn clear(&mut self);
    fn set_cursor(&mut self, col: u8, row: u8);
    fn print(&mut self, text: &str);

    /// Print a signed integer in decimal at the cursor.
    fn print_int(&mut self, value: i32) {
        let mut text: heapless::String<12> = heapless::String::new();
        // i32::MIN is 11 characters, always fits.
        let _ = write!(text, "{}", value);
        self.print(text.as_str());
    }
}

/// Chain of monochrome LED matrices, one device per `idx`.
pub trait PixelMatrix {
    fn set_pixel(&mut self, idx: u8, row: u8, col: u8, on: bool);
    fn clear_all(&mut self, idx: u8);
    fn set_intensity(&mut self, idx: u8, level: u8);
    fn set_shutdown(&mut self, idx: u8, shutdown: bool);
}

/// Byte-addressed persistent storage.
///
/// A call either completes fully or reports an error; partial writes
/// are not modelled.
pub trait ByteStorage {
    fn read(&mut self, offset: u16, buf: &mut [u8]) -> Result<(), Error>;
    fn write(&mut self, offset: u16, data: &[u8]) -> Result<(), Error>;
}

pub trait Random {
    /// Uniform value in `0..bound`.
    fn next(&mut self, bound: u32) -> u32;
}

/// PWM-style dimming output.
pub trait Dimmer {
    fn set_level(&mut self, pin: Pin, level: u8);
}

/// Capability handles the UI state machine works through.
///
/// Built fresh for each `update` call by whoever owns the peripherals.
/// Inputs are not bundled: `DigitalIo` and `AnalogIo` go to
/// [`Joystick::poll`](crate::joystick::Joystick::poll), and `Clock` readings
/// are passed as `now`.
pub struct Context<'a> {
    pub display: &'a mut dyn TextDisplay,
    pub matrix: &'a mut dyn PixelMatrix,
    pub storage: &'a mut dyn ByteStorage,
    pub random: &'a mut dyn Random,
    pub dimmer: &'a mut dyn Dimmer,
}
