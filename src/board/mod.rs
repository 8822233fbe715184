//! nRF52840 bindings for the capability traits.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C, showing both the 16×2 text
//!   grid and the 8×8 LED matrix image
//! - **IO**: joystick switch (GPIO), joystick axes (SAADC), dimming (PWM),
//!   hardware RNG, uptime clock
//! - **Storage**: settings record in internal flash via `sequential-storage`

pub mod display;
pub mod io;
pub mod storage;
