//! Application-wide constants and compile-time configuration.
//!
//! All pin assignments, joystick thresholds, screen timings, and storage
//! layout live here so they can be tuned in one place.

use crate::hal::Pin;

// Joystick

/// Highest value the analog front-end reports (10-bit conversion).
pub const ANALOG_MAX: u16 = 1023;

/// Resting position of both axes.
pub const ANALOG_MIDPOINT: u16 = ANALOG_MAX / 2;

/// Distance from the midpoint an axis must exceed to count as deflected.
pub const AXIS_DEFLECTION_THRESHOLD: u16 = 400;

/// Half-width of the band both axes must re-enter before the next gesture.
pub const NEUTRAL_BAND: u16 = 80;

/// Releases held shorter than this are treated as bounce (ms).
pub const SHORT_PRESS_MS: u32 = 50;

/// Releases held at least this long are long presses (ms).
pub const LONG_PRESS_MS: u32 = 2000;

// UI timing

/// How long the greeting stays up after power-on (ms).
pub const GREET_DURATION_MS: u32 = 5000;

/// How long the final score is shown (ms).
pub const GAME_OVER_DURATION_MS: u32 = 5000;

/// How long the about screen is shown (ms).
pub const ABOUT_DURATION_MS: u32 = 3000;

/// Main loop period on target (ms).
pub const POLL_INTERVAL_MS: u64 = 10;

// Text display

/// Character columns of the text display.
pub const LCD_COLS: usize = 16;

/// Character rows of the text display.
pub const LCD_ROWS: usize = 2;

// LED matrix

/// Index of the matrix device in the driver chain.
pub const MATRIX_INDEX: u8 = 0;

/// Side length of the square game board.
pub const MATRIX_SIZE: u8 = 8;

/// Intensity programmed into the matrix at power-on.
pub const MATRIX_INTENSITY: u8 = 2;

// Settings

/// Lower bound of every adjustable setting.
pub const SETTING_MIN: u8 = 0;

/// Upper bound of every adjustable setting.
pub const SETTING_MAX: u8 = 255;

/// Amount one slider gesture changes a setting by.
pub const SLIDER_STEP: u8 = 10;

/// Contrast used when the stored value cannot be read.
pub const DEFAULT_CONTRAST: u8 = 90;

/// Backlight brightness used when the stored value cannot be read.
pub const DEFAULT_BRIGHTNESS: u8 = 200;

/// Byte offset of the contrast value in persistent storage.
pub const CONTRAST_OFFSET: u16 = 0;

/// Byte offset of the brightness value in persistent storage.
pub const BRIGHTNESS_OFFSET: u16 = 1;

/// Total size of the persisted settings record.
pub const SETTINGS_LEN: usize = 2;

// Pin assignments (logical ids)
//
// The firmware maps these onto nRF52840-DK pins in `main.rs`:
//
//   Joystick SW     → P0.11
//   Joystick VRx    → P0.03 (AIN1)
//   Joystick VRy    → P0.04 (AIN2)
//   Contrast PWM    → P0.13
//   Brightness PWM  → P0.14
//   I²C SDA         → P0.26
//   I²C SCL         → P0.27

pub const BUTTON_PIN: Pin = 2;
pub const AXIS_X_PIN: Pin = 14;
pub const AXIS_Y_PIN: Pin = 15;
pub const CONTRAST_PIN: Pin = 3;
pub const BRIGHTNESS_PIN: Pin = 5;

// Settings flash region (firmware only)

/// Flash page index where the settings record starts (4 KB per page on nRF52840).
pub const STORAGE_FLASH_PAGE_START: u32 = 240;

/// Number of flash pages reserved for the settings record.
pub const STORAGE_FLASH_PAGE_COUNT: u32 = 2;
