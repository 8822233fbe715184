//! Joystick-driven menu UI and LED-matrix mini-game.
//!
//! This library holds all the device logic that runs without hardware:
//! gesture resolution, the UI state machine, and settings persistence.
//! Hardware is reached only through the capability traits in [`hal`],
//! so everything here is tested on the host.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary (`src/main.rs`, feature `embedded`) binds
//! the capability traits to nRF52840 peripherals and runs the poll loop.
//!
//! ```text
//! raw samples ─► joystick::Joystick ─► (PressKind, Direction)
//!                                            │
//!                                            ▼
//!                  ui::UiStateMachine::update(ctx, now, press, dir)
//!                                            │
//!                    text display / LED matrix / dimmer / storage
//! ```

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module below.
mod fmt;

pub mod config;
pub mod error;
pub mod hal;
pub mod joystick;
pub mod settings;
pub mod ui;

pub use error::Error;
pub use joystick::{Direction, Joystick, PressKind};
pub use ui::UiStateMachine;
