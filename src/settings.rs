//! Persisted display settings.
//!
//! Storage layout: one raw byte per setting at a fixed offset
//! (`config::CONTRAST_OFFSET`, `config::BRIGHTNESS_OFFSET`).
//!
//! Values are loaded once at power-on and written back only when the
//! Settings screen is entered.

use crate::config::{
    BRIGHTNESS_OFFSET, BRIGHTNESS_PIN, CONTRAST_OFFSET, CONTRAST_PIN, DEFAULT_BRIGHTNESS,
    DEFAULT_CONTRAST,
};
use crate::hal::{ByteStorage, Context, Dimmer, Pin};

/// An adjustable setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Setting {
    Contrast,
    Brightness,
}

impl Setting {
    /// All settings, in menu and storage order.
    pub const ALL: [Setting; 2] = [Setting::Contrast, Setting::Brightness];

    /// Byte offset of this setting in persistent storage.
    pub const fn storage_offset(self) -> u16 {
        match self {
            Setting::Contrast => CONTRAST_OFFSET,
            Setting::Brightness => BRIGHTNESS_OFFSET,
        }
    }

    /// Dimming output this setting drives.
    pub const fn pin(self) -> Pin {
        match self {
            Setting::Contrast => CONTRAST_PIN,
            Setting::Brightness => BRIGHTNESS_PIN,
        }
    }

    /// Change callback bound to this setting's slider.
    pub const fn on_change(self) -> fn(&mut Context<'_>, u8) {
        match self {
            Setting::Contrast => refresh_contrast,
            Setting::Brightness => refresh_brightness,
        }
    }
}

fn refresh_contrast(ctx: &mut Context<'_>, value: u8) {
    ctx.dimmer.set_level(CONTRAST_PIN, value);
}

fn refresh_brightness(ctx: &mut Context<'_>, value: u8) {
    ctx.dimmer.set_level(BRIGHTNESS_PIN, value);
}

/// Current values of all settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    pub contrast: u8,
    pub brightness: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            contrast: DEFAULT_CONTRAST,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

impl Settings {
    pub fn get(&self, setting: Setting) -> u8 {
        match setting {
            Setting::Contrast => self.contrast,
            Setting::Brightness => self.brightness,
        }
    }

    pub fn set(&mut self, setting: Setting, value: u8) {
        match setting {
            Setting::Contrast => self.contrast = value,
            Setting::Brightness => self.brightness = value,
        }
    }

    /// Drive every dimming output to its stored level.
    pub fn apply(&self, dimmer: &mut dyn Dimmer) {
        for setting in Setting::ALL {
            dimmer.set_level(setting.pin(), self.get(setting));
        }
    }
}

/// Loads and persists [`Settings`] through a [`ByteStorage`].
pub struct SettingsStore;

impl SettingsStore {
    /// Read every setting from storage.
    ///
    /// A setting that cannot be read keeps its default value.
    pub fn load(storage: &mut dyn ByteStorage) -> Settings {
        let mut settings = Settings::default();

        for setting in Setting::ALL {
            let mut byte = [0u8; 1];
            match storage.read(setting.storage_offset(), &mut byte) {
                Ok(()) => settings.set(setting, byte[0]),
                Err(e) => warn!("Settings: read {} failed: {}", setting, e),
            }
        }

        info!(
            "Settings loaded: contrast={} brightness={}",
            settings.contrast, settings.brightness
        );
        settings
    }

    /// Write every setting to storage.
    ///
    /// Failures are logged and skipped; the in-memory values stay authoritative.
    pub fn persist(settings: &Settings, storage: &mut dyn ByteStorage) {
        for setting in Setting::ALL {
            let byte = [settings.get(setting)];
            if let Err(e) = storage.write(setting.storage_offset(), &byte) {
                warn!("Settings: write {} failed: {}", setting, e);
            }
        }

        info!(
            "Settings persisted: contrast={} brightness={}",
            settings.contrast, settings.brightness
        );
    }
}
