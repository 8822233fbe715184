//! Joystick inputs, dimming outputs, RNG and clock.
//!
//! Pin mapping (see `quasi_snake::config` for the logical ids):
//! ```text
//! button      P0.11  GPIO input, pull-up, active-low
//! axis x      P0.03  SAADC AIN1
//! axis y      P0.04  SAADC AIN2
//! contrast    P0.13  PWM0 ch0
//! brightness  P0.14  PWM0 ch1
//! ```

use defmt::warn;
use embassy_nrf::gpio::Input;
use embassy_nrf::peripherals::{PWM0, RNG};
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::rng::Rng;
use embassy_nrf::saadc::Saadc;
use embassy_time::Instant;
use quasi_snake::config::{
    ANALOG_MAX, ANALOG_MIDPOINT, AXIS_X_PIN, AXIS_Y_PIN, BRIGHTNESS_PIN, CONTRAST_PIN,
};
use quasi_snake::hal::{AnalogIo, Clock, DigitalIo, Dimmer, Pin, PinMode, Random};

/// Milliseconds since boot, wrapping.
pub struct UptimeClock;

impl Clock for UptimeClock {
    fn now_ms(&mut self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

/// The joystick switch as the only digital pin on the board.
pub struct ButtonInput<'d> {
    pin: Pin,
    input: Input<'d>,
}

impl<'d> ButtonInput<'d> {
    pub fn new(input: Input<'d>, pin: Pin) -> Self {
        Self { pin, input }
    }
}

impl DigitalIo for ButtonInput<'_> {
    fn read(&mut self, pin: Pin) -> bool {
        if pin != self.pin {
            warn!("IO: read of unmapped pin {}", pin);
            return true;
        }
        self.input.is_high()
    }

    fn write(&mut self, pin: Pin, _level: bool) {
        warn!("IO: write to unmapped pin {}", pin);
    }

    fn set_mode(&mut self, pin: Pin, mode: PinMode) {
        // Pull-up is fixed when the `Input` is built.
        if pin != self.pin || mode != PinMode::InputPullUp {
            warn!("IO: unsupported mode {} for pin {}", mode, pin);
        }
    }
}

/// One SAADC scan of both joystick axes.
pub struct AxisSamples {
    x: u16,
    y: u16,
}

impl AxisSamples {
    /// Sample both channels. Channel 0 is x, channel 1 is y.
    pub async fn sample(saadc: &mut Saadc<'_, 2>) -> Self {
        let mut buf = [0i16; 2];
        saadc.sample(&mut buf).await;
        Self {
            x: clamp_sample(buf[0]),
            y: clamp_sample(buf[1]),
        }
    }
}

// Single-ended readings can dip slightly below zero.
fn clamp_sample(raw: i16) -> u16 {
    (raw.max(0) as u16).min(ANALOG_MAX)
}

impl AnalogIo for AxisSamples {
    fn read(&mut self, pin: Pin) -> u16 {
        match pin {
            AXIS_X_PIN => self.x,
            AXIS_Y_PIN => self.y,
            _ => {
                warn!("IO: analog read of unmapped pin {}", pin);
                ANALOG_MIDPOINT
            }
        }
    }
}

/// Two-channel PWM dimmer with an 8-bit duty range.
pub struct PwmDimmer<'d> {
    pwm: SimplePwm<'d, PWM0>,
}

impl<'d> PwmDimmer<'d> {
    pub fn new(mut pwm: SimplePwm<'d, PWM0>) -> Self {
        pwm.set_max_duty(u16::from(u8::MAX));
        Self { pwm }
    }
}

impl Dimmer for PwmDimmer<'_> {
    fn set_level(&mut self, pin: Pin, level: u8) {
        let channel = match pin {
            CONTRAST_PIN => 0,
            BRIGHTNESS_PIN => 1,
            _ => {
                warn!("IO: no PWM channel for pin {}", pin);
                return;
            }
        };
        self.pwm.set_duty(channel, u16::from(level));
    }
}

/// Hardware RNG.
pub struct HwRandom<'d> {
    rng: Rng<'d, RNG>,
}

impl<'d> HwRandom<'d> {
    pub fn new(rng: Rng<'d, RNG>) -> Self {
        Self { rng }
    }
}

impl Random for HwRandom<'_> {
    fn next(&mut self, bound: u32) -> u32 {
        let mut bytes = [0u8; 4];
        self.rng.blocking_fill_bytes(&mut bytes);
        u32::from_le_bytes(bytes) % bound.max(1)
    }
}
