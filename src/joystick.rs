//! Joystick gesture resolution.
//!
//! Turns raw samples into discrete UI events:
//!   - two analog axes → one debounced `Direction` per deflection
//!   - the push switch → a `PressKind` classified on release
//!
//! A deflection fires exactly once. Afterwards the resolver waits until
//! both axes are back inside the neutral band before it can fire again,
//! so holding the stick never repeats.

use crate::config::{
    ANALOG_MAX, ANALOG_MIDPOINT, AXIS_DEFLECTION_THRESHOLD, AXIS_X_PIN, AXIS_Y_PIN, BUTTON_PIN,
    LONG_PRESS_MS, NEUTRAL_BAND, SHORT_PRESS_MS,
};
use crate::hal::{AnalogIo, DigitalIo, Pin, PinMode};

/// Joystick gesture direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

/// Push-switch event, classified by how long it was held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    #[default]
    None,
    Short,
    Long,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureState {
    /// The next deflection past the dead zone fires.
    Ready,
    /// A direction fired; waiting for both axes to return to neutral.
    AwaitingNeutral,
}

/// Active-low switch level meaning "not pressed".
const RELEASED: bool = true;

#[derive(Clone, Copy, Debug)]
struct ButtonTracker {
    previous_level: bool,
    previous_ts: u32,
    press_duration: u32,
}

/// Pure gesture state: no I/O, fed with samples by the caller.
#[derive(Clone, Copy, Debug)]
pub struct GestureResolver {
    state: GestureState,
    button: ButtonTracker,
}

impl GestureResolver {
    /// Create a resolver with the switch released as of `now`.
    pub fn new(now: u32) -> Self {
        Self {
            state: GestureState::Ready,
            button: ButtonTracker {
                previous_level: RELEASED,
                previous_ts: now,
                press_duration: 0,
            },
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Time between the two most recent switch edges (ms).
    pub fn last_press_duration(&self) -> u32 {
        self.button.press_duration
    }

    /// Resolve one pair of axis samples into a direction.
    pub fn direction(&mut self, x: u16, y: u16) -> Direction {
        match self.state {
            GestureState::Ready => {
                let dir = resolve_axes(x, y);
                if dir != Direction::None {
                    debug!("joystick: {} (x={}, y={})", dir, x, y);
                    self.state = GestureState::AwaitingNeutral;
                }
                dir
            }
            GestureState::AwaitingNeutral => {
                if is_neutral(x) && is_neutral(y) {
                    self.state = GestureState::Ready;
                }
                Direction::None
            }
        }
    }

    /// Feed the current switch level (`true` = released) sampled at `now`.
    ///
    /// Every edge restarts the duration measurement, including edges that
    /// produce no event, so the next measurement starts from the right point.
    pub fn press(&mut self, level: bool, now: u32) -> PressKind {
        let button = &mut self.button;
        if level == button.previous_level {
            return PressKind::None;
        }

        button.previous_level = level;
        button.press_duration = now.wrapping_sub(button.previous_ts);
        button.previous_ts = now;

        if level != RELEASED {
            return PressKind::None;
        }

        let kind = classify_press(button.press_duration);
        if kind != PressKind::None {
            debug!("button: {} after {} ms", kind, button.press_duration);
        }
        kind
    }
}

/// Classify a completed press by its hold time.
pub fn classify_press(held_ms: u32) -> PressKind {
    if held_ms < SHORT_PRESS_MS {
        PressKind::None
    } else if held_ms < LONG_PRESS_MS {
        PressKind::Short
    } else {
        PressKind::Long
    }
}

fn deflection(raw: u16) -> u16 {
    raw.min(ANALOG_MAX).abs_diff(ANALOG_MIDPOINT)
}

fn is_neutral(raw: u16) -> bool {
    deflection(raw) <= NEUTRAL_BAND
}

/// Direction of one axis with its deflection, if past the dead zone.
fn axis(raw: u16, below: Direction, above: Direction) -> Option<(Direction, u16)> {
    let magnitude = deflection(raw);
    if magnitude <= AXIS_DEFLECTION_THRESHOLD {
        return None;
    }
    let dir = if raw < ANALOG_MIDPOINT { below } else { above };
    Some((dir, magnitude))
}

/// Both axes deflected: the larger deflection wins, horizontal on a tie.
fn resolve_axes(x: u16, y: u16) -> Direction {
    let horizontal = axis(x, Direction::Left, Direction::Right);
    let vertical = axis(y, Direction::Down, Direction::Up);

    match (horizontal, vertical) {
        (None, None) => Direction::None,
        (Some((dir, _)), None) | (None, Some((dir, _))) => dir,
        (Some((h, h_mag)), Some((v, v_mag))) => {
            if v_mag > h_mag {
                v
            } else {
                h
            }
        }
    }
}

/// Pins the joystick is wired to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JoystickPins {
    pub button: Pin,
    pub x: Pin,
    pub y: Pin,
}

impl Default for JoystickPins {
    fn default() -> Self {
        Self {
            button: BUTTON_PIN,
            x: AXIS_X_PIN,
            y: AXIS_Y_PIN,
        }
    }
}

/// Gesture resolver bound to its input pins.
pub struct Joystick {
    pins: JoystickPins,
    resolver: GestureResolver,
}

impl Joystick {
    /// Configure the switch input and start tracking from `now`.
    pub fn init(io: &mut dyn DigitalIo, pins: JoystickPins, now: u32) -> Self {
        io.set_mode(pins.button, PinMode::InputPullUp);
        Self {
            pins,
            resolver: GestureResolver::new(now),
        }
    }

    /// Sample the switch and both axes once.
    pub fn poll(
        &mut self,
        digital: &mut dyn DigitalIo,
        analog: &mut dyn AnalogIo,
        now: u32,
    ) -> (PressKind, Direction) {
        let press = self.resolver.press(digital.read(self.pins.button), now);
        let x = analog.read(self.pins.x);
        let y = analog.read(self.pins.y);
        (press, self.resolver.direction(x, y))
    }

    pub fn resolver(&self) -> &GestureResolver {
        &self.resolver
    }
}
