//! User interface subsystem - text display + LED matrix driven by the joystick.
//!
//! The UI keeps exactly one live screen. Every poll tick hands the
//! debounced joystick events to that screen's handler, which renders on
//! the first tick after entry and may ask for a transition. A transition
//! swaps in a whole new [`UiState`]: new screen and payload, entry flag
//! set, timestamp reset.
//!
//! ## Screens
//!
//! - **Greet**: splash shown after power-on, times out to the main menu
//! - **MainMenu**: Start Game / Settings / About
//! - **Game**: move the dot on the 8×8 matrix, eat the food
//! - **GameOver**: final score, times out to the main menu
//! - **Settings**: pick a setting to edit
//! - **Slider**: edit one numeric setting
//! - **About**: credits, times out to the main menu

pub mod game;
pub mod input_logic;
pub mod menu;
pub mod slider;

#[cfg(test)]
mod tests;

pub use game::{GameParams, GridPos};
pub use menu::MainMenuItem;
pub use slider::SliderParams;

use crate::config::{
    ABOUT_DURATION_MS, GAME_OVER_DURATION_MS, GREET_DURATION_MS, MATRIX_INDEX, MATRIX_INTENSITY,
};
use crate::hal::Context;
use crate::joystick::{Direction, PressKind};
use crate::settings::{Settings, SettingsStore};

/// Screens (views) the UI can be in, each with its own payload.
#[derive(Clone, Copy, Debug)]
pub enum Screen {
    /// Splash after power-on.
    Greet,
    /// Top-level menu; `pos` indexes [`MainMenuItem::ALL`].
    MainMenu { pos: usize },
    /// Grid game in progress.
    Game(GameParams),
    /// Final score of the last round.
    GameOver { score: u16 },
    /// Settings list; `pos` indexes [`Setting::ALL`](crate::settings::Setting::ALL).
    Settings { pos: usize },
    /// Numeric editor for one setting.
    Slider(SliderParams),
    /// Credits.
    About,
}

/// Payload-free tag of a [`Screen`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenId {
    Greet,
    MainMenu,
    Game,
    GameOver,
    Settings,
    Slider,
    About,
}

impl Screen {
    /// Main menu with the cursor on the first entry.
    pub const fn main_menu() -> Self {
        Screen::MainMenu { pos: 0 }
    }

    pub fn id(&self) -> ScreenId {
        match self {
            Screen::Greet => ScreenId::Greet,
            Screen::MainMenu { .. } => ScreenId::MainMenu,
            Screen::Game(_) => ScreenId::Game,
            Screen::GameOver { .. } => ScreenId::GameOver,
            Screen::Settings { .. } => ScreenId::Settings,
            Screen::Slider(_) => ScreenId::Slider,
            Screen::About => ScreenId::About,
        }
    }
}

/// The live screen together with its entry bookkeeping.
#[derive(Clone, Copy, Debug)]
pub struct UiState {
    pub screen: Screen,
    /// Set until the screen has run its first tick.
    pub entry: bool,
    /// When the screen was entered (ms).
    pub timestamp: u32,
}

impl UiState {
    fn enter(screen: Screen, now: u32) -> Self {
        Self {
            screen,
            entry: true,
            timestamp: now,
        }
    }
}

/// One poll tick as seen by a screen handler.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Tick {
    pub(crate) entry: bool,
    /// Time since the screen was entered (ms).
    pub(crate) elapsed: u32,
    pub(crate) press: PressKind,
    pub(crate) dir: Direction,
}

impl Tick {
    /// Right, or a short press, selects.
    pub(crate) fn confirms(&self) -> bool {
        self.dir == Direction::Right || self.press == PressKind::Short
    }

    /// Left, or a long press, goes back.
    pub(crate) fn backs_out(&self) -> bool {
        self.dir == Direction::Left || self.press == PressKind::Long
    }
}

/// Owner of the live [`UiState`] and the in-memory [`Settings`].
pub struct UiStateMachine {
    state: UiState,
    settings: Settings,
}

impl UiStateMachine {
    /// Power-on: load settings, reset the matrix and display, apply the
    /// dimming levels, and start on the greeting.
    pub fn init(ctx: &mut Context<'_>, now: u32) -> Self {
        let settings = SettingsStore::load(ctx.storage);

        ctx.matrix.set_shutdown(MATRIX_INDEX, false);
        ctx.matrix.set_intensity(MATRIX_INDEX, MATRIX_INTENSITY);
        ctx.matrix.clear_all(MATRIX_INDEX);

        ctx.display.clear();
        settings.apply(ctx.dimmer);

        info!("UI: init at {} ms", now);
        Self {
            state: UiState::enter(Screen::Greet, now),
            settings,
        }
    }

    /// Run the live screen for one tick.
    pub fn update(&mut self, ctx: &mut Context<'_>, now: u32, press: PressKind, dir: Direction) {
        let tick = Tick {
            entry: core::mem::replace(&mut self.state.entry, false),
            elapsed: now.wrapping_sub(self.state.timestamp),
            press,
            dir,
        };

        let next = match &mut self.state.screen {
            Screen::Greet => greet(ctx, tick),
            Screen::MainMenu { pos } => menu::main_menu(ctx, tick, pos),
            Screen::Game(game) => game::update(ctx, tick, game),
            Screen::GameOver { score } => game_over(ctx, tick, *score),
            Screen::Settings { pos } => menu::settings(ctx, tick, pos, &self.settings),
            Screen::Slider(params) => slider::update(ctx, tick, params, &mut self.settings),
            Screen::About => about(ctx, tick),
        };

        if let Some(screen) = next {
            info!("UI: {} -> {}", self.state.screen.id(), screen.id());
            self.state = UiState::enter(screen, now);
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn screen_id(&self) -> ScreenId {
        self.state.screen.id()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

fn greet(ctx: &mut Context<'_>, tick: Tick) -> Option<Screen> {
    if tick.entry {
        ctx.display.clear();
        ctx.display.print("HAVE FUN!");
    }

    (tick.elapsed > GREET_DURATION_MS).then(Screen::main_menu)
}

fn game_over(ctx: &mut Context<'_>, tick: Tick, score: u16) -> Option<Screen> {
    if tick.entry {
        ctx.display.clear();
        ctx.display.print("GAME OVER");
        ctx.display.set_cursor(0, 1);
        ctx.display.print("SCORE: ");
        ctx.display.print_int(i32::from(score));
    }

    (tick.elapsed > GAME_OVER_DURATION_MS).then(Screen::main_menu)
}

fn about(ctx: &mut Context<'_>, tick: Tick) -> Option<Screen> {
    if tick.entry {
        ctx.display.clear();
        ctx.display.print("QUASI-SNAKE");
        ctx.display.set_cursor(0, 1);
        ctx.display.print("Nicula Ionut 334");
    }

    (tick.elapsed > ABOUT_DURATION_MS).then(Screen::main_menu)
}
