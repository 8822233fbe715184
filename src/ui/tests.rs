//! Unit tests for the UI state machine.
//!
//! These tests run on the host (not embedded) against in-memory fakes of
//! every capability the UI uses.

use super::*;
use crate::config::{
    BRIGHTNESS_PIN, CONTRAST_PIN, LCD_COLS, LCD_ROWS, MATRIX_SIZE, SETTINGS_LEN, SLIDER_STEP,
};
use crate::error::Error;
use crate::hal::{ByteStorage, Dimmer, Pin, PixelMatrix, Random, TextDisplay};
use crate::settings::Setting;

// ═══════════════════════════════════════════════════════════════════════════
// Fakes
// ═══════════════════════════════════════════════════════════════════════════

const N: usize = MATRIX_SIZE as usize;

struct FakeDisplay {
    cells: [[u8; LCD_COLS]; LCD_ROWS],
    col: usize,
    row: usize,
    clears: usize,
}

impl FakeDisplay {
    fn new() -> Self {
        Self {
            cells: [[b' '; LCD_COLS]; LCD_ROWS],
            col: 0,
            row: 0,
            clears: 0,
        }
    }

    /// Row contents with trailing blanks removed.
    fn row(&self, row: usize) -> heapless::String<LCD_COLS> {
        let text = core::str::from_utf8(&self.cells[row]).unwrap().trim_end();
        heapless::String::try_from(text).unwrap()
    }
}

impl TextDisplay for FakeDisplay {
    fn clear(&mut self) {
        self.cells = [[b' '; LCD_COLS]; LCD_ROWS];
        self.col = 0;
        self.row = 0;
        self.clears += 1;
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.col = col as usize;
        self.row = row as usize;
    }

    fn print(&mut self, text: &str) {
        for b in text.bytes() {
            if self.col < LCD_COLS {
                self.cells[self.row][self.col] = b;
            }
            self.col += 1;
        }
    }
}

struct FakeMatrix {
    lit: [[bool; N]; N],
    intensity: Option<u8>,
    shutdown: bool,
    clears: usize,
}

impl FakeMatrix {
    fn new() -> Self {
        Self {
            lit: [[false; N]; N],
            intensity: None,
            shutdown: true,
            clears: 0,
        }
    }

    fn is_lit(&self, pos: GridPos) -> bool {
        self.lit[pos.y as usize][pos.x as usize]
    }

    fn lit_count(&self) -> usize {
        self.lit.iter().flatten().filter(|&&on| on).count()
    }
}

impl PixelMatrix for FakeMatrix {
    fn set_pixel(&mut self, idx: u8, row: u8, col: u8, on: bool) {
        assert_eq!(idx, 0);
        assert!((row as usize) < N && (col as usize) < N, "pixel off board");
        self.lit[row as usize][col as usize] = on;
    }

    fn clear_all(&mut self, _idx: u8) {
        self.lit = [[false; N]; N];
        self.clears += 1;
    }

    fn set_intensity(&mut self, _idx: u8, level: u8) {
        self.intensity = Some(level);
    }

    fn set_shutdown(&mut self, _idx: u8, shutdown: bool) {
        self.shutdown = shutdown;
    }
}

struct FakeStorage {
    bytes: [u8; SETTINGS_LEN],
    writes: usize,
}

impl ByteStorage for FakeStorage {
    fn read(&mut self, offset: u16, buf: &mut [u8]) -> Result<(), Error> {
        let start = offset as usize;
        let src = self
            .bytes
            .get(start..start + buf.len())
            .ok_or(Error::OutOfBounds)?;
        buf.copy_from_slice(src);
        Ok(())
    }

    fn write(&mut self, offset: u16, data: &[u8]) -> Result<(), Error> {
        let start = offset as usize;
        self.bytes
            .get_mut(start..start + data.len())
            .ok_or(Error::OutOfBounds)?
            .copy_from_slice(data);
        self.writes += 1;
        Ok(())
    }
}

/// Replays a fixed script, then falls back to a simple LCG.
struct FakeRandom {
    script: heapless::Deque<u32, 16>,
    seed: u32,
    calls: usize,
}

impl FakeRandom {
    fn new(script: &[u32]) -> Self {
        let mut queue = heapless::Deque::new();
        for &v in script {
            queue.push_back(v).unwrap();
        }
        Self {
            script: queue,
            seed: 7,
            calls: 0,
        }
    }
}

impl Random for FakeRandom {
    fn next(&mut self, bound: u32) -> u32 {
        self.calls += 1;
        match self.script.pop_front() {
            Some(v) => v % bound,
            None => {
                self.seed = self.seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                (self.seed >> 16) % bound
            }
        }
    }
}

#[derive(Default)]
struct FakeDimmer {
    changes: heapless::Vec<(Pin, u8), 64>,
}

impl FakeDimmer {
    fn level(&self, pin: Pin) -> Option<u8> {
        self.changes
            .iter()
            .rev()
            .find(|(p, _)| *p == pin)
            .map(|&(_, l)| l)
    }
}

impl Dimmer for FakeDimmer {
    fn set_level(&mut self, pin: Pin, level: u8) {
        self.changes.push((pin, level)).unwrap();
    }
}

struct Rig {
    display: FakeDisplay,
    matrix: FakeMatrix,
    storage: FakeStorage,
    random: FakeRandom,
    dimmer: FakeDimmer,
    now: u32,
}

impl Rig {
    fn new() -> Self {
        Self::with_random(&[])
    }

    fn with_random(script: &[u32]) -> Self {
        Self {
            display: FakeDisplay::new(),
            matrix: FakeMatrix::new(),
            storage: FakeStorage {
                bytes: [100, 150],
                writes: 0,
            },
            random: FakeRandom::new(script),
            dimmer: FakeDimmer::default(),
            now: 1_000,
        }
    }

    fn ctx(&mut self) -> Context<'_> {
        Context {
            display: &mut self.display,
            matrix: &mut self.matrix,
            storage: &mut self.storage,
            random: &mut self.random,
            dimmer: &mut self.dimmer,
        }
    }

    fn boot(&mut self) -> UiStateMachine {
        let now = self.now;
        UiStateMachine::init(&mut self.ctx(), now)
    }

    fn step(&mut self, ui: &mut UiStateMachine, press: PressKind, dir: Direction) {
        self.now = self.now.wrapping_add(10);
        let now = self.now;
        ui.update(&mut self.ctx(), now, press, dir);
    }

    fn idle(&mut self, ui: &mut UiStateMachine) {
        self.step(ui, PressKind::None, Direction::None);
    }

    fn go(&mut self, ui: &mut UiStateMachine, dir: Direction) {
        self.step(ui, PressKind::None, dir);
    }

    fn wait(&mut self, ui: &mut UiStateMachine, ms: u32) {
        self.now = self.now.wrapping_add(ms);
        self.idle(ui);
    }

    /// Boot and get past the greeting.
    fn main_menu(&mut self) -> UiStateMachine {
        let mut ui = self.boot();
        self.idle(&mut ui);
        self.wait(&mut ui, GREET_DURATION_MS);
        assert_eq!(ui.screen_id(), ScreenId::MainMenu);
        self.idle(&mut ui);
        ui
    }

    fn game(&mut self) -> UiStateMachine {
        let mut ui = self.main_menu();
        self.go(&mut ui, Direction::Right);
        assert_eq!(ui.screen_id(), ScreenId::Game);
        self.idle(&mut ui);
        ui
    }

    fn settings(&mut self) -> UiStateMachine {
        let mut ui = self.main_menu();
        self.go(&mut ui, Direction::Up);
        self.go(&mut ui, Direction::Right);
        assert_eq!(ui.screen_id(), ScreenId::Settings);
        self.idle(&mut ui);
        ui
    }
}

fn game_params(ui: &UiStateMachine) -> GameParams {
    match ui.state().screen {
        Screen::Game(game) => game,
        other => panic!("expected game, got {:?}", other.id()),
    }
}

fn menu_pos(ui: &UiStateMachine) -> usize {
    match ui.state().screen {
        Screen::MainMenu { pos } | Screen::Settings { pos } => pos,
        other => panic!("expected a menu, got {:?}", other.id()),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Power-on & Greet
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn init_loads_settings_and_resets_outputs() {
    let mut rig = Rig::new();
    let ui = rig.boot();

    assert_eq!(ui.settings().contrast, 100);
    assert_eq!(ui.settings().brightness, 150);
    assert_eq!(rig.dimmer.level(CONTRAST_PIN), Some(100));
    assert_eq!(rig.dimmer.level(BRIGHTNESS_PIN), Some(150));
    assert!(!rig.matrix.shutdown);
    assert_eq!(rig.matrix.intensity, Some(MATRIX_INTENSITY));
    assert_eq!(rig.matrix.clears, 1);
    assert_eq!(ui.screen_id(), ScreenId::Greet);
    assert!(ui.state().entry);
    assert_eq!(ui.state().timestamp, 1_000);
}

#[test]
fn greet_renders_once_then_waits() {
    let mut rig = Rig::new();
    let mut ui = rig.boot();
    let clears_after_init = rig.display.clears;

    rig.idle(&mut ui);
    assert_eq!(rig.display.row(0).as_str(), "HAVE FUN!");
    assert!(!ui.state().entry);

    rig.go(&mut ui, Direction::Right);
    rig.step(&mut ui, PressKind::Long, Direction::None);
    assert_eq!(ui.screen_id(), ScreenId::Greet);
    assert_eq!(rig.display.clears, clears_after_init + 1);
}

#[test]
fn greet_times_out_strictly_after_duration() {
    let mut rig = Rig::new();
    let mut ui = rig.boot();
    let start = rig.now;

    ui.update(&mut rig.ctx(), start + GREET_DURATION_MS, PressKind::None, Direction::None);
    assert_eq!(ui.screen_id(), ScreenId::Greet);

    ui.update(&mut rig.ctx(), start + GREET_DURATION_MS + 1, PressKind::None, Direction::None);
    assert_eq!(ui.screen_id(), ScreenId::MainMenu);
    assert_eq!(menu_pos(&ui), 0);
    assert!(ui.state().entry);
    assert_eq!(ui.state().timestamp, start + GREET_DURATION_MS + 1);
}

#[test]
fn timed_transition_survives_clock_wrap() {
    let mut rig = Rig::new();
    rig.now = u32::MAX - 1_000;
    let mut ui = rig.boot();
    rig.idle(&mut ui);

    rig.wait(&mut ui, 2_000);
    assert_eq!(ui.screen_id(), ScreenId::Greet);

    rig.wait(&mut ui, GREET_DURATION_MS);
    assert_eq!(ui.screen_id(), ScreenId::MainMenu);
}

// ═══════════════════════════════════════════════════════════════════════════
// Main Menu
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn main_menu_renders_header_and_first_entry() {
    let mut rig = Rig::new();
    let _ui = rig.main_menu();
    assert_eq!(rig.display.row(0).as_str(), "MAIN MENU");
    assert_eq!(rig.display.row(1).as_str(), ">Start Game");
}

#[test]
fn main_menu_navigation_clamps() {
    let mut rig = Rig::new();
    let mut ui = rig.main_menu();

    rig.go(&mut ui, Direction::Down);
    assert_eq!(menu_pos(&ui), 0);

    rig.go(&mut ui, Direction::Up);
    assert_eq!(menu_pos(&ui), 1);
    assert_eq!(rig.display.row(1).as_str(), ">Settings");

    for _ in 0..10 {
        rig.go(&mut ui, Direction::Up);
    }
    assert_eq!(menu_pos(&ui), MainMenuItem::ALL.len() - 1);
    assert_eq!(rig.display.row(1).as_str(), ">About");
}

#[test]
fn main_menu_pos_stays_in_range_for_any_sequence() {
    let mut rig = Rig::new();
    let mut ui = rig.main_menu();
    let dirs = [Direction::Up, Direction::Down, Direction::None];

    let mut seed: u32 = 99;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        rig.go(&mut ui, dirs[(seed >> 24) as usize % dirs.len()]);
        assert!(menu_pos(&ui) < MainMenuItem::ALL.len());
    }
}

#[test]
fn start_game_seeds_round() {
    let mut rig = Rig::new();
    let mut ui = rig.main_menu();
    rig.go(&mut ui, Direction::Right);

    assert_eq!(ui.screen_id(), ScreenId::Game);
    assert!(ui.state().entry);
    let game = game_params(&ui);
    assert_eq!(game.player, GridPos::ORIGIN);
    assert_eq!(game.food, GridPos::ORIGIN);
    assert_eq!(game.score, 0);
}

#[test]
fn short_press_selects_like_right() {
    let mut rig = Rig::new();
    let mut ui = rig.main_menu();
    rig.go(&mut ui, Direction::Up);
    rig.go(&mut ui, Direction::Up);
    rig.step(&mut ui, PressKind::Short, Direction::None);
    assert_eq!(ui.screen_id(), ScreenId::About);
}

#[test]
fn menu_destinations_table() {
    assert_eq!(MainMenuItem::StartGame.destination().id(), ScreenId::Game);
    assert_eq!(MainMenuItem::Settings.destination().id(), ScreenId::Settings);
    assert_eq!(MainMenuItem::About.destination().id(), ScreenId::About);
}

// ═══════════════════════════════════════════════════════════════════════════
// Game
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn game_entry_moves_seeded_food_off_player() {
    let mut rig = Rig::with_random(&[0, 0, 3, 4]);
    let ui = rig.game();
    let game = game_params(&ui);

    assert_eq!(game.score, 0);
    assert_eq!(game.food, GridPos::new(3, 4));
    assert!(rig.matrix.is_lit(game.player));
    assert!(rig.matrix.is_lit(game.food));
    assert_eq!(rig.display.row(0).as_str(), "PLAYING");
    assert_eq!(rig.display.row(1).as_str(), "0");
}

#[test]
fn player_moves_along_mapped_axes() {
    let mut rig = Rig::with_random(&[7, 7]);
    let mut ui = rig.game();

    rig.go(&mut ui, Direction::Up);
    assert_eq!(game_params(&ui).player, GridPos::new(0, 1));
    rig.go(&mut ui, Direction::Left);
    assert_eq!(game_params(&ui).player, GridPos::new(1, 1));
    rig.go(&mut ui, Direction::Right);
    assert_eq!(game_params(&ui).player, GridPos::new(0, 1));
    rig.go(&mut ui, Direction::Down);
    assert_eq!(game_params(&ui).player, GridPos::ORIGIN);

    // Only the player and the food are lit.
    assert!(rig.matrix.is_lit(GridPos::ORIGIN));
    assert!(!rig.matrix.is_lit(GridPos::new(0, 1)));
    assert_eq!(rig.matrix.lit_count(), 2);
}

#[test]
fn eating_food_scores_and_respawns() {
    // Food lands at (1,0), then respawn draws the player's cell once before a free one.
    let mut rig = Rig::with_random(&[1, 0, 1, 0, 5, 6]);
    let mut ui = rig.game();
    let random_calls = rig.random.calls;

    rig.go(&mut ui, Direction::Left);
    let game = game_params(&ui);
    assert_eq!(game.player, GridPos::new(1, 0));
    assert_eq!(game.score, 1);
    assert_eq!(game.food, GridPos::new(5, 6));
    assert_eq!(rig.random.calls, random_calls + 4);
    assert_ne!(game.food, game.player);
    assert!(rig.matrix.is_lit(game.food));
    assert!(rig.matrix.is_lit(game.player));
    assert_eq!(rig.display.row(1).as_str(), "1");
}

#[test]
fn leaving_board_ends_round_with_score() {
    let mut rig = Rig::with_random(&[1, 0]);
    let mut ui = rig.game();
    rig.go(&mut ui, Direction::Left); // eat at (1,0)
    let score = game_params(&ui).score;
    assert_eq!(score, 1);

    rig.go(&mut ui, Direction::Down); // y = -1
    assert_eq!(ui.screen_id(), ScreenId::GameOver);
    match ui.state().screen {
        Screen::GameOver { score: final_score } => assert_eq!(final_score, score),
        _ => unreachable!(),
    }
    assert_eq!(rig.matrix.lit_count(), 0);

    rig.idle(&mut ui);
    assert_eq!(rig.display.row(0).as_str(), "GAME OVER");
    assert_eq!(rig.display.row(1).as_str(), "SCORE: 1");
}

#[test]
fn player_stays_on_board_while_playing() {
    let dirs = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::None,
    ];
    let mut seed: u32 = 4242;

    for _round in 0..20 {
        let mut rig = Rig::new();
        let mut ui = rig.game();
        let mut last_score = 0;

        for _ in 0..200 {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            rig.go(&mut ui, dirs[(seed >> 24) as usize % dirs.len()]);

            match ui.state().screen {
                Screen::Game(game) => {
                    assert!(game.player.on_board());
                    assert_ne!(game.food, game.player);
                    last_score = game.score;
                }
                Screen::GameOver { score } => {
                    assert_eq!(score, last_score);
                    break;
                }
                other => panic!("unexpected {:?}", other.id()),
            }
        }
    }
}

#[test]
fn game_over_returns_to_menu() {
    let mut rig = Rig::new();
    let mut ui = rig.game();
    rig.go(&mut ui, Direction::Right); // x = -1
    assert_eq!(ui.screen_id(), ScreenId::GameOver);

    rig.idle(&mut ui);
    rig.wait(&mut ui, GAME_OVER_DURATION_MS - 100);
    assert_eq!(ui.screen_id(), ScreenId::GameOver);
    rig.wait(&mut ui, 200);
    assert_eq!(ui.screen_id(), ScreenId::MainMenu);
    assert_eq!(menu_pos(&ui), 0);
}

#[test]
fn place_food_rejects_player_cell() {
    let mut random = FakeRandom::new(&[2, 2, 2, 2, 2, 3]);
    let food = game::place_food(&mut random, GridPos::new(2, 2));
    assert_eq!(food, GridPos::new(2, 3));
    assert_eq!(random.calls, 6);
}

#[test]
fn grid_bounds() {
    assert!(GridPos::new(0, 0).on_board());
    assert!(GridPos::new(7, 7).on_board());
    assert!(!GridPos::new(-1, 0).on_board());
    assert!(!GridPos::new(0, 8).on_board());
}

// ═══════════════════════════════════════════════════════════════════════════
// Settings & Slider
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn settings_entry_writes_through_current_values() {
    let mut rig = Rig::new();
    rig.storage.bytes = [100, 150];
    let ui = rig.settings();

    assert_eq!(rig.storage.writes, SETTINGS_LEN);
    assert_eq!(rig.storage.bytes, [100, 150]);
    assert_eq!(rig.display.row(0).as_str(), "Settings");
    assert_eq!(rig.display.row(1).as_str(), ">Contrast");
    assert_eq!(menu_pos(&ui), 0);
}

#[test]
fn settings_navigation_clamps() {
    let mut rig = Rig::new();
    let mut ui = rig.settings();

    rig.go(&mut ui, Direction::Down);
    assert_eq!(menu_pos(&ui), 0);
    rig.go(&mut ui, Direction::Up);
    rig.go(&mut ui, Direction::Up);
    assert_eq!(menu_pos(&ui), 1);
    assert_eq!(rig.display.row(1).as_str(), ">Brightness");
}

#[test]
fn settings_left_returns_to_main_menu_start() {
    let mut rig = Rig::new();
    let mut ui = rig.settings();
    rig.go(&mut ui, Direction::Up);
    rig.go(&mut ui, Direction::Left);
    assert_eq!(ui.screen_id(), ScreenId::MainMenu);
    assert_eq!(menu_pos(&ui), 0);
}

#[test]
fn settings_right_opens_bound_slider() {
    let mut rig = Rig::new();
    let mut ui = rig.settings();
    rig.go(&mut ui, Direction::Up);
    rig.go(&mut ui, Direction::Right);

    match ui.state().screen {
        Screen::Slider(params) => {
            assert_eq!(params.setting, Setting::Brightness);
            assert_eq!(params.min, 0);
            assert_eq!(params.max, 255);
            assert_eq!(params.step, SLIDER_STEP);
        }
        other => panic!("expected slider, got {:?}", other.id()),
    }
}

#[test]
fn slider_adjusts_value_and_calls_back() {
    let mut rig = Rig::new();
    let mut ui = rig.settings();
    rig.go(&mut ui, Direction::Right); // contrast slider
    rig.idle(&mut ui);
    assert_eq!(rig.display.row(0).as_str(), "100");
    let changes = rig.dimmer.changes.len();

    rig.go(&mut ui, Direction::Up);
    assert_eq!(ui.settings().contrast, 100 - SLIDER_STEP);
    assert_eq!(rig.display.row(0).as_str(), "90");
    assert_eq!(rig.dimmer.changes.len(), changes + 1);
    assert_eq!(rig.dimmer.level(CONTRAST_PIN), Some(90));

    rig.go(&mut ui, Direction::Down);
    rig.go(&mut ui, Direction::Down);
    assert_eq!(ui.settings().contrast, 110);
    assert_eq!(rig.display.row(0).as_str(), "110");
    assert_eq!(rig.dimmer.changes.len(), changes + 3);
}

#[test]
fn slider_clamps_without_callback() {
    let mut rig = Rig::new();
    rig.storage.bytes = [100, 250];
    let mut ui = rig.settings();
    rig.go(&mut ui, Direction::Up);
    rig.go(&mut ui, Direction::Right); // brightness slider
    rig.idle(&mut ui);
    let changes = rig.dimmer.changes.len();

    rig.go(&mut ui, Direction::Down);
    assert_eq!(ui.settings().brightness, 255);
    assert_eq!(rig.dimmer.changes.len(), changes + 1);

    for _ in 0..5 {
        rig.go(&mut ui, Direction::Down);
    }
    assert_eq!(ui.settings().brightness, 255);
    assert_eq!(rig.dimmer.changes.len(), changes + 1);
    assert_eq!(rig.dimmer.level(BRIGHTNESS_PIN), Some(255));
}

#[test]
fn slider_calls_back_once_per_change() {
    let mut rig = Rig::new();
    let mut ui = rig.settings();
    rig.go(&mut ui, Direction::Right);
    rig.idle(&mut ui);

    let mut seed: u32 = 5;
    for _ in 0..300 {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let dir = if seed & 0x8000_0000 != 0 {
            Direction::Up
        } else {
            Direction::Down
        };
        let previous = ui.settings().contrast;
        let calls_before = rig.dimmer.changes.len();

        rig.go(&mut ui, dir);

        let value = ui.settings().contrast;
        let calls = rig.dimmer.changes.len() - calls_before;
        if value != previous {
            assert_eq!(calls, 1);
            assert_eq!(rig.dimmer.level(CONTRAST_PIN), Some(value));
        } else {
            assert_eq!(calls, 0);
        }
        if rig.dimmer.changes.len() > 32 {
            rig.dimmer.changes.clear();
        }
    }
}

#[test]
fn slider_edit_persists_on_next_settings_entry() {
    let mut rig = Rig::new();
    let mut ui = rig.settings();
    rig.go(&mut ui, Direction::Right);
    rig.go(&mut ui, Direction::Up);
    assert_eq!(rig.storage.bytes, [100, 150]);

    rig.go(&mut ui, Direction::Left);
    assert_eq!(ui.screen_id(), ScreenId::Settings);
    assert_eq!(menu_pos(&ui), 0);
    rig.idle(&mut ui);
    assert_eq!(rig.storage.bytes, [90, 150]);
}

#[test]
fn long_press_backs_out_of_slider() {
    let mut rig = Rig::new();
    let mut ui = rig.settings();
    rig.go(&mut ui, Direction::Right);
    rig.step(&mut ui, PressKind::Long, Direction::None);
    assert_eq!(ui.screen_id(), ScreenId::Settings);
}

// ═══════════════════════════════════════════════════════════════════════════
// About
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn about_shows_credits_then_returns() {
    let mut rig = Rig::new();
    let mut ui = rig.main_menu();
    rig.go(&mut ui, Direction::Up);
    rig.go(&mut ui, Direction::Up);
    rig.go(&mut ui, Direction::Right);
    assert_eq!(ui.screen_id(), ScreenId::About);

    rig.idle(&mut ui);
    assert_eq!(rig.display.row(0).as_str(), "QUASI-SNAKE");

    rig.wait(&mut ui, ABOUT_DURATION_MS);
    assert_eq!(ui.screen_id(), ScreenId::MainMenu);
    assert_eq!(menu_pos(&ui), 0);
}
