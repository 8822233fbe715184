//! Grid game on the LED matrix.
//!
//! The player is a single lit cell moved one step per gesture. Stepping
//! onto the food scores a point and respawns the food elsewhere; stepping
//! off the board ends the round.
//!
//! Axis mapping (matrix row = y, column = x):
//! ```text
//! Up    → y + 1
//! Down  → y - 1
//! Left  → x + 1
//! Right → x - 1
//! ```

use super::{Screen, Tick};
use crate::config::{MATRIX_INDEX, MATRIX_SIZE};
use crate::hal::{Context, PixelMatrix, Random};
use crate::joystick::Direction;

/// Cell on the game board. Valid cells are `0..MATRIX_SIZE` on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridPos {
    pub x: i8,
    pub y: i8,
}

impl GridPos {
    pub const ORIGIN: GridPos = GridPos::new(0, 0);

    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub fn on_board(self) -> bool {
        let size = MATRIX_SIZE as i8;
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }

    /// Neighbouring cell in `dir`; may be off the board.
    pub fn step(self, dir: Direction) -> Self {
        match dir {
            Direction::None => self,
            Direction::Up => Self::new(self.x, self.y + 1),
            Direction::Down => Self::new(self.x, self.y - 1),
            Direction::Left => Self::new(self.x + 1, self.y),
            Direction::Right => Self::new(self.x - 1, self.y),
        }
    }
}

/// State of one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameParams {
    pub player: GridPos,
    pub food: GridPos,
    pub score: u16,
}

impl GameParams {
    /// Payload the main menu seeds a new round with.
    ///
    /// The food starts on the player's cell; the first tick moves it.
    pub const fn new_round() -> Self {
        Self {
            player: GridPos::ORIGIN,
            food: GridPos::ORIGIN,
            score: 0,
        }
    }
}

/// Pick a food cell different from `player` (rejection sampling).
pub fn place_food(random: &mut dyn Random, player: GridPos) -> GridPos {
    let bound = u32::from(MATRIX_SIZE);
    loop {
        let candidate = GridPos::new(random.next(bound) as i8, random.next(bound) as i8);
        if candidate != player {
            debug!("game: food at ({}, {})", candidate.x, candidate.y);
            return candidate;
        }
    }
}

fn light(matrix: &mut dyn PixelMatrix, pos: GridPos, on: bool) {
    matrix.set_pixel(MATRIX_INDEX, pos.y as u8, pos.x as u8, on);
}

fn draw_score(ctx: &mut Context<'_>, score: u16) {
    ctx.display.set_cursor(0, 1);
    ctx.display.print_int(i32::from(score));
    ctx.display.print("  ");
}

pub(crate) fn update(ctx: &mut Context<'_>, tick: Tick, game: &mut GameParams) -> Option<Screen> {
    if tick.entry {
        ctx.display.clear();
        ctx.display.print("PLAYING");
        draw_score(ctx, game.score);

        light(ctx.matrix, game.player, true);
        if game.food == game.player {
            game.food = place_food(ctx.random, game.player);
        }
        light(ctx.matrix, game.food, true);
    }

    let next = game.player.step(tick.dir);
    if next == game.player {
        return None;
    }

    if !next.on_board() {
        ctx.matrix.clear_all(MATRIX_INDEX);
        info!("game: over with score {}", game.score);
        return Some(Screen::GameOver { score: game.score });
    }

    light(ctx.matrix, game.player, false);
    light(ctx.matrix, next, true);
    game.player = next;

    if game.player == game.food {
        game.score = game.score.saturating_add(1);
        draw_score(ctx, game.score);

        game.food = place_food(ctx.random, game.player);
        light(ctx.matrix, game.food, true);
    }

    None
}
