//! Main menu and settings list.
//!
//! Both show a header on row 0 and the selected entry on row 1. Labels
//! are padded to the full display width so a shorter label overwrites a
//! longer one without clearing.

use super::input_logic::navigate;
use super::{GameParams, Screen, SliderParams, Tick};
use crate::hal::Context;
use crate::settings::{Setting, Settings, SettingsStore};

/// Entries of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MainMenuItem {
    StartGame,
    Settings,
    About,
}

const MAIN_MENU_LABELS: [&str; 3] = [
    ">Start Game     ",
    ">Settings       ",
    ">About          ",
];

const MAIN_MENU_TARGETS: [Screen; 3] = [
    Screen::Game(GameParams::new_round()),
    Screen::Settings { pos: 0 },
    Screen::About,
];

const SETTINGS_LABELS: [&str; 2] = [">Contrast       ", ">Brightness     "];

impl MainMenuItem {
    pub const ALL: [MainMenuItem; 3] = [
        MainMenuItem::StartGame,
        MainMenuItem::Settings,
        MainMenuItem::About,
    ];

    pub fn label(self) -> &'static str {
        MAIN_MENU_LABELS[self as usize]
    }

    /// Screen entered when this item is selected.
    pub fn destination(self) -> Screen {
        MAIN_MENU_TARGETS[self as usize]
    }
}

/// Menu label for a setting.
pub fn setting_label(setting: Setting) -> &'static str {
    SETTINGS_LABELS[setting as usize]
}

fn draw_entry(ctx: &mut Context<'_>, label: &str) {
    ctx.display.set_cursor(0, 1);
    ctx.display.print(label);
}

pub(crate) fn main_menu(ctx: &mut Context<'_>, tick: Tick, pos: &mut usize) -> Option<Screen> {
    let items = MainMenuItem::ALL;

    if tick.entry {
        ctx.display.clear();
        ctx.display.print("MAIN MENU");
        draw_entry(ctx, items[*pos].label());
    }

    let new_pos = navigate(*pos, items.len(), tick.dir);
    if new_pos != *pos {
        *pos = new_pos;
        draw_entry(ctx, items[*pos].label());
    }

    tick.confirms().then(|| items[*pos].destination())
}

/// Entering this screen writes the current settings through to storage,
/// which is how slider edits get persisted.
pub(crate) fn settings(
    ctx: &mut Context<'_>,
    tick: Tick,
    pos: &mut usize,
    settings: &Settings,
) -> Option<Screen> {
    let items = Setting::ALL;

    if tick.entry {
        ctx.display.clear();
        ctx.display.print("Settings");
        draw_entry(ctx, setting_label(items[*pos]));

        SettingsStore::persist(settings, ctx.storage);
    }

    let new_pos = navigate(*pos, items.len(), tick.dir);
    if new_pos != *pos {
        *pos = new_pos;
        draw_entry(ctx, setting_label(items[*pos]));
    }

    if tick.confirms() {
        return Some(Screen::Slider(SliderParams::for_setting(items[*pos])));
    }
    if tick.backs_out() {
        return Some(Screen::main_menu());
    }
    None
}
