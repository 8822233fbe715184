//! Generic numeric editor for one setting.

use super::input_logic::adjust;
use super::{Screen, Tick};
use crate::config::{SETTING_MAX, SETTING_MIN, SLIDER_STEP};
use crate::hal::Context;
use crate::settings::{Setting, Settings};

/// What the slider edits and how.
#[derive(Clone, Copy, Debug)]
pub struct SliderParams {
    /// The setting whose value is edited in place.
    pub setting: Setting,
    pub min: u8,
    pub max: u8,
    pub step: u8,
    /// Called once with the new value after every change.
    pub on_change: fn(&mut Context<'_>, u8),
}

impl SliderParams {
    /// Full-range slider bound to `setting` and its change callback.
    pub const fn for_setting(setting: Setting) -> Self {
        Self {
            setting,
            min: SETTING_MIN,
            max: SETTING_MAX,
            step: SLIDER_STEP,
            on_change: setting.on_change(),
        }
    }
}

fn draw_value(ctx: &mut Context<'_>, value: u8) {
    ctx.display.print_int(i32::from(value));
    ctx.display.print("   ");
}

pub(crate) fn update(
    ctx: &mut Context<'_>,
    tick: Tick,
    params: &SliderParams,
    settings: &mut Settings,
) -> Option<Screen> {
    let value = settings.get(params.setting);

    if tick.entry {
        ctx.display.clear();
        draw_value(ctx, value);
    }

    let new_value = adjust(value, params.step, params.min, params.max, tick.dir);
    if new_value != value {
        settings.set(params.setting, new_value);

        ctx.display.set_cursor(0, 0);
        draw_value(ctx, new_value);

        (params.on_change)(ctx, new_value);
    }

    tick.backs_out().then(|| Screen::Settings { pos: 0 })
}
