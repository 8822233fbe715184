use crate::joystick::Direction;

/// Move selection cursor one item back.
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Move selection cursor one item forward if another item exists.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if selected + 1 < item_count {
        selected + 1
    } else {
        selected
    }
}

/// Menu cursor after a gesture: Up advances, Down goes back, no wraparound.
pub fn navigate(selected: usize, item_count: usize, dir: Direction) -> usize {
    match dir {
        Direction::Up => select_next(selected, item_count),
        Direction::Down => select_prev(selected),
        Direction::None | Direction::Left | Direction::Right => selected,
    }
}

/// Value after a gesture: Up subtracts `step`, Down adds it, clamped to `[min, max]`.
pub fn adjust(value: u8, step: u8, min: u8, max: u8, dir: Direction) -> u8 {
    let stepped = match dir {
        Direction::Up => value.saturating_sub(step),
        Direction::Down => value.saturating_add(step),
        Direction::None | Direction::Left | Direction::Right => return value,
    };
    stepped.clamp(min, max)
}
