use crate::input::Direction;

/// Move selection cursor one item back, wrapping to the last item.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected + item_count - 1) % item_count
}

/// Move selection cursor one item forward, wrapping to the first item.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected + 1) % item_count
}

/// Apply one detent to a wrapping menu cursor.
pub fn select(selected: usize, direction: Direction, item_count: usize) -> usize {
    match direction {
        Direction::Left => select_prev(selected, item_count),
        Direction::Right => select_next(selected, item_count),
    }
}
