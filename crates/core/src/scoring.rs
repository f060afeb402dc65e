//! Scoring module - classic line-clear points, leveling, and fall speed

use crate::types::{LINE_SCORES, MIN_SPEED_MULTIPLIER, MULTIPLIER_BASE, ROWS_PER_LEVEL};

/// Points for clearing `rows_cleared` rows at once at `level`.
///
/// More than four rows cannot come from a single piece; such input is clamped
/// to the four-row entry.
pub fn calculate_score(level: u32, rows_cleared: usize) -> u32 {
    if rows_cleared == 0 {
        return 0;
    }
    let base = LINE_SCORES[rows_cleared.min(LINE_SCORES.len()) - 1];
    base.saturating_mul(level.saturating_add(1))
}

/// Level management
/// Level starts at 1 and increases every `ROWS_PER_LEVEL` rows cleared
pub fn calculate_level(total_rows: u32) -> u32 {
    1 + total_rows / ROWS_PER_LEVEL
}

/// Ticks per automatic fall step at `level`, floored at `MIN_SPEED_MULTIPLIER`.
pub fn speed_multiplier(level: u32) -> u32 {
    MULTIPLIER_BASE
        .saturating_sub(level)
        .max(MIN_SPEED_MULTIPLIER)
}
