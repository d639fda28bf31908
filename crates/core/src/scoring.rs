//! Scoring module - line bonuses, levels and the gravity curve
//!
//! Scoring follows the classic Nintendo table: a clear of `n` rows is worth
//! `LINE_SCORES[n] * (level + 1)`, and every row fallen while soft drop is held
//! adds one point when the piece locks.

use crate::types::{LINES_PER_LEVEL, LINE_SCORES};

/// Bonus for clearing `lines` rows at once (0, 40, 100, 300, 1200; 0 otherwise).
pub fn line_bonus(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Points awarded when a piece locks.
pub fn lock_points(lines: usize, level: u32, soft_dropped: u32) -> u64 {
    line_bonus(lines) as u64 * (level as u64 + 1) + soft_dropped as u64
}

/// Level reached after clearing `lines` rows in total.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL
}

/// Ticks per row at `level` when no soft drop is held.
///
/// `2000 / (40 + 10 level + level² / 8)`, never below one tick.
pub fn fall_rate(level: u32) -> u32 {
    let level = level as u64;
    let inc = level * level / 8;
    let rate = 2000 / (40 + level * 10 + inc);
    rate.max(1) as u32
}
