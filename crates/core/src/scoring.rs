//! Scoring module - line clear points, levels, and drop speed
//!
//! Classic rules only: no soft/hard drop points, no combos.

use crate::types::{BASE_DROP_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_DROP_MS};

/// Points for clearing `lines` rows in one lock at `level` (1-based).
///
/// A single piece can complete at most four rows, so larger counts are scored
/// as four.
pub fn calculate_score(lines: usize, level: u32) -> u32 {
    let base_score = LINE_SCORES[lines.min(LINE_SCORES.len() - 1)];
    base_score.saturating_mul(level)
}

/// Level for a cumulative line count: every 10 lines is one level, starting at 1
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Automatic drop interval for a level, in milliseconds.
///
/// 1000ms at level 1, 100ms faster per level, never below 50ms.
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(speedup).max(MIN_DROP_MS)
}
