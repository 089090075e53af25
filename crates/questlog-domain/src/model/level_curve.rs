//! Level curve - static progression tables
//!
//! `LEVEL_THRESHOLDS[i]` is the cumulative experience required to reach
//! level index `i`. The table is read-only and must never be reordered:
//! persisted objectives store levels derived from it.

/// Cumulative experience needed for each level index (0-indexed).
pub const LEVEL_THRESHOLDS: [u32; 15] = [
    0, 100, 250, 450, 700, 1000, 1350, 1750, 2200, 2700, 3250, 3850, 4500, 5200, 5950,
];

/// Experience gap reported once a level is past the tabulated curve.
pub const UNTABULATED_LEVEL_GAP: u32 = 1000;

/// Daily time allowance ceiling, in minutes.
pub const MAX_DAILY_MINUTES: u32 = 180;

/// Minutes added to the daily allowance on level up.
pub const LEVEL_UP_MINUTES_BONUS: u32 = 5;

/// Highest level index the curve can produce.
pub const fn max_level() -> u32 {
    (LEVEL_THRESHOLDS.len() - 1) as u32
}
