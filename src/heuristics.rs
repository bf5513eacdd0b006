//! Scoring functions shared across placement engines.
//!
//! Each engine selects a scoring strategy once at construction (a typed
//! enum from [`crate::config`], not a string) and stores it; `score(...)`
//! below is the pure math those enums drive. Smaller [`Score`] is always
//! better — "worst_*" heuristics negate the underlying quantity so the same
//! ordering convention holds everywhere.

use crate::config::GuillotineChoice;

/// A comparable placement score. Fields are compared lexicographically:
/// `primary`, then `secondary`, then `y`, then `x`. The trailing `(y, x)`
/// encodes the tie-break spec mandates ("prefer the candidate with the
/// smallest (y, x) placement"); ties that remain after all four fields are
/// broken by scan order, since every engine keeps its free-space collection
/// in insertion order and only replaces its current best on a strict
/// improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score {
    pub primary: i64,
    pub secondary: i64,
    pub y: u32,
    pub x: u32,
}

impl Score {
    pub fn new(primary: i64, secondary: i64, y: u32, x: u32) -> Self {
        Self {
            primary,
            secondary,
            y,
            x,
        }
    }
}

/// Leftover along each axis if an item `w x h` is placed in a free space
/// `free_w x free_h` (can be negative if it doesn't fit; callers only use
/// this after confirming the item fits).
fn leftover(free_w: u32, free_h: u32, w: u32, h: u32) -> (i64, i64) {
    (free_w as i64 - w as i64, free_h as i64 - h as i64)
}

/// `area - item.area` for a candidate free rectangle.
pub fn area_fit(free_w: u32, free_h: u32, w: u32, h: u32) -> i64 {
    free_w as i64 * free_h as i64 - w as i64 * h as i64
}

/// `min(freeRect.w - item.w, freeRect.h - item.h)`.
pub fn short_side_fit(free_w: u32, free_h: u32, w: u32, h: u32) -> i64 {
    let (lw, lh) = leftover(free_w, free_h, w, h);
    lw.min(lh)
}

/// `max(freeRect.w - item.w, freeRect.h - item.h)`.
pub fn long_side_fit(free_w: u32, free_h: u32, w: u32, h: u32) -> i64 {
    let (lw, lh) = leftover(free_w, free_h, w, h);
    lw.max(lh)
}

/// `(primary, secondary)` pair for the six best/worst heuristics shared by
/// Guillotine and (for its non-contact-point cases) Maximal Rectangles.
pub fn rect_choice_score(choice: GuillotineChoice, free_w: u32, free_h: u32, w: u32, h: u32) -> (i64, i64) {
    let area = area_fit(free_w, free_h, w, h);
    let short = short_side_fit(free_w, free_h, w, h);
    let long = long_side_fit(free_w, free_h, w, h);
    match choice {
        GuillotineChoice::BestArea => (area, short),
        GuillotineChoice::BestShortSide => (short, long),
        GuillotineChoice::BestLongSide => (long, short),
        GuillotineChoice::WorstArea => (-area, -short),
        GuillotineChoice::WorstShortSide => (-short, -long),
        GuillotineChoice::WorstLongSide => (-long, -short),
    }
}

/// Sum of 1D overlap lengths, used by contact-point scoring.
pub fn overlap_1d(a1: u32, a2: u32, b1: u32, b2: u32) -> u32 {
    let start = a1.max(b1);
    let end = a2.min(b2);
    end.saturating_sub(start)
}
