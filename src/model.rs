use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in integer bin coordinates. `x, y` is the
/// top-left corner; `w, h` are the extents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Exclusive right edge (`x + w`).
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Exclusive bottom edge (`y + h`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// True if `other` lies entirely inside `self`, inclusive lower bound,
    /// exclusive upper bound.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// True if `self` and `other` share any interior area (open interiors).
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.x >= other.right()
            || other.x >= self.right()
            || self.y >= other.bottom()
            || other.y >= self.bottom())
    }

    /// Point-in-rect test, inclusive lower bound, exclusive upper bound.
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// A free rectangle tracked by Guillotine and by wastemaps. Same shape as
/// [`Rect`]; the alias documents the role at call sites.
pub type FreeRectangle = Rect;

/// A rectangular item to place. `width`/`height` are the item's current
/// (possibly rotated) extents; `x`/`y` are `None` until the item is placed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub width: u32,
    pub height: u32,
    pub x: Option<u32>,
    pub y: Option<u32>,
    pub rotated: bool,
}

impl Item {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            x: None,
            y: None,
            rotated: false,
        }
    }

    /// Swap width/height and toggle the rotated flag. Idempotent in pairs:
    /// `rotate(); rotate();` restores width, height, and flag.
    pub fn rotate(&mut self) {
        std::mem::swap(&mut self.width, &mut self.height);
        self.rotated = !self.rotated;
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_placed(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }

    pub(crate) fn place(&mut self, x: u32, y: u32) {
        self.x = Some(x);
        self.y = Some(y);
    }

    /// The placed rectangle, if this item has been placed.
    pub fn placement(&self) -> Option<Rect> {
        Some(Rect::new(self.x?, self.y?, self.width, self.height))
    }
}

/// A horizontal segment of the skyline's upper envelope. Segments are kept
/// sorted by `x` and partition `[0, bin_width)` with no gap or overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkylineSegment {
    pub x: u32,
    pub y: u32,
    pub width: u32,
}

/// Summary statistics for one bin's current occupancy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BinStats {
    pub width: u32,
    pub height: u32,
    pub area: u64,
    pub free_area: u64,
    pub efficiency: f64,
    pub item_count: usize,
}
