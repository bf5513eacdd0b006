use super::Engine;
use crate::config::{GuillotineChoice, GuillotineSplit};
use crate::heuristics::{rect_choice_score, Score};
use crate::model::{Item, Rect};

/// Guillotine packing (spec §4.2): every placement slices its free
/// rectangle into at most two new free rectangles along one axis, so free
/// space is always a disjoint set of rectangles with no further
/// bookkeeping needed to keep them that way.
pub struct GuillotineEngine {
    width: u32,
    height: u32,
    free: Vec<Rect>,
    used: Vec<Rect>,
    choice: GuillotineChoice,
    split: GuillotineSplit,
    rotation: bool,
    rectangle_merge: bool,
}

impl GuillotineEngine {
    pub fn new(
        width: u32,
        height: u32,
        choice: GuillotineChoice,
        split: GuillotineSplit,
        rotation: bool,
        rectangle_merge: bool,
    ) -> Self {
        Self {
            width,
            height,
            free: vec![Rect::new(0, 0, width, height)],
            used: Vec::new(),
            choice,
            split,
            rotation,
            rectangle_merge,
        }
    }

    /// Same as `new`, but starts with no free space at all. Used for a
    /// Shelf/Skyline wastemap, which must only ever hold space explicitly
    /// `donate`d to it — seeding it with the full bin would let it accept
    /// placements the owning engine's own free-space bookkeeping (shelves,
    /// skyline segments) knows nothing about.
    pub(crate) fn empty(
        width: u32,
        height: u32,
        choice: GuillotineChoice,
        split: GuillotineSplit,
        rotation: bool,
        rectangle_merge: bool,
    ) -> Self {
        Self {
            width,
            height,
            free: Vec::new(),
            used: Vec::new(),
            choice,
            split,
            rotation,
            rectangle_merge,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn used(&self) -> &[Rect] {
        &self.used
    }

    /// Adds an externally-discovered free rectangle (used by Shelf/Skyline
    /// wastemaps to donate space trapped between placements) and
    /// immediately prunes/merges it into the free list.
    pub fn donate(&mut self, r: Rect) {
        if r.w == 0 || r.h == 0 {
            return;
        }
        self.free.push(r);
        self.prune_free_list();
        if self.rectangle_merge {
            self.merge_free_list();
        }
    }

    fn score_of(&self, fr: &Rect, w: u32, h: u32) -> Score {
        let (primary, secondary) = rect_choice_score(self.choice, fr.w, fr.h, w, h);
        Score::new(primary, secondary, fr.y, fr.x)
    }

    /// Picks the best free rectangle for an item of size `w x h`, trying the
    /// rotated orientation too when allowed. Returns the free-list index,
    /// the placed rect, whether it was rotated, and the winning score.
    fn choose(&self, w: u32, h: u32) -> Option<(usize, Rect, bool, Score)> {
        let mut best: Option<(usize, Rect, bool, Score)> = None;
        for (i, fr) in self.free.iter().enumerate() {
            if fr.w >= w && fr.h >= h {
                let s = self.score_of(fr, w, h);
                if best.as_ref().map_or(true, |b| s < b.3) {
                    best = Some((i, Rect::new(fr.x, fr.y, w, h), false, s));
                }
            }
            if self.rotation && fr.w >= h && fr.h >= w {
                let s = self.score_of(fr, h, w);
                if best.as_ref().map_or(true, |b| s < b.3) {
                    best = Some((i, Rect::new(fr.x, fr.y, h, w), true, s));
                }
            }
        }
        best
    }

    /// Splits a consumed free rectangle into up to two leftover rectangles
    /// along the axis chosen by `self.split`.
    fn split_rect(&self, fr: &Rect, placed: &Rect) -> (Option<Rect>, Option<Rect>) {
        let w_right = fr.right().saturating_sub(placed.right());
        let h_bottom = fr.bottom().saturating_sub(placed.bottom());

        let split_horizontal = match self.split {
            GuillotineSplit::ShorterLeftoverAxis => h_bottom < w_right,
            GuillotineSplit::LongerLeftoverAxis => h_bottom > w_right,
            GuillotineSplit::MinimizeArea => w_right as u64 * fr.h as u64 <= fr.w as u64 * h_bottom as u64,
            GuillotineSplit::MaximizeArea => w_right as u64 * fr.h as u64 >= fr.w as u64 * h_bottom as u64,
            GuillotineSplit::ShorterAxis => fr.h < fr.w,
            GuillotineSplit::LongerAxis => fr.h > fr.w,
        };

        let mut bottom = Rect::new(fr.x, placed.bottom(), 0, fr.h.saturating_sub(placed.h));
        let mut right = Rect::new(placed.right(), fr.y, fr.w.saturating_sub(placed.w), 0);
        if split_horizontal {
            bottom.w = fr.w;
            right.h = placed.h;
        } else {
            bottom.w = placed.w;
            right.h = fr.h;
        }
        let r1 = (bottom.w > 0 && bottom.h > 0).then_some(bottom);
        let r2 = (right.w > 0 && right.h > 0).then_some(right);
        (r1, r2)
    }

    fn place(&mut self, idx: usize, placed: Rect) {
        let fr = self.free.swap_remove(idx);
        let (a, b) = self.split_rect(&fr, &placed);
        if let Some(r) = a {
            self.free.push(r);
        }
        if let Some(r) = b {
            self.free.push(r);
        }
        self.prune_free_list();
        if self.rectangle_merge {
            self.merge_free_list();
        }
        self.used.push(placed);
    }

    /// Drops any free rectangle fully contained in another.
    fn prune_free_list(&mut self) {
        let mut i = 0;
        while i < self.free.len() {
            let a = self.free[i];
            let mut remove_i = false;
            let mut j = i + 1;
            while j < self.free.len() {
                let b = self.free[j];
                if b.contains(&a) {
                    remove_i = true;
                    break;
                }
                if a.contains(&b) {
                    self.free.remove(j);
                    continue;
                }
                j += 1;
            }
            if remove_i {
                self.free.remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Coalesces adjacent free rectangles that share a full edge. Gated on
    /// `rectangle_merge`; when disabled the free list is left fragmented,
    /// matching the source's optional merge pass.
    fn merge_free_list(&mut self) {
        let mut merged = true;
        while merged {
            merged = false;
            'outer: for i in 0..self.free.len() {
                for j in i + 1..self.free.len() {
                    let a = self.free[i];
                    let b = self.free[j];
                    if a.y == b.y && a.h == b.h {
                        if a.right() == b.x {
                            self.free[i] = Rect::new(a.x, a.y, a.w + b.w, a.h);
                            self.free.remove(j);
                            merged = true;
                            break 'outer;
                        } else if b.right() == a.x {
                            self.free[i] = Rect::new(b.x, a.y, a.w + b.w, a.h);
                            self.free.remove(j);
                            merged = true;
                            break 'outer;
                        }
                    }
                    if a.x == b.x && a.w == b.w {
                        if a.bottom() == b.y {
                            self.free[i] = Rect::new(a.x, a.y, a.w, a.h + b.h);
                            self.free.remove(j);
                            merged = true;
                            break 'outer;
                        } else if b.bottom() == a.y {
                            self.free[i] = Rect::new(a.x, b.y, a.w, a.h + b.h);
                            self.free.remove(j);
                            merged = true;
                            break 'outer;
                        }
                    }
                }
            }
        }
    }
}

impl Engine for GuillotineEngine {
    fn insert(&mut self, item: &mut Item) -> bool {
        match self.choose(item.width, item.height) {
            Some((idx, placed, rotated, _)) => {
                if rotated {
                    item.rotate();
                }
                self.place(idx, placed);
                item.place(placed.x, placed.y);
                true
            }
            None => false,
        }
    }

    fn find_best_score(&self, item: &Item) -> Option<Score> {
        self.choose(item.width, item.height).map(|(_, _, _, s)| s)
    }
}
