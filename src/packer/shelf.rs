use super::guillotine::GuillotineEngine;
use super::Engine;
use crate::config::{GuillotineChoice, GuillotineSplit, ShelfHeuristic};
use crate::heuristics::Score;
use crate::model::{Item, Rect};

struct Shelf {
    y: u32,
    height: u32,
    used_width: u32,
    bin_width: u32,
}

impl Shelf {
    fn remaining_width(&self) -> u32 {
        self.bin_width - self.used_width
    }
}

/// Shelf packing (spec §4.4): items are placed left-to-right on stacked
/// horizontal bands. Only the topmost shelf can grow taller than its first
/// item; once a new shelf opens, the strip above the previous shelf's
/// tallest item is dead unless a wastemap recovers it.
pub struct ShelfEngine {
    bin_width: u32,
    bin_height: u32,
    shelves: Vec<Shelf>,
    heuristic: ShelfHeuristic,
    rotation: bool,
    waste: Option<GuillotineEngine>,
}

impl ShelfEngine {
    pub fn new(
        bin_width: u32,
        bin_height: u32,
        heuristic: ShelfHeuristic,
        rotation: bool,
        use_waste_map: bool,
        waste_choice: GuillotineChoice,
        waste_split: GuillotineSplit,
    ) -> Self {
        Self {
            bin_width,
            bin_height,
            shelves: Vec::new(),
            heuristic,
            rotation,
            waste: use_waste_map.then(|| {
                GuillotineEngine::empty(bin_width, bin_height, waste_choice, waste_split, rotation, true)
            }),
        }
    }

    pub fn width(&self) -> u32 {
        self.bin_width
    }

    pub fn height(&self) -> u32 {
        self.bin_height
    }

    /// Bottom edge of the last (topmost) shelf, i.e. where the next shelf
    /// would start. Shelves stack, so this is the last shelf's `y + height`,
    /// not a sum over all shelves.
    fn next_open_y(&self) -> u32 {
        self.shelves.last().map_or(0, |s| s.y + s.height)
    }

    fn can_open_shelf(&self, h: u32) -> bool {
        self.next_open_y() + h <= self.bin_height
    }

    fn score_shelf(&self, idx: usize, w: u32, h: u32) -> Option<Score> {
        let shelf = &self.shelves[idx];
        if shelf.remaining_width() < w {
            return None;
        }
        // Only the last (topmost) shelf may accept an item taller than its
        // current height, growing the shelf; earlier shelves are closed.
        let is_open = idx + 1 == self.shelves.len();
        if h > shelf.height && !is_open {
            return None;
        }
        if is_open && h > shelf.height && self.next_open_y() - shelf.height + h > self.bin_height {
            return None;
        }
        let leftover_w = shelf.remaining_width() as i64 - w as i64;
        let leftover_h = shelf.height.max(h) as i64 - h as i64;
        let primary = match self.heuristic {
            ShelfHeuristic::NextFit => {
                if is_open {
                    0
                } else {
                    return None;
                }
            }
            ShelfHeuristic::FirstFit => idx as i64,
            ShelfHeuristic::BestWidthFit => leftover_w,
            ShelfHeuristic::BestHeightFit => leftover_h,
            ShelfHeuristic::BestAreaFit => leftover_w * shelf.height.max(h) as i64,
            ShelfHeuristic::WorstWidthFit => -leftover_w,
            ShelfHeuristic::WorstHeightFit => -leftover_h,
            ShelfHeuristic::WorstAreaFit => -(leftover_w * shelf.height.max(h) as i64),
        };
        Some(Score::new(primary, leftover_h, shelf.y, shelf.used_width))
    }

    /// Picks the best existing shelf (or signals a new shelf is needed) for
    /// an item `w x h`, trying the rotated form too when allowed.
    fn choose(&self, w: u32, h: u32) -> Option<(usize, u32, u32, bool, Score)> {
        let mut best: Option<(usize, u32, u32, bool, Score)> = None;
        for idx in 0..self.shelves.len() {
            if let Some(s) = self.score_shelf(idx, w, h) {
                if best.as_ref().map_or(true, |b| s < b.4) {
                    best = Some((idx, w, h, false, s));
                }
            }
            if self.rotation && h != w {
                if let Some(s) = self.score_shelf(idx, h, w) {
                    if best.as_ref().map_or(true, |b| s < b.4) {
                        best = Some((idx, h, w, true, s));
                    }
                }
            }
        }
        best
    }

    /// Opens a new shelf above the current last one. The shelf being closed
    /// can never accept another item once a later shelf exists, so its
    /// trailing unused width (from `used_width` to `bin_width`, full shelf
    /// height) is donated to the wastemap before it's lost.
    fn open_shelf(&mut self, h: u32) -> Option<usize> {
        if !self.can_open_shelf(h) {
            return None;
        }
        if let Some(closing) = self.shelves.last() {
            let gap = Rect::new(
                closing.used_width,
                closing.y,
                closing.remaining_width(),
                closing.height,
            );
            if let Some(wm) = self.waste.as_mut() {
                wm.donate(gap);
            }
        }
        let y = self.next_open_y();
        self.shelves.push(Shelf {
            y,
            height: h,
            used_width: 0,
            bin_width: self.bin_width,
        });
        Some(self.shelves.len() - 1)
    }

    fn place(&mut self, idx: usize, w: u32, h: u32) -> Rect {
        let shelf = &mut self.shelves[idx];
        let placed = Rect::new(shelf.used_width, shelf.y, w, h);
        shelf.used_width += w;
        if h > shelf.height {
            shelf.height = h;
        }
        placed
    }

    /// Donates the strip above a placed item (up to the shelf's height) to
    /// the wastemap; called once a shelf can no longer grow, i.e. whenever
    /// anything but the open shelf stops accepting items in this run.
    fn donate_shelf_gap(&mut self, idx: usize, placed: &Rect) {
        let shelf_height = self.shelves[idx].height;
        if placed.h < shelf_height {
            if let Some(wm) = self.waste.as_mut() {
                wm.donate(Rect::new(
                    placed.x,
                    placed.y + placed.h,
                    placed.w,
                    shelf_height - placed.h,
                ));
            }
        }
    }
}

impl Engine for ShelfEngine {
    fn insert(&mut self, item: &mut Item) -> bool {
        if let Some(wm) = self.waste.as_mut() {
            if wm.insert(item) {
                return true;
            }
        }
        if let Some((idx, w, h, rotated, _)) = self.choose(item.width, item.height) {
            if rotated {
                item.rotate();
            }
            let placed = self.place(idx, w, h);
            self.donate_shelf_gap(idx, &placed);
            item.place(placed.x, placed.y);
            return true;
        }
        let (w, h) = (item.width, item.height);
        if self.open_shelf(h).is_some() {
            let idx = self.shelves.len() - 1;
            let placed = self.place(idx, w, h);
            item.place(placed.x, placed.y);
            return true;
        }
        if self.rotation && w != h && self.open_shelf(w).is_some() {
            item.rotate();
            let idx = self.shelves.len() - 1;
            let placed = self.place(idx, h, w);
            item.place(placed.x, placed.y);
            return true;
        }
        false
    }

    fn find_best_score(&self, item: &Item) -> Option<Score> {
        if let Some(wm) = &self.waste {
            if let Some(s) = wm.find_best_score(item) {
                return Some(s);
            }
        }
        if let Some((_, _, _, _, s)) = self.choose(item.width, item.height) {
            return Some(s);
        }
        let fits_upright = self.can_open_shelf(item.height) && item.width <= self.bin_width;
        let fits_rotated =
            self.rotation && self.can_open_shelf(item.width) && item.height <= self.bin_width;
        if fits_upright {
            Some(Score::new(i64::MAX, 0, self.next_open_y(), 0))
        } else if fits_rotated {
            Some(Score::new(i64::MAX, 0, self.next_open_y(), 0))
        } else {
            None
        }
    }
}
