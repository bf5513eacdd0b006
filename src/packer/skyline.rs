use super::guillotine::GuillotineEngine;
use super::Engine;
use crate::config::{GuillotineChoice, GuillotineSplit, SkylineHeuristic};
use crate::heuristics::Score;
use crate::model::{Item, Rect, SkylineSegment};

/// Skyline packing (spec §4.5): free space is the upper envelope of
/// placed items, one horizontal segment per step in the envelope. An
/// optional Guillotine-backed wastemap recovers pockets the envelope
/// leaves behind (e.g. a short item under a taller neighbor).
pub struct SkylineEngine {
    width: u32,
    height: u32,
    segments: Vec<SkylineSegment>,
    heuristic: SkylineHeuristic,
    rotation: bool,
    /// Gates wastemap dispatch. Checked explicitly rather than inferring
    /// from `waste.is_some()`, so a config that disables the wastemap
    /// cannot be silently overridden by field state.
    use_waste_map: bool,
    waste: Option<GuillotineEngine>,
}

impl SkylineEngine {
    pub fn new(
        width: u32,
        height: u32,
        heuristic: SkylineHeuristic,
        rotation: bool,
        use_waste_map: bool,
        waste_choice: GuillotineChoice,
        waste_split: GuillotineSplit,
    ) -> Self {
        Self {
            width,
            height,
            segments: vec![SkylineSegment { x: 0, y: 0, width }],
            heuristic,
            rotation,
            use_waste_map,
            waste: use_waste_map.then(|| {
                GuillotineEngine::empty(width, height, waste_choice, waste_split, rotation, true)
            }),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tests whether `w x h` fits starting at segment `i`, walking right
    /// across subsequent segments as needed. Returns the placement rect at
    /// the tallest segment height spanned.
    fn can_put(&self, mut i: usize, w: u32, h: u32) -> Option<Rect> {
        let mut rect = Rect::new(self.segments[i].x, 0, w, h);
        let mut width_left = rect.w;
        loop {
            rect.y = rect.y.max(self.segments[i].y);
            if rect.right() > self.width || rect.bottom() > self.height {
                return None;
            }
            if self.segments[i].width >= width_left {
                return Some(rect);
            }
            width_left -= self.segments[i].width;
            i += 1;
            if i >= self.segments.len() {
                return None;
            }
        }
    }

    fn wasted_area_for(&self, start: usize, r: &Rect) -> u64 {
        let mut area = 0u64;
        let mut width_left = r.w;
        let mut i = start;
        while width_left > 0 && i < self.segments.len() {
            let seg = self.segments[i];
            let use_w = width_left.min(seg.width);
            if seg.y > r.y {
                area += (seg.y - r.y) as u64 * use_w as u64;
            }
            width_left -= use_w;
            i += 1;
        }
        area
    }

    /// Finds the best skyline placement for `w x h` and (if rotation is
    /// allowed) its rotated form, scored by `self.heuristic`.
    fn find_skyline(&self, w: u32, h: u32) -> Option<(usize, Rect, bool, Score)> {
        let mut best: Option<(usize, Rect, bool, Score)> = None;
        let mut consider = |i: usize, ww: u32, hh: u32, rotated: bool, best: &mut Option<(usize, Rect, bool, Score)>| {
            if let Some(r) = self.can_put(i, ww, hh) {
                let score = match self.heuristic {
                    SkylineHeuristic::BottomLeft => {
                        Score::new(r.bottom() as i64, self.segments[i].width as i64, r.y, r.x)
                    }
                    SkylineHeuristic::BestFit => {
                        let waste = self.wasted_area_for(i, &r);
                        Score::new(waste as i64, r.bottom() as i64, r.y, r.x)
                    }
                };
                if best.as_ref().map_or(true, |b| score < b.3) {
                    *best = Some((i, r, rotated, score));
                }
            }
        };
        for i in 0..self.segments.len() {
            consider(i, w, h, false, &mut best);
            if self.rotation {
                consider(i, h, w, true, &mut best);
            }
        }
        best
    }

    /// Inserts a new segment at the placed rect's top and clips/removes
    /// every following segment it overruns, mirroring the source's
    /// `Skyline.__add_skyline_level`.
    fn split(&mut self, index: usize, rect: &Rect) {
        let new_y = rect.bottom().min(self.height);
        let new_seg = SkylineSegment {
            x: rect.x,
            y: new_y,
            width: rect.w,
        };
        self.segments.insert(index, new_seg);

        let mut i = index + 1;
        while i < self.segments.len() {
            let prev_right = self.segments[i - 1].x + self.segments[i - 1].width;
            let cur = self.segments[i];
            if cur.x >= prev_right {
                break;
            }
            let shrink = prev_right - cur.x;
            if cur.width <= shrink {
                self.segments.remove(i);
            } else {
                self.segments[i].x += shrink;
                self.segments[i].width -= shrink;
                break;
            }
        }
    }

    fn merge(&mut self) {
        let mut i = 1;
        while i < self.segments.len() {
            if self.segments[i - 1].y == self.segments[i].y {
                self.segments[i - 1].width += self.segments[i].width;
                self.segments.remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Donates the vertical gaps a placement leaves under taller
    /// neighboring segments to the wastemap.
    fn add_waste_areas(&mut self, index: usize, rect: &Rect) {
        if !self.use_waste_map {
            return;
        }
        let rect_right = rect.x + rect.w;
        let mut i = index;
        let mut gaps = Vec::new();
        while i < self.segments.len() && self.segments[i].x < rect_right {
            let seg = self.segments[i];
            if seg.x + seg.width <= rect.x {
                break;
            }
            let left = seg.x.max(rect.x);
            let right = (seg.x + seg.width).min(rect_right);
            if seg.y < rect.y && right > left {
                gaps.push(Rect::new(left, seg.y, right - left, rect.y - seg.y));
            }
            i += 1;
        }
        if let Some(wm) = self.waste.as_mut() {
            for g in gaps {
                wm.donate(g);
            }
        }
    }
}

impl Engine for SkylineEngine {
    fn insert(&mut self, item: &mut Item) -> bool {
        if self.use_waste_map {
            if let Some(wm) = self.waste.as_mut() {
                if wm.insert(item) {
                    return true;
                }
            }
        }
        match self.find_skyline(item.width, item.height) {
            Some((i, place, rotated, _)) => {
                if rotated {
                    item.rotate();
                }
                // Donate trapped space while `self.segments` still reflects
                // the pre-placement envelope: `split` below clips or removes
                // exactly the segments this depends on.
                self.add_waste_areas(i, &place);
                self.split(i, &place);
                self.merge();
                item.place(place.x, place.y);
                true
            }
            None => false,
        }
    }

    fn find_best_score(&self, item: &Item) -> Option<Score> {
        if self.use_waste_map {
            if let Some(wm) = &self.waste {
                if let Some(s) = wm.find_best_score(item) {
                    return Some(s);
                }
            }
        }
        self.find_skyline(item.width, item.height).map(|(_, _, _, s)| s)
    }
}
