use super::Engine;
use crate::config::MaxRectsHeuristic;
use crate::heuristics::{area_fit, long_side_fit, overlap_1d, short_side_fit, Score};
use crate::model::{Item, Rect};

/// Maximal Rectangles packing (spec §4.3): free space is kept as the set of
/// *maximal* free rectangles (possibly overlapping each other), which lets
/// every placement consider free area a Guillotine split would have cut
/// away.
pub struct MaxRectsEngine {
    width: u32,
    height: u32,
    border: Rect,
    free: Vec<Rect>,
    used: Vec<Rect>,
    heuristic: MaxRectsHeuristic,
    rotation: bool,
}

impl MaxRectsEngine {
    pub fn new(width: u32, height: u32, heuristic: MaxRectsHeuristic, rotation: bool) -> Self {
        let border = Rect::new(0, 0, width, height);
        Self {
            width,
            height,
            border,
            free: vec![border],
            used: Vec::new(),
            heuristic,
            rotation,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn score(&self, fr: &Rect, w: u32, h: u32) -> (i64, i64) {
        match self.heuristic {
            MaxRectsHeuristic::BestArea => (area_fit(fr.w, fr.h, w, h), short_side_fit(fr.w, fr.h, w, h)),
            MaxRectsHeuristic::BestShortSide => {
                (short_side_fit(fr.w, fr.h, w, h), long_side_fit(fr.w, fr.h, w, h))
            }
            MaxRectsHeuristic::BestLongSide => {
                (long_side_fit(fr.w, fr.h, w, h), short_side_fit(fr.w, fr.h, w, h))
            }
            MaxRectsHeuristic::WorstArea => (-area_fit(fr.w, fr.h, w, h), -short_side_fit(fr.w, fr.h, w, h)),
            MaxRectsHeuristic::WorstShortSide => {
                (-short_side_fit(fr.w, fr.h, w, h), -long_side_fit(fr.w, fr.h, w, h))
            }
            MaxRectsHeuristic::WorstLongSide => {
                (-long_side_fit(fr.w, fr.h, w, h), -short_side_fit(fr.w, fr.h, w, h))
            }
            MaxRectsHeuristic::BottomLeft => (fr.y as i64, fr.x as i64),
            MaxRectsHeuristic::ContactPoint => {
                let contact = self.contact_point_score(fr.x, fr.y, w, h);
                (-(contact as i64), area_fit(fr.w, fr.h, w, h))
            }
        }
    }

    fn contact_point_score(&self, x: u32, y: u32, w: u32, h: u32) -> u32 {
        let node = Rect::new(x, y, w, h);
        let mut score = 0u32;
        if node.x == self.border.x {
            score += node.h;
        }
        if node.y == self.border.y {
            score += node.w;
        }
        if node.right() == self.border.right() {
            score += node.h;
        }
        if node.bottom() == self.border.bottom() {
            score += node.w;
        }
        for u in &self.used {
            if node.x == u.right() || u.x == node.right() {
                score += overlap_1d(node.y, node.bottom(), u.y, u.bottom());
            }
            if node.y == u.bottom() || u.y == node.bottom() {
                score += overlap_1d(node.x, node.right(), u.x, u.right());
            }
        }
        score
    }

    fn find_position(&self, w: u32, h: u32) -> Option<(Rect, bool, Score)> {
        let mut best: Option<(Rect, bool, Score)> = None;
        for fr in &self.free {
            if fr.w >= w && fr.h >= h {
                let (p, s) = self.score(fr, w, h);
                let score = Score::new(p, s, fr.y, fr.x);
                if best.as_ref().map_or(true, |b| score < b.2) {
                    best = Some((Rect::new(fr.x, fr.y, w, h), false, score));
                }
            }
            if self.rotation && fr.w >= h && fr.h >= w {
                let (p, s) = self.score(fr, h, w);
                let score = Score::new(p, s, fr.y, fr.x);
                if best.as_ref().map_or(true, |b| score < b.2) {
                    best = Some((Rect::new(fr.x, fr.y, h, w), true, score));
                }
            }
        }
        best
    }

    fn place_rect(&mut self, node: &Rect) {
        let mut new_free: Vec<Rect> = Vec::new();
        for fr in self.free.iter() {
            if !fr.intersects(node) {
                new_free.push(*fr);
                continue;
            }
            let ix1 = fr.x.max(node.x);
            let iy1 = fr.y.max(node.y);
            let ix2 = fr.right().min(node.right());
            let iy2 = fr.bottom().min(node.bottom());

            if iy1 > fr.y {
                new_free.push(Rect::new(fr.x, fr.y, fr.w, iy1 - fr.y));
            }
            if iy2 < fr.bottom() {
                new_free.push(Rect::new(fr.x, iy2, fr.w, fr.bottom() - iy2));
            }
            if ix1 > fr.x {
                let h = iy2.saturating_sub(iy1);
                if h > 0 {
                    new_free.push(Rect::new(fr.x, iy1, ix1 - fr.x, h));
                }
            }
            if ix2 < fr.right() {
                let h = iy2.saturating_sub(iy1);
                if h > 0 {
                    new_free.push(Rect::new(ix2, iy1, fr.right() - ix2, h));
                }
            }
        }
        self.free = new_free;
        self.prune_free_list();
        self.used.push(*node);
    }

    /// Drops every free rectangle dominated by another: the defining
    /// invariant of "maximal" rectangles is that none is redundant.
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
}

impl Engine for MaxRectsEngine {
    fn insert(&mut self, item: &mut Item) -> bool {
        match self.find_position(item.width, item.height) {
            Some((place, rotated, _)) => {
                if rotated {
                    item.rotate();
                }
                self.place_rect(&place);
                item.place(place.x, place.y);
                true
            }
            None => false,
        }
    }

    fn find_best_score(&self, item: &Item) -> Option<Score> {
        self.find_position(item.width, item.height).map(|(_, _, s)| s)
    }
}
