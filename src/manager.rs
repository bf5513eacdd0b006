use tracing::instrument;

use crate::config::{AlgorithmFamily, BinManagerOptions, BinSelection, SortOrder};
use crate::error::{BinPackError, Result};
use crate::model::{BinStats, Item};
use crate::packer::guillotine::GuillotineEngine;
use crate::packer::maxrects::MaxRectsEngine;
use crate::packer::shelf::ShelfEngine;
use crate::packer::skyline::SkylineEngine;
use crate::packer::Engine;

/// One open bin: its placement engine plus the bin's own bookkeeping
/// (dimensions and the items placed into it so far).
pub struct Bin {
    width: u32,
    height: u32,
    engine: Box<dyn Engine>,
    placed: Vec<Item>,
}

impl Bin {
    fn new(width: u32, height: u32, engine: Box<dyn Engine>) -> Self {
        Self {
            width,
            height,
            engine,
            placed: Vec::new(),
        }
    }

    fn insert(&mut self, item: &mut Item) -> bool {
        if self.engine.insert(item) {
            self.placed.push(*item);
            true
        } else {
            false
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.placed
    }

    /// Occupancy summary. Reports the bin's own `width`/`height`, not a
    /// coordinate derived from placed items, since an empty bin still has
    /// a full free area to report.
    pub fn stats(&self) -> BinStats {
        let area = self.width as u64 * self.height as u64;
        let used: u64 = self.placed.iter().map(|i| i.area()).sum();
        let free_area = area.saturating_sub(used);
        let efficiency = if area == 0 { 0.0 } else { used as f64 / area as f64 };
        BinStats {
            width: self.width,
            height: self.height,
            area,
            free_area,
            efficiency,
            item_count: self.placed.len(),
        }
    }
}

/// Orchestrates bin creation, item sorting, and dispatch into one or more
/// [`Bin`]s sharing a single [`BinManagerOptions`] configuration.
pub struct BinManager {
    opts: BinManagerOptions,
    items: Vec<Item>,
    bins: Vec<Bin>,
}

impl BinManager {
    pub fn new(opts: BinManagerOptions) -> Result<Self> {
        opts.validate()?;
        let first = Self::bin_factory(&opts);
        Ok(Self {
            opts,
            items: Vec::new(),
            bins: vec![first],
        })
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Queues items, sorting the whole queue by `opts.sorting_heuristic`
    /// when `opts.sorting` is enabled. Sorting is stable: items whose sort
    /// key ties keep their relative input order.
    pub fn add_items<I: IntoIterator<Item = Item>>(&mut self, items: I) {
        self.items.extend(items);
        if self.opts.sorting {
            self.sort_items();
        }
    }

    fn sort_items(&mut self) {
        let key = |it: &Item| -> f64 {
            let (w, h) = (it.width as f64, it.height as f64);
            match self.opts.sorting_heuristic {
                SortOrder::AscArea | SortOrder::DescArea => w * h,
                SortOrder::AscShortSide | SortOrder::DescShortSide => w.min(h),
                SortOrder::AscLongSide | SortOrder::DescLongSide => w.max(h),
                SortOrder::AscPerimeter | SortOrder::DescPerimeter => 2.0 * w + 2.0 * h,
                SortOrder::AscDiff | SortOrder::DescDiff => (w - h).abs(),
                SortOrder::AscRatio | SortOrder::DescRatio => w / h,
            }
        };
        let descending = matches!(
            self.opts.sorting_heuristic,
            SortOrder::DescArea
                | SortOrder::DescShortSide
                | SortOrder::DescLongSide
                | SortOrder::DescPerimeter
                | SortOrder::DescDiff
                | SortOrder::DescRatio
        );
        // `sort_by` is a stable sort: equal keys preserve input order.
        self.items.sort_by(|a, b| {
            let (ka, kb) = (key(a), key(b));
            let ord = ka.partial_cmp(&kb).unwrap_or(std::cmp::Ordering::Equal);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        });
    }

    fn bin_factory(opts: &BinManagerOptions) -> Bin {
        let (w, h) = (opts.bin_width, opts.bin_height);
        let engine: Box<dyn Engine> = match opts.pack_algo {
            AlgorithmFamily::Guillotine => Box::new(GuillotineEngine::new(
                w,
                h,
                opts.guillotine_choice,
                opts.guillotine_split,
                opts.rotation,
                opts.rectangle_merge,
            )),
            AlgorithmFamily::MaximalRectangle => {
                Box::new(MaxRectsEngine::new(w, h, opts.maxrects_heuristic, opts.rotation))
            }
            AlgorithmFamily::Shelf => Box::new(ShelfEngine::new(
                w,
                h,
                opts.shelf_heuristic,
                opts.rotation,
                opts.wastemap,
                opts.guillotine_choice,
                opts.guillotine_split,
            )),
            AlgorithmFamily::Skyline => Box::new(SkylineEngine::new(
                w,
                h,
                opts.skyline_heuristic,
                opts.rotation,
                opts.wastemap,
                opts.guillotine_choice,
                opts.guillotine_split,
            )),
        };
        Bin::new(w, h, engine)
    }

    fn item_fits_some_bin(&self, item: &Item) -> bool {
        let upright = item.width <= self.opts.bin_width && item.height <= self.opts.bin_height;
        let rotated = self.opts.rotation
            && item.height <= self.opts.bin_width
            && item.width <= self.opts.bin_height;
        upright || rotated
    }

    fn bin_first_fit(&mut self, item: &mut Item) -> Result<()> {
        if !self.item_fits_some_bin(item) {
            return Err(BinPackError::ItemTooLarge {
                width: item.width,
                height: item.height,
                bin_width: self.opts.bin_width,
                bin_height: self.opts.bin_height,
            });
        }
        for bin in self.bins.iter_mut() {
            if bin.insert(item) {
                return Ok(());
            }
        }
        let mut new_bin = Self::bin_factory(&self.opts);
        new_bin.insert(item);
        self.bins.push(new_bin);
        Ok(())
    }

    fn bin_best_fit(&mut self, item: &mut Item) -> Result<()> {
        if !self.item_fits_some_bin(item) {
            return Err(BinPackError::ItemTooLarge {
                width: item.width,
                height: item.height,
                bin_width: self.opts.bin_width,
                bin_height: self.opts.bin_height,
            });
        }

        let mut best_idx = None;
        let mut best_score = None;
        for (i, bin) in self.bins.iter().enumerate() {
            if let Some(s) = bin.engine.find_best_score(item) {
                if best_score.as_ref().map_or(true, |b| &s < b) {
                    best_score = Some(s);
                    best_idx = Some(i);
                }
            }
        }

        if let Some(idx) = best_idx {
            self.bins[idx].insert(item);
        } else {
            let mut new_bin = Self::bin_factory(&self.opts);
            new_bin.insert(item);
            self.bins.push(new_bin);
        }
        Ok(())
    }

    /// Packs every queued item into `self.bins`, opening new bins as
    /// needed. Consumes the item queue.
    #[instrument(skip_all, fields(items = self.items.len(), algo = ?self.opts.pack_algo))]
    pub fn execute(&mut self) -> Result<()> {
        if self.items.is_empty() {
            return Err(BinPackError::Empty);
        }
        let items = std::mem::take(&mut self.items);
        for mut item in items {
            match self.opts.bin_algo {
                BinSelection::BinFirstFit => self.bin_first_fit(&mut item)?,
                BinSelection::BinBestFit => self.bin_best_fit(&mut item)?,
            }
        }
        tracing::debug!(bin_count = self.bins.len(), "packing complete");
        Ok(())
    }
}
