use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{BinPackError, Result};

/// Which placement engine a bin uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmFamily {
    Guillotine,
    MaximalRectangle,
    Shelf,
    Skyline,
}

impl FromStr for AlgorithmFamily {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "guillotine" => Ok(Self::Guillotine),
            "maximal_rectangle" | "maximalrectangle" | "maxrects" => Ok(Self::MaximalRectangle),
            "shelf" => Ok(Self::Shelf),
            "skyline" => Ok(Self::Skyline),
            _ => Err(()),
        }
    }
}

/// How the manager picks among already-open bins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BinSelection {
    BinFirstFit,
    BinBestFit,
}

impl FromStr for BinSelection {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bin_first_fit" | "binfirstfit" => Ok(Self::BinFirstFit),
            "bin_best_fit" | "binbestfit" => Ok(Self::BinBestFit),
            _ => Err(()),
        }
    }
}

/// Guillotine free-rectangle choice heuristics (spec §4.2).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GuillotineChoice {
    BestArea,
    BestShortSide,
    BestLongSide,
    WorstArea,
    WorstShortSide,
    WorstLongSide,
}

impl FromStr for GuillotineChoice {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "best_area" | "baf" => Ok(Self::BestArea),
            "best_shortside" | "bssf" => Ok(Self::BestShortSide),
            "best_longside" | "blsf" => Ok(Self::BestLongSide),
            "worst_area" | "waf" => Ok(Self::WorstArea),
            "worst_shortside" | "wssf" => Ok(Self::WorstShortSide),
            "worst_longside" | "wlsf" => Ok(Self::WorstLongSide),
            _ => Err(()),
        }
    }
}

/// Guillotine split-axis rules (spec §4.2): SAS/LAS choose the axis from
/// the free rectangle's own shorter/longer side; SLAS/LLAS from the
/// leftover (post-placement) side; SDAS/LDAS minimize/maximize the area of
/// one of the two resulting rectangles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GuillotineSplit {
    /// SAS
    ShorterAxis,
    /// LAS
    LongerAxis,
    /// SLAS
    ShorterLeftoverAxis,
    /// LLAS
    LongerLeftoverAxis,
    /// SDAS
    MinimizeArea,
    /// LDAS
    MaximizeArea,
}

impl FromStr for GuillotineSplit {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sas" | "shorteraxis" => Ok(Self::ShorterAxis),
            "las" | "longeraxis" => Ok(Self::LongerAxis),
            "slas" | "shorterleftoveraxis" => Ok(Self::ShorterLeftoverAxis),
            "llas" | "longerleftoveraxis" => Ok(Self::LongerLeftoverAxis),
            "sdas" | "minimizearea" => Ok(Self::MinimizeArea),
            "ldas" | "maximizearea" => Ok(Self::MaximizeArea),
            _ => Err(()),
        }
    }
}

/// Maximal Rectangles heuristics (spec §4.3): the Guillotine six plus
/// `bottom_left` and `contact_point`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MaxRectsHeuristic {
    BestArea,
    BestShortSide,
    BestLongSide,
    WorstArea,
    WorstShortSide,
    WorstLongSide,
    BottomLeft,
    ContactPoint,
}

impl FromStr for MaxRectsHeuristic {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "best_area" | "baf" => Ok(Self::BestArea),
            "best_shortside" | "bssf" => Ok(Self::BestShortSide),
            "best_longside" | "blsf" => Ok(Self::BestLongSide),
            "worst_area" | "waf" => Ok(Self::WorstArea),
            "worst_shortside" | "wssf" => Ok(Self::WorstShortSide),
            "worst_longside" | "wlsf" => Ok(Self::WorstLongSide),
            "bottom_left" | "bl" => Ok(Self::BottomLeft),
            "contact_point" | "cp" => Ok(Self::ContactPoint),
            _ => Err(()),
        }
    }
}

/// Shelf heuristics (spec §4.4).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShelfHeuristic {
    NextFit,
    FirstFit,
    BestWidthFit,
    BestHeightFit,
    BestAreaFit,
    WorstWidthFit,
    WorstHeightFit,
    WorstAreaFit,
}

impl FromStr for ShelfHeuristic {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "next_fit" => Ok(Self::NextFit),
            "first_fit" => Ok(Self::FirstFit),
            "best_width_fit" => Ok(Self::BestWidthFit),
            "best_height_fit" => Ok(Self::BestHeightFit),
            "best_area_fit" => Ok(Self::BestAreaFit),
            "worst_width_fit" => Ok(Self::WorstWidthFit),
            "worst_height_fit" => Ok(Self::WorstHeightFit),
            "worst_area_fit" => Ok(Self::WorstAreaFit),
            _ => Err(()),
        }
    }
}

/// Skyline heuristics (spec §4.5).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkylineHeuristic {
    BottomLeft,
    BestFit,
}

impl FromStr for SkylineHeuristic {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bottom_left" | "bl" => Ok(Self::BottomLeft),
            "best_fit" | "min_waste" | "minwaste" => Ok(Self::BestFit),
            _ => Err(()),
        }
    }
}

/// Item sort order applied before dispatch (spec §4.6). Unknown keys fall
/// back to `DescArea`, matching the source's `BinManager.items_sort`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    AscArea,
    DescArea,
    AscShortSide,
    DescShortSide,
    AscLongSide,
    DescLongSide,
    AscPerimeter,
    DescPerimeter,
    AscDiff,
    DescDiff,
    AscRatio,
    DescRatio,
}

impl FromStr for SortOrder {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASCA" => Ok(Self::AscArea),
            "DESCA" => Ok(Self::DescArea),
            "ASCSS" => Ok(Self::AscShortSide),
            "DESCSS" => Ok(Self::DescShortSide),
            "ASCLS" => Ok(Self::AscLongSide),
            "DESCLS" => Ok(Self::DescLongSide),
            "ASCPERIM" => Ok(Self::AscPerimeter),
            "DESCPERIM" => Ok(Self::DescPerimeter),
            "ASCDIFF" => Ok(Self::AscDiff),
            "DESCDIFF" => Ok(Self::DescDiff),
            "ASCRATIO" => Ok(Self::AscRatio),
            "DESCRATIO" => Ok(Self::DescRatio),
            _ => Err(()),
        }
    }
}

/// Configuration for a [`crate::BinManager`] and the engines it opens.
///
/// Mirrors `greedypacker.BinManager.__init__` (spec's original_source):
/// bin dimensions, the bin-selection and packing algorithms, a shared
/// per-engine heuristic, rotation/merge/wastemap toggles, and item sorting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinManagerOptions {
    pub bin_width: u32,
    pub bin_height: u32,

    pub bin_algo: BinSelection,
    pub pack_algo: AlgorithmFamily,

    pub guillotine_choice: GuillotineChoice,
    pub guillotine_split: GuillotineSplit,
    pub maxrects_heuristic: MaxRectsHeuristic,
    pub shelf_heuristic: ShelfHeuristic,
    pub skyline_heuristic: SkylineHeuristic,

    /// Allow 90° rotation of items that don't fit upright.
    pub rotation: bool,
    /// Guillotine: merge adjacent free rectangles after every split.
    pub rectangle_merge: bool,
    /// Shelf/Skyline: recover trapped space with an embedded Guillotine wastemap.
    pub wastemap: bool,

    pub sorting: bool,
    pub sorting_heuristic: SortOrder,
}

impl Default for BinManagerOptions {
    fn default() -> Self {
        Self {
            bin_width: 8,
            bin_height: 4,
            bin_algo: BinSelection::BinBestFit,
            pack_algo: AlgorithmFamily::Guillotine,
            guillotine_choice: GuillotineChoice::BestArea,
            guillotine_split: GuillotineSplit::ShorterLeftoverAxis,
            maxrects_heuristic: MaxRectsHeuristic::BestArea,
            shelf_heuristic: ShelfHeuristic::NextFit,
            skyline_heuristic: SkylineHeuristic::BottomLeft,
            rotation: true,
            rectangle_merge: true,
            wastemap: true,
            sorting: true,
            sorting_heuristic: SortOrder::DescArea,
        }
    }
}

impl BinManagerOptions {
    pub fn builder() -> BinManagerOptionsBuilder {
        BinManagerOptionsBuilder::new()
    }

    /// Validates the configuration. Non-positive bin dimensions are a fatal
    /// configuration error (spec §7); heuristic/algorithm selection is
    /// already type-checked by construction, so there is nothing further to
    /// reject there, but callers that parsed strings should have used
    /// `FromStr` and propagated its error before reaching this struct.
    pub fn validate(&self) -> Result<()> {
        if self.bin_width == 0 || self.bin_height == 0 {
            return Err(BinPackError::InvalidDimensions {
                width: self.bin_width,
                height: self.bin_height,
            });
        }
        Ok(())
    }
}

/// Fluent builder for [`BinManagerOptions`], modeled on
/// `tex_packer_core::config::PackerConfigBuilder`.
#[derive(Debug, Default, Clone)]
pub struct BinManagerOptionsBuilder {
    opts: BinManagerOptions,
}

impl BinManagerOptionsBuilder {
    pub fn new() -> Self {
        Self {
            opts: BinManagerOptions::default(),
        }
    }

    pub fn bin_size(mut self, width: u32, height: u32) -> Self {
        self.opts.bin_width = width;
        self.opts.bin_height = height;
        self
    }

    pub fn bin_algo(mut self, v: BinSelection) -> Self {
        self.opts.bin_algo = v;
        self
    }

    pub fn pack_algo(mut self, v: AlgorithmFamily) -> Self {
        self.opts.pack_algo = v;
        self
    }

    pub fn guillotine_choice(mut self, v: GuillotineChoice) -> Self {
        self.opts.guillotine_choice = v;
        self
    }

    pub fn guillotine_split(mut self, v: GuillotineSplit) -> Self {
        self.opts.guillotine_split = v;
        self
    }

    pub fn maxrects_heuristic(mut self, v: MaxRectsHeuristic) -> Self {
        self.opts.maxrects_heuristic = v;
        self
    }

    pub fn shelf_heuristic(mut self, v: ShelfHeuristic) -> Self {
        self.opts.shelf_heuristic = v;
        self
    }

    pub fn skyline_heuristic(mut self, v: SkylineHeuristic) -> Self {
        self.opts.skyline_heuristic = v;
        self
    }

    pub fn rotation(mut self, v: bool) -> Self {
        self.opts.rotation = v;
        self
    }

    pub fn rectangle_merge(mut self, v: bool) -> Self {
        self.opts.rectangle_merge = v;
        self
    }

    pub fn wastemap(mut self, v: bool) -> Self {
        self.opts.wastemap = v;
        self
    }

    pub fn sorting(mut self, v: bool) -> Self {
        self.opts.sorting = v;
        self
    }

    pub fn sorting_heuristic(mut self, v: SortOrder) -> Self {
        self.opts.sorting_heuristic = v;
        self
    }

    pub fn build(self) -> BinManagerOptions {
        self.opts
    }
}
