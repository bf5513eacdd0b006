//! Offline 2D rectangle bin packing.
//!
//! - Engines: Guillotine, Maximal Rectangles, Shelf, Skyline (each with an
//!   optional Guillotine-backed wastemap for Shelf/Skyline).
//! - [`BinManager`] sorts a queued item list and dispatches each item to
//!   the configured bin-selection algorithm (`bin_first_fit`/`bin_best_fit`),
//!   opening new bins as needed.
//!
//! ```
//! use binpack_core::prelude::*;
//!
//! let mut mgr = BinManager::new(BinManagerOptions::default()).unwrap();
//! mgr.add_items(vec![Item::new(3, 2), Item::new(2, 2)]);
//! mgr.execute().unwrap();
//! assert_eq!(mgr.bins().len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod heuristics;
pub mod manager;
pub mod model;
pub mod packer;

pub use config::*;
pub use error::*;
pub use manager::{Bin, BinManager};
pub use model::*;

/// Convenience re-exports for common types.
pub mod prelude {
    pub use crate::config::{
        AlgorithmFamily, BinManagerOptions, BinManagerOptionsBuilder, BinSelection,
        GuillotineChoice, GuillotineSplit, MaxRectsHeuristic, ShelfHeuristic, SkylineHeuristic,
        SortOrder,
    };
    pub use crate::error::{BinPackError, Result};
    pub use crate::manager::{Bin, BinManager};
    pub use crate::model::{BinStats, Item, Rect};
}
