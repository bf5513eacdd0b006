//! Placement engines. Each engine owns one bin's free-space bookkeeping and
//! implements [`Engine`]; [`crate::manager::BinManager`] drives a `Vec` of
//! boxed engines without knowing which concrete kind it holds.

pub mod guillotine;
pub mod maxrects;
pub mod shelf;
pub mod skyline;

use crate::heuristics::Score;
use crate::model::Item;

/// A single bin's placement strategy.
///
/// `insert` attempts to place `item` (trying rotation itself if the manager's
/// config allows it) and reports success; a `false` return is a plain no-fit,
/// not an error. `find_best_score` lets the manager compare this bin against
/// others of the same family under `bin_best_fit` without placing anything.
pub trait Engine {
    fn insert(&mut self, item: &mut Item) -> bool;
    fn find_best_score(&self, item: &Item) -> Option<Score>;
}
