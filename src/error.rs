use thiserror::Error;

/// Errors raised by [`crate::BinManager`] and its configuration.
///
/// `No-fit` (an engine declining a placement) is *not* an error: it is a
/// boolean the manager consumes internally to try the next bin. See the
/// `insert`/`find_best_score` methods on [`crate::packer::Engine`].
#[derive(Debug, Error)]
pub enum BinPackError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("invalid dimensions: width and height must be greater than 0 (got {width}x{height})")]
    InvalidDimensions { width: u32, height: u32 },

    #[error(
        "item ({width}x{height}) does not fit a {bin_width}x{bin_height} bin in any allowed orientation"
    )]
    ItemTooLarge {
        width: u32,
        height: u32,
        bin_width: u32,
        bin_height: u32,
    },

    #[error("nothing to pack: item list is empty")]
    Empty,
}

pub type Result<T> = std::result::Result<T, BinPackError>;
