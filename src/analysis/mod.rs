//! Normal-band analysis: statistics, band position, classification, gradient

mod band;
mod classify;
mod error;
mod gradient;
mod range;
mod stats;

pub use band::SeriesBand;
pub use classify::{BandPoint, PointStatus, classify};
pub use error::BandError;
pub use gradient::{
    BandPalette, DEFAULT_BAND_COLOR, DEFAULT_TAIL_COLOR, GradientStop, SeriesGradient,
    build_gradient,
};
pub use range::{RangeBand, map_range_band, map_stats};
pub use stats::{SeriesStats, compute_stats};
