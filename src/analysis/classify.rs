//! In-band / out-of-band classification of single values

use serde::Serialize;

use super::{BandPalette, SeriesStats};

/// Whether a value lies within mean ± σ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointStatus {
    InRange,
    OutOfRange,
}

impl PointStatus {
    pub fn is_in_range(self) -> bool {
        self == PointStatus::InRange
    }

    /// Color token used to paint a point with this status
    pub fn color(self, palette: &BandPalette) -> &str {
        match self {
            PointStatus::InRange => &palette.band_color,
            PointStatus::OutOfRange => &palette.tail_color,
        }
    }
}

/// One point to classify against a band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPoint {
    pub value: f64,
    pub mean: f64,
    pub standard_deviation: f64,
}

impl BandPoint {
    pub fn new(value: f64, stats: &SeriesStats) -> Self {
        Self {
            value,
            mean: stats.mean,
            standard_deviation: stats.standard_deviation,
        }
    }

    pub fn classify(&self) -> PointStatus {
        classify(self.value, self.mean, self.standard_deviation)
    }
}

/// Classify `value` against the closed band [mean - σ, mean + σ].
/// Values exactly on an edge are in range.
pub fn classify(value: f64, mean: f64, standard_deviation: f64) -> PointStatus {
    if value > mean + standard_deviation || value < mean - standard_deviation {
        PointStatus::OutOfRange
    } else {
        PointStatus::InRange
    }
}
