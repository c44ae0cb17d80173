//! Gradient stops painting the band and its tails

use serde::Serialize;

use super::RangeBand;

pub const DEFAULT_TAIL_COLOR: &str = "red";
pub const DEFAULT_BAND_COLOR: &str = "green";

/// Color tokens for out-of-band (tail) and in-band regions.
/// Tokens are passed through untouched, any CSS color works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandPalette {
    pub tail_color: String,
    pub band_color: String,
}

impl Default for BandPalette {
    fn default() -> Self {
        Self {
            tail_color: DEFAULT_TAIL_COLOR.to_string(),
            band_color: DEFAULT_BAND_COLOR.to_string(),
        }
    }
}

/// One (position, color) pair. 0% is the series maximum, 100% the minimum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset_percent: f64,
    pub color: String,
}

impl GradientStop {
    fn new(offset_percent: f64, color: &str) -> Self {
        Self {
            offset_percent,
            color: color.to_string(),
        }
    }

    /// Offset as a 0-1 fraction
    pub fn offset_fraction(&self) -> f64 {
        self.offset_percent / 100.0
    }
}

/// Stops for one series, tagged with the series id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesGradient {
    pub id: String,
    pub stops: Vec<GradientStop>,
}

impl SeriesGradient {
    pub fn is_monotonic(&self) -> bool {
        self.stops
            .windows(2)
            .all(|pair| pair[0].offset_percent <= pair[1].offset_percent)
    }
}

/// Build the six stops of a two-color band gradient:
///
/// ```text
/// 0%           tail
/// above%       tail | band
/// (100-below)% band | tail
/// 100%         tail
/// ```
///
/// Percentages are clamped and order-corrected first (see
/// [`RangeBand::clamped`]), so the returned offsets never decrease.
pub fn build_gradient(
    id: &str,
    above_percent: f64,
    below_percent: f64,
    palette: &BandPalette,
) -> SeriesGradient {
    let band = RangeBand {
        above_percent,
        below_percent,
    }
    .clamped();

    let upper = band.upper_offset();
    let lower = band.lower_offset();
    let tail = palette.tail_color.as_str();
    let inner = palette.band_color.as_str();

    SeriesGradient {
        id: id.to_string(),
        stops: vec![
            GradientStop::new(0.0, tail),
            GradientStop::new(upper, tail),
            GradientStop::new(upper, inner),
            GradientStop::new(lower, inner),
            GradientStop::new(lower, tail),
            GradientStop::new(100.0, tail),
        ],
    }
}
