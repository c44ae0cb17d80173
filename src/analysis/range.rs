//! Mapping of band edges onto the series' value range

use serde::Serialize;

use super::{BandError, SeriesStats};

/// Position of the band edges inside [min, max], in percent.
///
/// Offsets run top-down as in a vertical gradient: 0% is the series maximum
/// and 100% its minimum. `above_percent` is the distance from the top down to
/// mean + σ, `below_percent` the distance from the bottom up to mean - σ.
/// Raw values may fall outside [0, 100] when the band reaches past an
/// extremum; use [`RangeBand::clamped_for`] (or [`RangeBand::clamped`] when
/// the stats are not at hand) before painting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeBand {
    pub above_percent: f64,
    pub below_percent: f64,
}

impl RangeBand {
    /// Offset (0% = max end) where the band starts
    pub fn upper_offset(&self) -> f64 {
        self.above_percent
    }

    /// Offset (0% = max end) where the band ends
    pub fn lower_offset(&self) -> f64 {
        100.0 - self.below_percent
    }

    /// Clamp both percentages into [0, 100] and keep the edges ordered so
    /// that `above_percent <= 100 - below_percent`.
    ///
    /// This loses precision on purpose: the part of the band lying past the
    /// observed min or max has no place in the gradient and is cut off.
    pub fn clamped(&self) -> RangeBand {
        let above = clamp_percent(self.above_percent);
        let below = clamp_percent(self.below_percent);

        // Crossed edges collapse onto their midpoint
        if above > 100.0 - below {
            let mid = (above + (100.0 - below)) / 2.0;
            return RangeBand {
                above_percent: mid,
                below_percent: 100.0 - mid,
            };
        }

        RangeBand {
            above_percent: above,
            below_percent: below,
        }
    }

    /// Like [`RangeBand::clamped`], but first corrects the lower edge when
    /// mean - σ lies under the series minimum.
    ///
    /// `below_percent` is an absolute distance, so an edge under `min` is
    /// mirrored back into the range and would paint in-band values as tail.
    /// The band then reaches the bottom of the range and `below_percent`
    /// becomes 0. Part of the same deliberate precision loss as clamping.
    pub fn clamped_for(&self, stats: &SeriesStats) -> RangeBand {
        let below_percent = if stats.band_low() < stats.min {
            0.0
        } else {
            self.below_percent
        };

        RangeBand {
            above_percent: self.above_percent,
            below_percent,
        }
        .clamped()
    }

    pub fn is_within_bounds(&self) -> bool {
        (0.0..=100.0).contains(&self.above_percent)
            && (0.0..=100.0).contains(&self.below_percent)
            && self.above_percent <= self.lower_offset()
    }
}

fn clamp_percent(pct: f64) -> f64 {
    if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) }
}

/// Locate mean ± σ inside [min, max] as percentages of the range.
///
/// `above_percent = (max - (mean + σ)) * 100 / range` and
/// `below_percent = |min - (mean - σ)| * 100 / range`.
/// Returns [`BandError::DegenerateRange`] when `max == min` and
/// [`BandError::Overflow`] when the range or a percentage is not finite.
pub fn map_range_band(
    min: f64,
    max: f64,
    mean: f64,
    standard_deviation: f64,
) -> Result<RangeBand, BandError> {
    let range = max - min;
    if range == 0.0 {
        return Err(BandError::DegenerateRange { value: max });
    }

    if !range.is_finite() {
        return Err(BandError::Overflow);
    }

    let band = RangeBand {
        above_percent: ((max - (mean + standard_deviation)) * 100.0) / range,
        below_percent: ((min - (mean - standard_deviation)).abs() * 100.0) / range,
    };
    if !band.above_percent.is_finite() || !band.below_percent.is_finite() {
        return Err(BandError::Overflow);
    }

    Ok(band)
}

/// Convenience over [`map_range_band`] for precomputed stats
pub fn map_stats(stats: &SeriesStats) -> Result<RangeBand, BandError> {
    map_range_band(stats.min, stats.max, stats.mean, stats.standard_deviation)
}
