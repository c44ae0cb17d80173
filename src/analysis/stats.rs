//! Series statistics (mean, population standard deviation, extrema)

use serde::Serialize;

use super::BandError;

/// Summary statistics of one series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesStats {
    pub mean: f64,
    /// Population form: squared deviations divided by N, not N - 1
    pub standard_deviation: f64,
    pub min: f64,
    pub max: f64,
}

impl SeriesStats {
    /// Lower edge of the band (mean - σ)
    pub fn band_low(&self) -> f64 {
        self.mean - self.standard_deviation
    }

    /// Upper edge of the band (mean + σ)
    pub fn band_high(&self) -> f64 {
        self.mean + self.standard_deviation
    }
}

/// Compute mean, population standard deviation, min and max in two passes.
///
/// Returns [`BandError::EmptySeries`] for an empty slice and
/// [`BandError::NonFiniteValue`] if any element is NaN or infinite, and
/// [`BandError::Overflow`] if the mean or variance overflows.
pub fn compute_stats(series: &[f64]) -> Result<SeriesStats, BandError> {
    if series.is_empty() {
        return Err(BandError::EmptySeries);
    }

    if let Some((index, &value)) = series.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(BandError::NonFiniteValue { index, value });
    }

    let n = series.len() as f64;
    let mean = series.iter().sum::<f64>() / n;
    if !mean.is_finite() {
        return Err(BandError::Overflow);
    }

    let variance = series.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n;
    if !variance.is_finite() {
        return Err(BandError::Overflow);
    }

    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Rounding can push the mean a few ulps past an extremum for near-constant input
    Ok(SeriesStats {
        mean: mean.clamp(min, max),
        standard_deviation: variance.sqrt(),
        min,
        max,
    })
}
