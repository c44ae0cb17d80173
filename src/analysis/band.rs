//! Full band analysis of one named series

use serde::Serialize;

use super::{
    BandError, BandPalette, BandPoint, PointStatus, RangeBand, SeriesGradient, SeriesStats,
    build_gradient, compute_stats, map_stats,
};

/// Everything derived from one series: statistics, band position,
/// gradient stops and a status for each value (in input order)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesBand {
    pub id: String,
    pub stats: SeriesStats,
    /// Band as computed, possibly outside [0, 100]
    pub raw_band: RangeBand,
    /// Band as painted
    pub band: RangeBand,
    pub gradient: SeriesGradient,
    pub statuses: Vec<PointStatus>,
}

impl SeriesBand {
    pub fn analyze(id: &str, values: &[f64], palette: &BandPalette) -> Result<Self, BandError> {
        let stats = compute_stats(values)?;
        log::debug!(
            "{}: mean={:.4} sd={:.4} min={} max={}",
            id,
            stats.mean,
            stats.standard_deviation,
            stats.min,
            stats.max
        );

        let raw_band = map_stats(&stats)?;
        let band = raw_band.clamped_for(&stats);
        if band != raw_band {
            log::debug!(
                "{}: band clamped from above={:.4}% below={:.4}% to above={:.4}% below={:.4}%",
                id,
                raw_band.above_percent,
                raw_band.below_percent,
                band.above_percent,
                band.below_percent
            );
        }

        let gradient = build_gradient(id, band.above_percent, band.below_percent, palette);

        let statuses = values
            .iter()
            .map(|&value| BandPoint::new(value, &stats).classify())
            .collect();

        Ok(Self {
            id: id.to_string(),
            stats,
            raw_band,
            band,
            gradient,
            statuses,
        })
    }

    pub fn out_of_range_count(&self) -> usize {
        self.statuses.iter().filter(|s| !s.is_in_range()).count()
    }
}
