//! Chart rendering for band visualization

mod band;
mod colors;

pub use band::render_band_chart;

use normband::analysis::{PointStatus, SeriesGradient};

/// One line of the band chart
pub struct SeriesChartData {
    pub id: String,
    pub values: Vec<f64>,
    pub gradient: SeriesGradient,
    pub statuses: Vec<PointStatus>,
}

/// Data for the band line chart
pub struct BandChartData {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<SeriesChartData>,
}

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 2400;
pub(super) const CHART_HEIGHT: u32 = 1200;
