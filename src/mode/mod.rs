//! CLI mode implementations

mod json;
mod report;

pub use json::run_json;
pub use report::run_report;

use normband::analysis::{BandPalette, SeriesBand};
use normband::series::SeriesTable;

use crate::output::print_error;

/// Analyze each requested series of the table.
///
/// A series that cannot be analyzed (empty, constant, non-finite values) is
/// reported and skipped; the others are still returned.
pub fn analyze_series(
    table: &SeriesTable,
    ids: &[String],
    palette: &BandPalette,
) -> Vec<SeriesBand> {
    ids.iter()
        .filter_map(|id| {
            let values = table.series(id)?;
            match SeriesBand::analyze(id, values, palette) {
                Ok(band) => Some(band),
                Err(e) => {
                    log::warn!("skipping series {}: {:?}", id, e);
                    print_error(&format!("series \"{}\": {}", id, e));
                    None
                }
            }
        })
        .collect()
}
