//! Text report mode

use normband::analysis::SeriesBand;
use normband::series::SeriesTable;

use crate::output::{
    format_band, print_legend, print_points, print_series_header, print_source_info, print_stats,
    print_stops,
};

/// Print the band report for every analyzed series
pub fn run_report(source: &str, table: &SeriesTable, bands: &[SeriesBand], quiet: bool) {
    if quiet {
        for band in bands {
            println!(
                "[{}] band {} out {}/{}",
                band.id,
                format_band(&band.band),
                band.out_of_range_count(),
                band.statuses.len()
            );
        }
        return;
    }

    let ids: Vec<&str> = bands.iter().map(|b| b.id.as_str()).collect();
    print_source_info(source, table.len(), &ids);

    for band in bands {
        // analyze_series only returns bands for ids present in the table
        let Some(values) = table.series(&band.id) else {
            continue;
        };

        print_series_header(band, values.len());
        print_stats(band);
        println!();
        print_points(&table.categories, values, &band.statuses);
        println!();
        print_stops(&band.gradient);
        println!();
    }

    print_legend();
}
