//! JSON output mode

use serde::Serialize;

use normband::analysis::SeriesBand;
use normband::series::SeriesTable;

#[derive(Serialize)]
struct JsonReport<'a> {
    categories: &'a [String],
    series: &'a [SeriesBand],
}

/// Print analyzed series as pretty JSON on stdout
pub fn run_json(table: &SeriesTable, bands: &[SeriesBand]) -> Result<(), String> {
    let report = JsonReport {
        categories: &table.categories,
        series: bands,
    };
    let text = serde_json::to_string_pretty(&report)
        .map_err(|e| format!("Failed to serialize report: {}", e))?;
    println!("{}", text);
    Ok(())
}
