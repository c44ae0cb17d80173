mod chart;
mod mode;
mod output;

use std::path::Path;

use clap::Parser;

use normband::analysis::{BandPalette, DEFAULT_BAND_COLOR, DEFAULT_TAIL_COLOR};
use normband::series::SeriesTable;
use output::{print_error, print_warning};

/// Name shown for the built-in dataset
const SAMPLE_SOURCE: &str = "built-in sample";

#[derive(Parser)]
#[command(
    name = "normband",
    version,
    about = "Mean ± standard deviation bands for numeric series",
    after_help = "Examples:
  normband                                     Built-in sample dataset
  normband data.json                           All numeric fields of data.json
  normband data.json -s uv -s pv               Only the uv and pv series
  normband data.json --json                    Machine-readable output
  normband data.json --image chart.png         Render a line chart
  normband --band-color '#2E7D32' --tail-color '#C62828'   Custom colors

Input is a JSON array of records, e.g.
  [{\"name\": \"Page A\", \"uv\": 4000, \"pv\": 2400}, ...]"
)]
struct Args {
    /// JSON file with an array of records (uses a built-in sample when omitted)
    file: Option<String>,

    /// Series to analyze, repeatable (default: every numeric field)
    #[arg(short, long, value_name = "ID")]
    series: Vec<String>,

    /// Color token for the band (in-band points and gradient section)
    #[arg(long, default_value = DEFAULT_BAND_COLOR, value_name = "COLOR")]
    band_color: String,

    /// Color token for the tails (out-of-band points and gradient sections)
    #[arg(long, default_value = DEFAULT_TAIL_COLOR, value_name = "COLOR")]
    tail_color: String,

    /// Print results as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Output line chart as PNG image (SVG when PATH ends in .svg)
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Validate palette
    if args.band_color.trim().is_empty() || args.tail_color.trim().is_empty() {
        print_error("Color tokens must not be empty");
        std::process::exit(1);
    }

    if args.band_color == args.tail_color {
        print_warning("Band and tail colors are identical, the band will not be visible");
    }

    // Validate image output path
    if let Some(ref path) = args.image
        && let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        print_error(&format!("Directory does not exist: {}", parent.display()));
        std::process::exit(1);
    }

    let (source, table) = match args.file.as_deref() {
        Some(path) => {
            let table = SeriesTable::load(path).unwrap_or_else(|e| {
                print_error(&e);
                std::process::exit(1);
            });
            (path.to_string(), table)
        }
        None => (SAMPLE_SOURCE.to_string(), SeriesTable::sample()),
    };

    // Validate requested series
    let available = table.series_ids();
    let ids: Vec<String> = if args.series.is_empty() {
        available.iter().map(|id| id.to_string()).collect()
    } else {
        if let Some(unknown) = args.series.iter().find(|id| table.series(id).is_none()) {
            print_error(&format!(
                "Unknown series: {} (available: {})",
                unknown,
                available.join(", ")
            ));
            std::process::exit(1);
        }
        args.series.clone()
    };

    let palette = BandPalette {
        tail_color: args.tail_color.clone(),
        band_color: args.band_color.clone(),
    };

    let bands = mode::analyze_series(&table, &ids, &palette);
    if bands.is_empty() {
        print_error("No series could be analyzed");
        std::process::exit(1);
    }

    if args.json {
        if let Err(e) = mode::run_json(&table, &bands) {
            print_error(&e);
            std::process::exit(1);
        }
    } else {
        mode::run_report(&source, &table, &bands, args.quiet);
    }

    // Output chart image if requested
    if let Some(path) = args.image.as_deref() {
        let chart_data = chart::BandChartData {
            title: format!("Normal band: {}", source),
            categories: table.categories.clone(),
            series: bands
                .iter()
                .filter_map(|band| {
                    Some(chart::SeriesChartData {
                        id: band.id.clone(),
                        values: table.series(&band.id)?.to_vec(),
                        gradient: band.gradient.clone(),
                        statuses: band.statuses.clone(),
                    })
                })
                .collect(),
        };

        if let Err(e) = chart::render_band_chart(&chart_data, &palette, path) {
            print_error(&e);
            std::process::exit(1);
        } else {
            eprintln!("Chart saved to: {}", path);
        }
    }
}
