use colored::*;

use normband::analysis::{PointStatus, RangeBand, SeriesBand, SeriesGradient};

/// Width of the category column in point tables
const NAME_WIDTH: usize = 12;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn print_separator(width: usize) {
    println!("  {}", "-".repeat(width));
}

pub(crate) fn print_source_info(source: &str, records: usize, series_ids: &[&str]) {
    println!("Source: {}", source);
    println!("Records: {}, Series: {}", records, series_ids.join(", "));
    println!();
}

pub(crate) fn print_series_header(band: &SeriesBand, points: usize) {
    let label = format!("[{}]", band.id);
    let out = band.out_of_range_count();
    let summary = format!("{} points, {} out of band", points, out);
    if out > 0 {
        println!("{} {}", style_label(&label), summary.red());
    } else {
        println!("{} {}", style_label(&label), summary.green());
    }
}

pub(crate) fn print_stats(band: &SeriesBand) {
    let stats = &band.stats;
    println!("  Mean     {:>12.2}", stats.mean);
    println!("  Std dev  {:>12.2}", stats.standard_deviation);
    println!("  Min      {:>12.2}", stats.min);
    println!("  Max      {:>12.2}", stats.max);
    println!("  Band     {:>12.2} .. {:.2}", stats.band_low(), stats.band_high());
    print_percent_row("Above", band.band.above_percent, band.raw_band.above_percent);
    print_percent_row("Below", band.band.below_percent, band.raw_band.below_percent);
}

fn print_percent_row(label: &str, painted: f64, raw: f64) {
    if painted == raw {
        println!("  {:<8} {:>11.2}%", label, painted);
    } else {
        let note = format!("(clamped from {:.2}%)", raw);
        println!("  {:<8} {:>11.2}% {}", label, painted, note.dimmed());
    }
}

pub(crate) fn print_points(categories: &[String], values: &[f64], statuses: &[PointStatus]) {
    println!(
        "  {:<width$} {:>12}  STATUS",
        "NAME",
        "VALUE",
        width = NAME_WIDTH
    );
    print_separator(NAME_WIDTH + 21);
    for ((name, value), status) in categories.iter().zip(values).zip(statuses) {
        print!("  {:<width$} {:>12.2}  ", name, value, width = NAME_WIDTH);
        match status {
            PointStatus::InRange => println!("{}", "in".green()),
            PointStatus::OutOfRange => println!("{}", "OUT".red().bold()),
        }
    }
}

pub(crate) fn print_stops(gradient: &SeriesGradient) {
    let stops: Vec<String> = gradient
        .stops
        .iter()
        .map(|s| format!("{:.1}% {}", s.offset_percent, s.color))
        .collect();
    println!("  Stops: {}", stops.join(" | "));
}

pub(crate) fn format_band(band: &RangeBand) -> String {
    format!("{:.1}%..{:.1}%", band.upper_offset(), band.lower_offset())
}

pub(crate) fn print_legend() {
    println!("Band: mean ± one population standard deviation");
    println!("Above: distance from the maximum down to the band's upper edge (% of range)");
    println!("Below: distance from the minimum up to the band's lower edge (% of range)");
    println!("Stops: gradient offsets, 0% at the maximum and 100% at the minimum");
}
