//! Line chart with band-gradient strokes and status-colored markers

use std::path::Path;

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisType, Color, ColorStop, ItemStyle, LineStyle, SplitLine, Symbol, TextStyle,
    },
    renderer::ImageFormat,
    series::{Line, Scatter},
};

use normband::analysis::{BandPalette, PointStatus, SeriesGradient};

use super::colors::{COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT};
use super::{BandChartData, CHART_HEIGHT, CHART_WIDTH};

const IN_BAND_NAME: &str = "In band";
const OUT_OF_BAND_NAME: &str = "Out of band";

/// Vertical gradient from the series' maximum (top) to its minimum (bottom).
/// Without an explicit global flag ECharts maps 0..1 onto the bounding box of
/// the line, which is exactly [max, min].
fn stroke_gradient(gradient: &SeriesGradient) -> Color {
    Color::LinearGradient {
        x: 0.0,
        y: 0.0,
        x2: 0.0,
        y2: 1.0,
        color_stops: gradient
            .stops
            .iter()
            .map(|s| ColorStop::new(s.offset_fraction(), s.color.as_str()))
            .collect(),
    }
}

/// Render the band chart to a PNG file, or SVG when the path ends in `.svg`
pub fn render_band_chart(
    data: &BandChartData,
    palette: &BandPalette,
    output_path: &str,
) -> Result<(), String> {
    if data.series.is_empty() || data.categories.is_empty() {
        return Err("No data to render".to_string());
    }

    let mut legend_data: Vec<String> = data.series.iter().map(|s| s.id.clone()).collect();
    legend_data.push(IN_BAND_NAME.to_string());
    legend_data.push(OUT_OF_BAND_NAME.to_string());

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text(&data.title)
                .subtext("Band: mean ± σ")
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .legend(
            Legend::new()
                .data(legend_data)
                .bottom("3%")
                .item_gap(40)
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .grid(
            Grid::new()
                .left("5%")
                .right("5%")
                .bottom("10%")
                .top("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .boundary_gap(true)
                .data(data.categories.clone())
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(24)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(24))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        );

    // Lines first, markers drawn on top
    for series in &data.series {
        chart = chart.series(
            Line::new()
                .name(&series.id)
                .data(series.values.clone())
                .symbol(Symbol::None)
                .line_style(LineStyle::new().width(4).color(stroke_gradient(&series.gradient)))
                .item_style(ItemStyle::new().color(palette.band_color.as_str())),
        );
    }

    let mut in_band: Vec<Vec<f64>> = Vec::new();
    let mut out_of_band: Vec<Vec<f64>> = Vec::new();
    for series in &data.series {
        for (idx, (&value, status)) in series.values.iter().zip(&series.statuses).enumerate() {
            let point = vec![idx as f64, value];
            match status {
                PointStatus::InRange => in_band.push(point),
                PointStatus::OutOfRange => out_of_band.push(point),
            }
        }
    }

    for (name, points, color) in [
        (IN_BAND_NAME, in_band, palette.band_color.as_str()),
        (OUT_OF_BAND_NAME, out_of_band, palette.tail_color.as_str()),
    ] {
        chart = chart.series(
            Scatter::new()
                .name(name)
                .symbol_size(14)
                .item_style(ItemStyle::new().color(color))
                .data(points),
        );
    }

    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    let is_svg = Path::new(output_path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    if is_svg {
        renderer
            .save(&chart, output_path)
            .map_err(|e| format!("Failed to save chart: {}", e))?;
    } else {
        renderer
            .save_format(ImageFormat::Png, &chart, output_path)
            .map_err(|e| format!("Failed to save chart: {}", e))?;
    }

    Ok(())
}
