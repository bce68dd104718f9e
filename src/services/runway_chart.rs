use plotters::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::domain::projection::RunwayResult;
use crate::services::formatters::format_compact_currency;

/// The chart shows the first year unless asked otherwise.
pub const DEFAULT_CHART_MONTHS: usize = 12;

const CASH_COLOR: RGBColor = RGBColor(36, 94, 79);
const REVENUE_COLOR: RGBColor = RGBColor(122, 201, 167);
const BURN_COLOR: RGBColor = RGBColor(233, 196, 106);

#[derive(Error, Debug)]
pub enum RunwayChartError {
    #[error("projection has no months to plot")]
    EmptyProjection,
    #[error("failed to render runway chart: {0}")]
    Plot(String),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub cash: f64,
    pub revenue: f64,
    pub burn: f64,
}

/// Maps the first `limit` projected months to rounded, labelled points.
pub fn chart_points(result: &RunwayResult, limit: usize) -> Vec<ChartPoint> {
    result
        .projected_data
        .iter()
        .take(limit)
        .map(|entry| ChartPoint {
            label: format!("Month {}", entry.month + 1),
            cash: entry.remaining.round(),
            revenue: entry.revenue.round(),
            burn: entry.burn.round(),
        })
        .collect()
}

pub async fn write_runway_chart_png(
    output_path: &str,
    result: &RunwayResult,
    limit: usize,
) -> Result<(), RunwayChartError> {
    let points = chart_points(result, limit);
    if points.is_empty() {
        return Err(RunwayChartError::EmptyProjection);
    }
    let output_path = output_path.to_string();
    tokio::task::spawn_blocking(move || render_chart_png(&output_path, &points))
        .await
        .map_err(|e| RunwayChartError::Plot(e.to_string()))??;
    Ok(())
}

fn render_chart_png(output_path: &str, points: &[ChartPoint]) -> Result<(), RunwayChartError> {
    let max_value = points
        .iter()
        .flat_map(|point| [point.cash, point.revenue, point.burn])
        .fold(0.0_f64, f64::max);
    let max_y = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };
    let max_x = (points.len() as i32 - 1).max(1);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| RunwayChartError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Cash Runway Projection", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(80)
        .build_cartesian_2d(0..max_x, 0.0..max_y)
        .map_err(|e| RunwayChartError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Month")
        .y_desc("Amount")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .x_labels(points.len().max(2))
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            points
                .get(*index as usize)
                .map(|point| point.label.clone())
                .unwrap_or_default()
        })
        .y_label_formatter(&|value| format_compact_currency(*value))
        .draw()
        .map_err(|e| RunwayChartError::Plot(e.to_string()))?;

    chart
        .draw_series(
            AreaSeries::new(
                points.iter().enumerate().map(|(idx, point)| (idx as i32, point.cash)),
                0.0,
                &CASH_COLOR.mix(0.2),
            )
            .border_style(&CASH_COLOR),
        )
        .map_err(|e| RunwayChartError::Plot(e.to_string()))?
        .label("Remaining Cash")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], CASH_COLOR.filled()));

    chart
        .draw_series(LineSeries::new(
            points.iter().enumerate().map(|(idx, point)| (idx as i32, point.revenue)),
            REVENUE_COLOR.stroke_width(2),
        ))
        .map_err(|e| RunwayChartError::Plot(e.to_string()))?
        .label("Monthly Revenue")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], REVENUE_COLOR.filled()));

    chart
        .draw_series(LineSeries::new(
            points.iter().enumerate().map(|(idx, point)| (idx as i32, point.burn)),
            BURN_COLOR.stroke_width(2),
        ))
        .map_err(|e| RunwayChartError::Plot(e.to_string()))?
        .label("Monthly Burn")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], BURN_COLOR.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 16))
        .draw()
        .map_err(|e| RunwayChartError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| RunwayChartError::Plot(e.to_string()))?;
    Ok(())
}
