//! Monthly sales area chart, drawn as inline SVG.

use crate::shared::components::table::number_format::format_money;
use contracts::dashboards::d400_overview::MonthlySales;
use leptos::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 280.0;
const PADDING_LEFT: f64 = 56.0;
const PADDING_RIGHT: f64 = 16.0;
const PADDING_Y: f64 = 20.0;
const GRID_LINES: usize = 4;

/// Drawing area of the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Plot {
    pub fn standard() -> Self {
        Self {
            left: PADDING_LEFT,
            right: WIDTH - PADDING_RIGHT,
            top: PADDING_Y,
            bottom: HEIGHT - PADDING_Y,
        }
    }
}

/// Scale maximum: the data maximum rounded up to the next thousand.
pub fn scale_max(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        1000.0
    } else {
        (max / 1000.0).ceil() * 1000.0
    }
}

/// Point of every value, spread evenly from left to right.
pub fn chart_points(values: &[f64], max: f64, plot: Plot) -> Vec<(f64, f64)> {
    let step = if values.len() > 1 {
        (plot.right - plot.left) / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = plot.left + step * i as f64;
            let y = plot.bottom - (v / max).clamp(0.0, 1.0) * (plot.bottom - plot.top);
            (x, y)
        })
        .collect()
}

pub fn line_path(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| format!("{}{x:.1},{y:.1}", if i == 0 { "M" } else { " L" }))
        .collect()
}

/// Line path closed down to the baseline.
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    match (points.first(), points.last()) {
        (Some((first_x, _)), Some((last_x, _))) => format!(
            "{} L{last_x:.1},{baseline:.1} L{first_x:.1},{baseline:.1} Z",
            line_path(points)
        ),
        _ => String::new(),
    }
}

#[component]
pub fn SalesChart(data: Vec<MonthlySales>) -> impl IntoView {
    let plot = Plot::standard();
    let values: Vec<f64> = data.iter().map(|m| m.total).collect();
    let max = scale_max(&values);
    let points = chart_points(&values, max, plot);

    let grid = (0..=GRID_LINES)
        .map(|i| {
            let ratio = i as f64 / GRID_LINES as f64;
            let y = plot.bottom - ratio * (plot.bottom - plot.top);
            let label = format_money(max * ratio);
            view! {
                <g>
                    <line class="chart__grid" x1=plot.left y1=y x2=plot.right y2=y />
                    <text class="chart__axis" x={plot.left - 8.0} y={y + 4.0} text-anchor="end">
                        {label.trim_end_matches(".00").to_string()}
                    </text>
                </g>
            }
        })
        .collect_view();

    let labels = data
        .iter()
        .zip(points.iter())
        .map(|(m, (x, _))| {
            view! {
                <text class="chart__axis" x={*x} y={HEIGHT - 2.0} text-anchor="middle">
                    {m.month.clone()}
                </text>
            }
        })
        .collect_view();

    let dots = data
        .iter()
        .zip(points.iter())
        .map(|(m, (x, y))| {
            view! {
                <circle class="chart__dot" cx={*x} cy={*y} r="3">
                    <title>{format!("{} : {}", m.month, format_money(m.total))}</title>
                </circle>
            }
        })
        .collect_view();

    view! {
        <svg class="chart" viewBox=format!("0 0 {WIDTH} {HEIGHT}") preserveAspectRatio="none" role="img">
            {grid}
            <path class="chart__area" d=area_path(&points, plot.bottom) />
            <path class="chart__line" d=line_path(&points) />
            {dots}
            {labels}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_max_rounds_up() {
        assert_eq!(scale_max(&[4000.0, 9000.0, 8500.0]), 9000.0);
        assert_eq!(scale_max(&[4200.0]), 5000.0);
        assert_eq!(scale_max(&[]), 1000.0);
    }

    #[test]
    fn test_points_span_the_plot() {
        let plot = Plot::standard();
        let points = chart_points(&[0.0, 500.0, 1000.0], 1000.0, plot);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], (plot.left, plot.bottom));
        assert_eq!(points[2], (plot.right, plot.top));
        assert_eq!(points[1].0, (plot.left + plot.right) / 2.0);
    }

    #[test]
    fn test_paths() {
        let points = [(0.0, 10.0), (5.0, 2.0)];
        assert_eq!(line_path(&points), "M0.0,10.0 L5.0,2.0");
        assert_eq!(area_path(&points, 20.0), "M0.0,10.0 L5.0,2.0 L5.0,20.0 L0.0,20.0 Z");
        assert_eq!(area_path(&[], 20.0), "");
    }
}
