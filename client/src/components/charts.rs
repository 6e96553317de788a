//! Inline SVG charts.
//!
//! ARCHITECTURE
//! ============
//! Geometry comes from [`crate::util::chart`]; these components only turn it
//! into markup. Charts scale to their container through `viewBox`, so the
//! coordinates below are in view-box units, not pixels.

use leptos::prelude::*;

use crate::util::chart::{
    ChartPoint, LineSeries, PlotArea, arc_slices, area_path, bar_rects, label_stride, line_points, nice_ceiling,
    palette_color, percent_label, polyline, series_max, y_ticks,
};
use crate::util::format::format_amount;

const Y_INTERVALS: usize = 4;
const MAX_X_LABELS: usize = 10;

fn y_grid(area: PlotArea, ceiling: f64) -> impl IntoView {
    y_ticks(ceiling, Y_INTERVALS)
        .into_iter()
        .map(|tick| {
            let y = area.y_for(tick, ceiling);
            view! {
                <g class="chart__grid">
                    <line x1=area.left x2={area.width - area.right} y1=y y2=y stroke-dasharray="3 3"></line>
                    <text x={area.left - 8.0} y={y + 4.0} text-anchor="end">{format_amount(tick)}</text>
                </g>
            }
        })
        .collect_view()
}

fn x_labels(area: PlotArea, labels: &[String]) -> AnyView {
    let count = labels.len();
    let stride = label_stride(count, MAX_X_LABELS);
    let y = area.baseline() + 20.0;
    labels
        .iter()
        .enumerate()
        .filter(|(i, _)| i % stride == 0)
        .map(|(i, label)| {
            view! {
                <text class="chart__x-label" x=area.slot_center(i, count) y=y text-anchor="middle">
                    {label.clone()}
                </text>
            }
        })
        .collect_view()
        .into_any()
}

#[component]
fn Legend(entries: Vec<(String, &'static str, bool)>) -> impl IntoView {
    view! {
        <ul class="chart__legend">
            {entries
                .into_iter()
                .map(|(name, color, dashed)| {
                    view! {
                        <li>
                            <span
                                class="chart__swatch"
                                class:chart__swatch--dashed=dashed
                                style:background-color=color
                            ></span>
                            {name}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Shown in place of a chart with nothing to plot.
#[component]
pub fn ChartEmpty() -> impl IntoView {
    view! { <div class="chart chart--empty">"No data available for the selected period"</div> }
}

/// One or more series over shared category labels.
#[component]
pub fn LineChart(
    labels: Vec<String>,
    series: Vec<LineSeries>,
    #[prop(optional)] legend: bool,
) -> impl IntoView {
    let area = PlotArea::default();
    let ceiling = nice_ceiling(series_max(series.iter().map(|s| s.values.as_slice())));
    let legend_entries: Vec<_> = series.iter().map(|s| (s.name.clone(), s.color, s.dashed)).collect();

    let lines = series
        .into_iter()
        .map(|s| {
            let points = line_points(&s.values, ceiling, &area);
            let fill = s.filled.then(|| area_path(&points, &area));
            let dash = if s.dashed { "6 6" } else { "none" };
            let markers = (!s.dashed).then(|| {
                points
                    .iter()
                    .map(|&(cx, cy)| view! { <circle cx=cx cy=cy r="3.5" fill=s.color></circle> })
                    .collect_view()
            });
            view! {
                <g class="chart__series">
                    {fill.map(|d| view! { <path d=d fill=s.color fill-opacity="0.1" stroke="none"></path> })}
                    <polyline
                        points=polyline(&points)
                        fill="none"
                        stroke=s.color
                        stroke-width="2"
                        stroke-dasharray=dash
                    ></polyline>
                    {markers}
                </g>
            }
        })
        .collect_view();

    view! {
        <figure class="chart">
            <svg class="chart__svg" viewBox=area.view_box() role="img">
                {y_grid(area, ceiling)}
                {lines}
                {x_labels(area, &labels)}
            </svg>
            <Show when=move || legend>
                <Legend entries=legend_entries.clone()/>
            </Show>
        </figure>
    }
}

/// Vertical bars, one per point.
#[component]
pub fn BarChart(points: Vec<ChartPoint>, #[prop(default = palette_color(1))] color: &'static str) -> impl IntoView {
    let area = PlotArea::default();
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let labels: Vec<String> = points.into_iter().map(|p| p.label).collect();
    let ceiling = nice_ceiling(series_max([values.as_slice()]));

    let bars = bar_rects(&values, ceiling, &area, 0.6)
        .into_iter()
        .zip(values.iter().copied())
        .map(|(bar, value)| {
            view! {
                <rect class="chart__bar" x=bar.x y=bar.y width=bar.width height=bar.height rx="3" fill=color>
                </rect>
                <text class="chart__bar-value" x={bar.x + bar.width / 2.0} y={bar.y - 6.0} text-anchor="middle">
                    {format_amount(value)}
                </text>
            }
        })
        .collect_view();

    view! {
        <figure class="chart">
            <svg class="chart__svg" viewBox=area.view_box() role="img">
                {y_grid(area, ceiling)}
                {bars}
                {x_labels(area, &labels)}
            </svg>
        </figure>
    }
}

const PIE_SIZE: f64 = 320.0;
const PIE_RADIUS: f64 = 100.0;
const DONUT_RATIO: f64 = 0.6;

/// Share-of-whole chart. `donut` cuts out the middle.
#[component]
pub fn PieChart(slices: Vec<(String, f64)>, #[prop(optional)] donut: bool) -> impl IntoView {
    let center = PIE_SIZE / 2.0;
    let inner = if donut { PIE_RADIUS * DONUT_RATIO } else { 0.0 };
    let values: Vec<f64> = slices.iter().map(|(_, v)| *v).collect();
    let legend_entries: Vec<_> = slices
        .iter()
        .enumerate()
        .map(|(i, (name, _))| (name.clone(), palette_color(i), false))
        .collect();

    let wedges = arc_slices(&values, center, center, PIE_RADIUS, inner)
        .into_iter()
        .map(|slice| {
            let anchor = if slice.label_x >= center { "start" } else { "end" };
            view! {
                <path class="chart__wedge" d=slice.path fill=palette_color(slice.index) stroke="#ffffff"></path>
                <text class="chart__wedge-label" x=slice.label_x y=slice.label_y text-anchor=anchor>
                    {percent_label(slice.fraction)}
                </text>
            }
        })
        .collect_view();

    view! {
        <figure class="chart chart--pie">
            <svg class="chart__svg" viewBox={format!("0 0 {PIE_SIZE} {PIE_SIZE}")} role="img">
                {wedges}
            </svg>
            <Legend entries=legend_entries/>
        </figure>
    }
}
