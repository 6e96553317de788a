//! SVG chart geometry.
//!
//! ARCHITECTURE
//! ============
//! Chart components render plain `<svg>` markup. All coordinate math lives
//! here as pure functions over a fixed view box so it can be unit tested
//! without a DOM. The y axis always starts at zero.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::f64::consts::{FRAC_PI_2, TAU};

/// Series colors, cycled by index.
pub const PALETTE: [&str; 5] = ["#2563eb", "#14b8a6", "#f97316", "#64748b", "#10b981"];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// A labelled value on a category axis.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

/// One line on a line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub color: &'static str,
    /// Fill the area under the line.
    pub filled: bool,
    /// Render as a dashed reference line without point markers.
    pub dashed: bool,
}

/// View box and margins of a cartesian chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self { width: 640.0, height: 320.0, left: 48.0, right: 16.0, top: 16.0, bottom: 36.0 }
    }
}

impl PlotArea {
    pub fn inner_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    /// Y of the zero baseline.
    pub fn baseline(&self) -> f64 {
        self.top + self.inner_height()
    }

    /// Map a value onto the y axis for an axis topping out at `ceiling`.
    pub fn y_for(&self, value: f64, ceiling: f64) -> f64 {
        if ceiling <= 0.0 {
            return self.baseline();
        }
        let ratio = (value / ceiling).clamp(0.0, 1.0);
        self.baseline() - ratio * self.inner_height()
    }

    /// Center x of category `index` out of `count` evenly spaced slots.
    #[allow(clippy::cast_precision_loss)]
    pub fn slot_center(&self, index: usize, count: usize) -> f64 {
        if count == 0 {
            return self.left;
        }
        let slot = self.inner_width() / count as f64;
        self.left + slot * (index as f64 + 0.5)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Smallest "round" number (1, 2, 2.5, 5 or 10 times a power of ten) that is
/// at least `max`. Non-positive input yields 1.
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= max)
        .unwrap_or(10.0 * magnitude)
}

/// Evenly spaced tick values from 0 to `ceiling` inclusive.
#[allow(clippy::cast_precision_loss)]
pub fn y_ticks(ceiling: f64, intervals: usize) -> Vec<f64> {
    let intervals = intervals.max(1);
    (0..=intervals).map(|i| ceiling * i as f64 / intervals as f64).collect()
}

/// Largest value across every series, used to pick the axis ceiling.
pub fn series_max<'a>(series: impl IntoIterator<Item = &'a [f64]>) -> f64 {
    series
        .into_iter()
        .flat_map(|values| values.iter().copied())
        .fold(0.0, f64::max)
}

/// Show every n-th category label so that at most `max_labels` are drawn.
pub fn label_stride(count: usize, max_labels: usize) -> usize {
    if max_labels == 0 {
        return count.max(1);
    }
    count.div_ceil(max_labels).max(1)
}

/// Point coordinates for `values` plotted in category slots.
pub fn line_points(values: &[f64], ceiling: f64, area: &PlotArea) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (area.slot_center(i, values.len()), area.y_for(*v, ceiling)))
        .collect()
}

/// `points` attribute for an SVG `<polyline>`.
pub fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed path filling the area between a line and the baseline.
pub fn area_path(points: &[(f64, f64)], area: &PlotArea) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let base = area.baseline();
    let mut d = format!("M{:.1},{base:.1}", first.0);
    for (x, y) in points {
        d.push_str(&format!(" L{x:.1},{y:.1}"));
    }
    d.push_str(&format!(" L{:.1},{base:.1} Z", last.0));
    d
}

/// An axis-aligned bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bars for `values`, each filling `fill_ratio` of its category slot.
#[allow(clippy::cast_precision_loss)]
pub fn bar_rects(values: &[f64], ceiling: f64, area: &PlotArea, fill_ratio: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let slot = area.inner_width() / values.len() as f64;
    let width = slot * fill_ratio.clamp(0.05, 1.0);
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = area.y_for(*v, ceiling);
            BarRect { x: area.slot_center(i, values.len()) - width / 2.0, y, width, height: area.baseline() - y }
        })
        .collect()
}

/// A pie or donut wedge.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSlice {
    /// Position of the source value, for color lookup.
    pub index: usize,
    /// SVG path data.
    pub path: String,
    /// Share of the whole, 0..=1.
    pub fraction: f64,
    /// Anchor for the wedge label, just outside the outer radius.
    pub label_x: f64,
    pub label_y: f64,
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Wedges for `values`, starting at twelve o'clock and running clockwise.
///
/// `inner_radius` of zero draws a pie; anything larger draws a donut.
/// Zero and negative values produce no wedge; an all-zero input yields none.
pub fn arc_slices(values: &[f64], cx: f64, cy: f64, outer_radius: f64, inner_radius: f64) -> Vec<ArcSlice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = -FRAC_PI_2;
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v > 0.0)
        .map(|(index, value)| {
            let fraction = value / total;
            // A full circle cannot be a single arc; stop just short of it.
            let sweep = (fraction * TAU).min(TAU - 1e-4);
            let end = start + sweep;
            let large_arc = u8::from(sweep > std::f64::consts::PI);
            let (ox1, oy1) = polar(cx, cy, outer_radius, start);
            let (ox2, oy2) = polar(cx, cy, outer_radius, end);
            let path = if inner_radius > 0.0 {
                let (ix1, iy1) = polar(cx, cy, inner_radius, end);
                let (ix2, iy2) = polar(cx, cy, inner_radius, start);
                format!(
                    "M{ox1:.2},{oy1:.2} A{outer_radius:.2},{outer_radius:.2} 0 {large_arc} 1 {ox2:.2},{oy2:.2} \
                     L{ix1:.2},{iy1:.2} A{inner_radius:.2},{inner_radius:.2} 0 {large_arc} 0 {ix2:.2},{iy2:.2} Z"
                )
            } else {
                format!(
                    "M{cx:.2},{cy:.2} L{ox1:.2},{oy1:.2} \
                     A{outer_radius:.2},{outer_radius:.2} 0 {large_arc} 1 {ox2:.2},{oy2:.2} Z"
                )
            };
            let (label_x, label_y) = polar(cx, cy, outer_radius + 14.0, start + sweep / 2.0);
            start = end;
            ArcSlice { index, path, fraction, label_x, label_y }
        })
        .collect()
}

/// Whole-percent label for a wedge, e.g. `45%`.
pub fn percent_label(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}
