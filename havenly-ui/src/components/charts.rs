//! Hand-rolled SVG charts for the fixture series.
//!
//! Each chart draws into a fixed 320x200 viewBox and scales with CSS. The
//! geometry is kept in plain functions so it can be unit-tested without a
//! browser.

use leptos::*;
use plan_catalog::charts::Share;

const VIEW_W: f64 = 320.0;
const VIEW_H: f64 = 200.0;
const PAD: f64 = 24.0;

/// One plotted line or area.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Evenly space `values` across the plot width and scale them into the
/// padded plot height. The y range spans the min/max across all series so
/// narrow bands (premiums varying 295..320) still show their shape.
fn scale_points(values: &[f64], y_min: f64, y_max: f64) -> Vec<(f64, f64)> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }
    let span = if (y_max - y_min).abs() < f64::EPSILON {
        1.0
    } else {
        y_max - y_min
    };
    let step = if n > 1 {
        (VIEW_W - 2.0 * PAD) / (n as f64 - 1.0)
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = PAD + step * i as f64;
            let y = VIEW_H - PAD - (v - y_min) / span * (VIEW_H - 2.0 * PAD);
            (x, y)
        })
        .collect()
}

fn y_range(series: &[Series]) -> (f64, f64) {
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for s in series {
        for &v in &s.values {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min > max {
        (0.0, 1.0)
    } else {
        (min, max)
    }
}

fn polyline_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Close a polyline down to the plot baseline so it can be filled.
fn area_path(points: &[(f64, f64)]) -> String {
    let Some(((fx, _), (lx, _))) = points.first().zip(points.last()) else {
        return String::new();
    };
    let base = VIEW_H - PAD;
    let mut d = format!("M {fx:.1} {base:.1}");
    for (x, y) in points {
        d.push_str(&format!(" L {x:.1} {y:.1}"));
    }
    d.push_str(&format!(" L {lx:.1} {base:.1} Z"));
    d
}

/// Pie slice covering `[start_frac, end_frac)` of the circle, clockwise from
/// twelve o'clock. A full-circle share is split into two half arcs because a
/// single SVG arc with identical endpoints collapses to nothing.
fn pie_slice_path(cx: f64, cy: f64, r: f64, start_frac: f64, end_frac: f64) -> String {
    let point = |frac: f64| {
        let angle = std::f64::consts::TAU * frac - std::f64::consts::FRAC_PI_2;
        (cx + r * angle.cos(), cy + r * angle.sin())
    };
    let sweep = end_frac - start_frac;
    if sweep >= 1.0 {
        let (x0, y0) = point(0.0);
        let (x1, y1) = point(0.5);
        return format!(
            "M {x0:.1} {y0:.1} A {r} {r} 0 1 1 {x1:.1} {y1:.1} A {r} {r} 0 1 1 {x0:.1} {y0:.1} Z"
        );
    }
    let (x0, y0) = point(start_frac);
    let (x1, y1) = point(end_frac);
    let large = i32::from(sweep > 0.5);
    format!("M {cx} {cy} L {x0:.1} {y0:.1} A {r} {r} 0 {large} 1 {x1:.1} {y1:.1} Z")
}

#[component]
pub fn LineChart(labels: Vec<&'static str>, series: Vec<Series>) -> impl IntoView {
    let (y_min, y_max) = y_range(&series);
    let lines = series
        .iter()
        .map(|s| {
            let pts = polyline_attr(&scale_points(&s.values, y_min, y_max));
            view! {
              <polyline points=pts fill="none" stroke=s.color stroke-width="3"/>
            }
        })
        .collect_view();
    view! {
      <svg class="chart" viewBox="0 0 320 200" preserveAspectRatio="xMidYMid meet">
        {lines}
        <AxisLabels labels=labels/>
      </svg>
      <ChartLegend series=series/>
    }
}

#[component]
pub fn AreaChart(labels: Vec<&'static str>, series: Vec<Series>) -> impl IntoView {
    let (y_min, y_max) = y_range(&series);
    let areas = series
        .iter()
        .map(|s| {
            let pts = scale_points(&s.values, y_min, y_max);
            let d = area_path(&pts);
            let line = polyline_attr(&pts);
            view! {
              <path d=d fill=s.color fill-opacity="0.3"/>
              <polyline points=line fill="none" stroke=s.color stroke-width="2"/>
            }
        })
        .collect_view();
    view! {
      <svg class="chart" viewBox="0 0 320 200" preserveAspectRatio="xMidYMid meet">
        {areas}
        <AxisLabels labels=labels/>
      </svg>
      <ChartLegend series=series/>
    }
}

#[component]
pub fn BarChart(shares: Vec<Share>) -> impl IntoView {
    let max = shares.iter().map(|s| s.value).max().unwrap_or(1).max(1) as f64;
    let n = shares.len().max(1) as f64;
    let slot = (VIEW_W - 2.0 * PAD) / n;
    let bar_w = slot * 0.6;
    let bars = shares
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let h = s.value as f64 / max * (VIEW_H - 2.0 * PAD);
            let x = PAD + slot * i as f64 + (slot - bar_w) / 2.0;
            let y = VIEW_H - PAD - h;
            let lx = PAD + slot * i as f64 + slot / 2.0;
            view! {
              <rect x=format!("{x:.1}") y=format!("{y:.1}")
                    width=format!("{bar_w:.1}") height=format!("{h:.1}")
                    fill=s.color/>
              <text x=format!("{lx:.1}") y=format!("{:.1}", VIEW_H - 6.0)
                    text-anchor="middle" class="chart-label">{s.label}</text>
            }
        })
        .collect_view();
    view! {
      <svg class="chart" viewBox="0 0 320 200" preserveAspectRatio="xMidYMid meet">
        {bars}
      </svg>
    }
}

#[component]
pub fn PieChart(shares: Vec<Share>) -> impl IntoView {
    let total: u32 = shares.iter().map(|s| s.value).sum();
    let total = total.max(1) as f64;
    let mut start = 0.0;
    let slices = shares
        .iter()
        .map(|s| {
            let frac = s.value as f64 / total;
            let d = pie_slice_path(VIEW_W / 2.0, VIEW_H / 2.0, 80.0, start, start + frac);
            start += frac;
            view! { <path d=d fill=s.color/> }
        })
        .collect_view();
    let legend = shares
        .iter()
        .map(|s| {
            let pct = (s.value as f64 / total * 100.0).round() as u32;
            view! {
              <span class="legend-item">
                <span class="legend-swatch" style=format!("background:{}", s.color)></span>
                {format!("{} {pct}%", s.label)}
              </span>
            }
        })
        .collect_view();
    view! {
      <svg class="chart" viewBox="0 0 320 200" preserveAspectRatio="xMidYMid meet">
        {slices}
      </svg>
      <div class="chart-legend">{legend}</div>
    }
}

#[component]
fn AxisLabels(labels: Vec<&'static str>) -> impl IntoView {
    let n = labels.len();
    let step = if n > 1 {
        (VIEW_W - 2.0 * PAD) / (n as f64 - 1.0)
    } else {
        0.0
    };
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let x = PAD + step * i as f64;
            view! {
              <text x=format!("{x:.1}") y=format!("{:.1}", VIEW_H - 6.0)
                    text-anchor="middle" class="chart-label">{label}</text>
            }
        })
        .collect_view()
}

#[component]
fn ChartLegend(series: Vec<Series>) -> impl IntoView {
    view! {
      <div class="chart-legend">
        {series
            .into_iter()
            .map(|s| view! {
              <span class="legend-item">
                <span class="legend-swatch" style=format!("background:{}", s.color)></span>
                {s.name}
              </span>
            })
            .collect_view()}
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_points_spans_plot_width() {
        let pts = scale_points(&[1.0, 2.0, 3.0], 1.0, 3.0);
        assert_eq!(pts.len(), 3);
        assert!((pts[0].0 - PAD).abs() < 1e-9);
        assert!((pts[2].0 - (VIEW_W - PAD)).abs() < 1e-9);
        // min maps to the bottom of the plot, max to the top
        assert!((pts[0].1 - (VIEW_H - PAD)).abs() < 1e-9);
        assert!((pts[2].1 - PAD).abs() < 1e-9);
    }

    #[test]
    fn scale_points_handles_flat_series() {
        let pts = scale_points(&[5.0, 5.0], 5.0, 5.0);
        assert_eq!(pts.len(), 2);
        assert!(pts.iter().all(|(_, y)| y.is_finite()));
    }

    #[test]
    fn polyline_attr_formats_pairs() {
        let s = polyline_attr(&[(1.0, 2.0), (3.5, 4.25)]);
        assert_eq!(s, "1.0,2.0 3.5,4.2");
    }

    #[test]
    fn area_path_closes_to_baseline() {
        let pts = scale_points(&[1.0, 2.0], 1.0, 2.0);
        let d = area_path(&pts);
        assert!(d.starts_with("M "));
        assert!(d.ends_with("Z"));
        assert_eq!(d.matches(" L ").count(), 3);
    }

    #[test]
    fn quarter_slice_uses_small_arc() {
        let d = pie_slice_path(160.0, 100.0, 80.0, 0.0, 0.25);
        assert!(d.contains("A 80 80 0 0 1"));
        assert!(d.starts_with("M 160 100"));
    }

    #[test]
    fn majority_slice_uses_large_arc() {
        let d = pie_slice_path(160.0, 100.0, 80.0, 0.0, 0.75);
        assert!(d.contains("A 80 80 0 1 1"));
    }

    #[test]
    fn full_circle_slice_is_two_arcs() {
        let d = pie_slice_path(160.0, 100.0, 80.0, 0.0, 1.0);
        assert_eq!(d.matches("A 80 80").count(), 2);
        assert!(!d.contains(" L "));
    }

    #[test]
    fn y_range_covers_all_series() {
        let series = vec![
            Series { name: "a", color: "#000", values: vec![2.0, 4.0] },
            Series { name: "b", color: "#111", values: vec![1.0, 3.0] },
        ];
        assert_eq!(y_range(&series), (1.0, 4.0));
    }
}
