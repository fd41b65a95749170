//! Small inline SVG line chart.

use dioxus::prelude::*;

/// SVG `points` for `values` scaled into a `width` x `height` box.
///
/// `range` fixes the vertical scale; `None` fits it to the data. A flat
/// series is drawn through the middle.
pub fn sparkline_points(values: &[f64], width: f64, height: f64, range: Option<(f64, f64)>) -> String {
    if values.is_empty() {
        return String::new();
    }
    let (lo, hi) = range.unwrap_or_else(|| {
        values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)))
    });
    let span = hi - lo;
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = if span > f64::EPSILON {
                height - (v.clamp(lo, hi) - lo) / span * height
            } else {
                height / 2.0
            };
            format!("{:.1},{:.1}", i as f64 * step, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Props, Clone, PartialEq)]
pub struct SparklineProps {
    pub values: Vec<f64>,
    #[props(default = 240.0)]
    pub width: f64,
    #[props(default = 48.0)]
    pub height: f64,
    #[props(default = "var(--accent)".to_string())]
    pub color: String,
    /// Fixed vertical range; fitted to the data when absent
    #[props(default)]
    pub range: Option<(f64, f64)>,
}

#[component]
pub fn Sparkline(props: SparklineProps) -> Element {
    let points = sparkline_points(&props.values, props.width, props.height, props.range);
    let view_box = format!("0 0 {} {}", props.width, props.height);
    rsx! {
        svg {
            view_box: "{view_box}",
            width: "100%",
            height: "{props.height}",
            preserve_aspect_ratio: "none",
            polyline {
                points: "{points}",
                fill: "none",
                stroke: "{props.color}",
                stroke_width: "2",
            }
        }
    }
}
