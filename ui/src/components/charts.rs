//! Chart cards for the report view, rendered as plain markup: CSS columns
//! for the bar chart and hand-computed SVG wedges for the pie chart.

use std::f64::consts::TAU;

use dioxus::prelude::*;

/// One labelled value in either chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEntry {
    pub label: String,
    pub value: u32,
    pub color: &'static str,
}

#[component]
pub fn BarChart(title: String, entries: Vec<ChartEntry>) -> Element {
    let max = entries.iter().map(|entry| entry.value).max().unwrap_or(0);

    rsx! {
        section { class: "chart-card",
            h2 { class: "chart-card__title", "{title}" }
            if max == 0 {
                p { class: "chart-card__placeholder", "Chưa có dữ liệu để hiển thị." }
            } else {
                div { class: "chart-card__bars",
                    for entry in entries.iter() {
                        {render_bar(entry, max)}
                    }
                }
            }
        }
    }
}

fn render_bar(entry: &ChartEntry, max: u32) -> Element {
    let height = bar_height_pct(entry.value, max);
    let color = entry.color;
    let value = entry.value;
    let label = entry.label.clone();

    rsx! {
        div { class: "chart-card__bar-slot",
            span { class: "chart-card__bar-value", "{value}" }
            div {
                class: "chart-card__bar",
                style: "height: {height}%; background: {color}",
            }
            span { class: "chart-card__bar-label", "{label}" }
        }
    }
}

pub(crate) fn bar_height_pct(value: u32, max: u32) -> f64 {
    if max == 0 {
        0.0
    } else {
        value as f64 / max as f64 * 100.0
    }
}

#[component]
pub fn PieChart(title: String, entries: Vec<ChartEntry>) -> Element {
    let total: u32 = entries.iter().map(|entry| entry.value).sum();

    rsx! {
        section { class: "chart-card",
            h2 { class: "chart-card__title", "{title}" }
            if total == 0 {
                p { class: "chart-card__placeholder", "Chưa có dữ liệu để hiển thị." }
            } else {
                div { class: "chart-card__pie",
                    svg {
                        class: "chart-card__pie-svg",
                        view_box: "0 0 200 200",
                        for (d, color) in pie_paths(&entries, total).into_iter() {
                            path { d: "{d}", fill: "{color}" }
                        }
                    }
                    ul { class: "chart-card__legend",
                        for entry in entries.iter().filter(|entry| entry.value > 0) {
                            {render_legend(entry)}
                        }
                    }
                }
            }
        }
    }
}

fn render_legend(entry: &ChartEntry) -> Element {
    let color = entry.color;
    let label = entry.label.clone();
    let value = entry.value;

    rsx! {
        li { class: "chart-card__legend-item",
            span { class: "chart-card__legend-swatch", style: "background: {color}" }
            span { "{label}: {value}" }
        }
    }
}

/// Wedge paths for the nonzero entries, clockwise from 12 o'clock.
pub(crate) fn pie_paths(entries: &[ChartEntry], total: u32) -> Vec<(String, &'static str)> {
    let mut paths = Vec::new();
    if total == 0 {
        return paths;
    }

    let mut start = 0.0f64;
    for entry in entries {
        if entry.value == 0 {
            continue;
        }
        let fraction = entry.value as f64 / total as f64;
        paths.push((arc_path(100.0, 100.0, 90.0, start, start + fraction), entry.color));
        start += fraction;
    }
    paths
}

/// SVG path for a wedge spanning `start..end`, both fractions of a full
/// turn. A whole-circle wedge has coincident endpoints, which SVG arcs
/// cannot express, so it is drawn as two half arcs instead.
pub(crate) fn arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let span = end - start;
    if span >= 1.0 - f64::EPSILON {
        return format!(
            "M {:.2} {:.2} A {r} {r} 0 1 1 {:.2} {:.2} A {r} {r} 0 1 1 {:.2} {:.2} Z",
            cx,
            cy - r,
            cx,
            cy + r,
            cx,
            cy - r,
        );
    }

    let (sx, sy) = point_on_circle(cx, cy, r, start);
    let (ex, ey) = point_on_circle(cx, cy, r, end);
    let large = if span > 0.5 { 1 } else { 0 };
    format!("M {cx:.2} {cy:.2} L {sx:.2} {sy:.2} A {r} {r} 0 {large} 1 {ex:.2} {ey:.2} Z")
}

fn point_on_circle(cx: f64, cy: f64, r: f64, fraction: f64) -> (f64, f64) {
    let angle = fraction * TAU - TAU / 4.0;
    (cx + r * angle.cos(), cy + r * angle.sin())
}
