//! Vertical bar chart.

use super::palette::color_at;
use super::svg::{escape, no_data, open_document, title};
use super::{ChartDatum, ChartSize};

const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Share of each slot taken by the bar; the rest is the gap.
const BAR_FRACTION: f64 = 0.8;

/// Pixel geometry of one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Computes bar rectangles, heights scaled linearly against the maximum.
///
/// Returns an empty vector for an empty or all-zero dataset.
#[must_use]
pub fn bar_geometry(data: &[ChartDatum], size: ChartSize) -> Vec<BarGeometry> {
    let max = data.iter().map(|d| d.value).max().unwrap_or(0);
    if max == 0 {
        return Vec::new();
    }

    let plot_width = (f64::from(size.width) - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let plot_height = (f64::from(size.height) - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
    let slot = plot_width / data.len() as f64;
    let bar_width = slot * BAR_FRACTION;
    let gap = slot - bar_width;
    let baseline = MARGIN_TOP + plot_height;

    data.iter()
        .enumerate()
        .map(|(index, datum)| {
            let height = datum.value as f64 / max as f64 * plot_height;
            BarGeometry {
                x: MARGIN_LEFT + index as f64 * slot + gap / 2.0,
                y: baseline - height,
                width: bar_width,
                height,
            }
        })
        .collect()
}

/// Renders a bar chart.
///
/// Bars use the datum's own colour if set, else the first palette colour.
/// Blank labels are not drawn, which lets dense series annotate only some bars.
#[must_use]
pub fn render_bar(data: &[ChartDatum], title_text: &str, size: ChartSize, palette: &[String]) -> String {
    let bars = bar_geometry(data, size);
    if bars.is_empty() {
        return no_data(title_text, size);
    }

    let max = data.iter().map(|d| d.value).max().unwrap_or(0);
    let baseline = f64::from(size.height) - MARGIN_BOTTOM;
    let right = f64::from(size.width) - MARGIN_RIGHT;

    let mut out = String::new();
    open_document(&mut out, size);
    title(&mut out, size, title_text);

    out.push_str(&format!(
        "  <line x1=\"{MARGIN_LEFT}\" y1=\"{baseline:.2}\" x2=\"{right:.2}\" y2=\"{baseline:.2}\" stroke=\"#999\"/>\n"
    ));
    out.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" font-size=\"10\" fill=\"#666\">{max}</text>\n",
        MARGIN_LEFT - 6.0,
        MARGIN_TOP + 4.0
    ));

    for (datum, bar) in data.iter().zip(&bars) {
        let color = datum.color.as_deref().unwrap_or_else(|| color_at(palette, 0));
        let tooltip = match (&datum.tooltip, datum.label.trim().is_empty()) {
            (Some(tooltip), _) => escape(tooltip),
            (None, false) => format!("{}: {}", escape(&datum.label), datum.value),
            (None, true) => datum.value.to_string(),
        };
        out.push_str(&format!(
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{color}\" opacity=\"0.9\">\n    <title>{tooltip}</title>\n  </rect>\n",
            bar.x, bar.y, bar.width, bar.height
        ));

        if !datum.label.trim().is_empty() {
            out.push_str(&format!(
                "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"10\" fill=\"#333\">{}</text>\n",
                bar.x + bar.width / 2.0,
                baseline + 16.0,
                escape(&datum.label)
            ));
        }
    }

    out.push_str("</svg>\n");
    out
}
