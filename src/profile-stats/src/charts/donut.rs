//! Donut chart.

use super::palette::{color_at, NEUTRAL};
use super::svg::{escape, no_data, open_document, title};
use super::{ChartDatum, ChartSize};

/// Angle of the first segment's leading edge (12 o'clock).
const START_ANGLE: f64 = -90.0;

/// Inner radius as a fraction of the outer radius.
const INNER_RATIO: f64 = 0.6;

/// Vertical offset that keeps the ring clear of the title.
const TITLE_OFFSET: f64 = 10.0;

const LEGEND_X: f64 = 10.0;
const LEGEND_TOP: f64 = 40.0;
const LEGEND_STEP: f64 = 22.0;
const SWATCH: f64 = 14.0;

/// Label of the legend row that stands in for entries past the last row.
const OTHER_LABEL: &str = "Other";

/// Extents at or above this are drawn as a full ring.
const FULL_TURN: f64 = 359.999;

/// Angular geometry of one donut segment, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSegment {
    /// Leading edge, measured clockwise from 3 o'clock.
    pub start_angle: f64,

    /// `360 × value / total`.
    pub extent: f64,

    /// `100 × value / total`.
    pub percentage: f64,

    /// SVG large-arc flag: set iff `extent > 180`.
    pub large_arc: bool,
}

impl DonutSegment {
    /// Trailing edge angle.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.extent
    }
}

/// Computes segment angles for `data` in order.
///
/// Returns an empty vector when the values sum to zero.
#[must_use]
pub fn donut_segments(data: &[ChartDatum]) -> Vec<DonutSegment> {
    let total: u64 = data.iter().map(|d| d.value).sum();
    if total == 0 {
        return Vec::new();
    }

    let total = total as f64;
    let mut current = START_ANGLE;
    data.iter()
        .map(|datum| {
            let share = datum.value as f64 / total;
            let extent = share * 360.0;
            let segment = DonutSegment {
                start_angle: current,
                extent,
                percentage: share * 100.0,
                large_arc: extent > 180.0,
            };
            current += extent;
            segment
        })
        .collect()
}

/// Renders a donut chart with a legend.
///
/// Each datum uses its own colour if set, else `palette[index % len]`.
/// An empty or all-zero dataset renders the "no data" placeholder.
#[must_use]
pub fn render_donut(data: &[ChartDatum], title_text: &str, size: ChartSize, palette: &[String]) -> String {
    let segments = donut_segments(data);
    if segments.is_empty() {
        return no_data(title_text, size);
    }

    let width = f64::from(size.width);
    let height = f64::from(size.height);
    let ring = Ring {
        cx: width / 2.0,
        cy: height / 2.0 + TITLE_OFFSET,
        outer: width.min(height) / 3.0,
        inner: width.min(height) / 3.0 * INNER_RATIO,
    };

    let rows = legend_rows(size);
    let folded = data.len() > rows;
    let listed = if folded { rows.saturating_sub(1) } else { data.len() };

    let mut paths = String::new();
    let mut legend = String::new();
    for (index, (datum, segment)) in data.iter().zip(&segments).enumerate() {
        let color = datum
            .color
            .as_deref()
            .unwrap_or_else(|| color_at(palette, index));
        let caption = format!("{}: {:.1}%", escape(&datum.label), segment.percentage);

        paths.push_str(&format!(
            "    <path d=\"{}\" fill=\"{color}\" opacity=\"0.9\">\n      <title>{caption}</title>\n    </path>\n",
            ring.segment_path(segment)
        ));

        if index < listed {
            legend_row(&mut legend, index, color, &caption);
        }
    }
    if folded && rows > 0 {
        let rest: f64 = segments[listed..].iter().map(|s| s.percentage).sum();
        legend_row(&mut legend, listed, NEUTRAL, &format!("{OTHER_LABEL}: {rest:.1}%"));
    }

    let mut out = String::new();
    open_document(&mut out, size);
    title(&mut out, size, title_text);
    out.push_str("  <g>\n");
    out.push_str(&paths);
    out.push_str("  </g>\n");
    out.push_str(&legend);
    out.push_str("</svg>\n");
    out
}

/// Legend rows that fit between the top offset and the bottom edge.
fn legend_rows(size: ChartSize) -> usize {
    let room = f64::from(size.height) - LEGEND_TOP - SWATCH;
    if room < 0.0 {
        return 0;
    }
    (room / LEGEND_STEP).floor() as usize + 1
}

fn legend_row(out: &mut String, row: usize, color: &str, caption: &str) {
    let y = LEGEND_TOP + row as f64 * LEGEND_STEP;
    out.push_str(&format!(
        "  <rect x=\"{LEGEND_X}\" y=\"{y:.2}\" width=\"{SWATCH}\" height=\"{SWATCH}\" fill=\"{color}\" opacity=\"0.9\"/>\n"
    ));
    out.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"12\" fill=\"#333\">{caption}</text>\n",
        LEGEND_X + SWATCH + 6.0,
        y + SWATCH - 3.0
    ));
}

/// Ring geometry in pixels.
struct Ring {
    cx: f64,
    cy: f64,
    outer: f64,
    inner: f64,
}

impl Ring {
    fn point(&self, radius: f64, angle: f64) -> (f64, f64) {
        let radians = angle.to_radians();
        (
            self.cx + radius * radians.cos(),
            self.cy + radius * radians.sin(),
        )
    }

    /// Outer arc, radial segment in, inner arc reversed, radial segment back.
    fn segment_path(&self, segment: &DonutSegment) -> String {
        let start = segment.start_angle;
        let end = segment.end_angle();
        let (r, ir) = (self.outer, self.inner);

        if segment.extent >= FULL_TURN {
            // Coincident endpoints draw nothing, so a full ring is two half arcs.
            let mid = start + 180.0;
            let (x1, y1) = self.point(r, start);
            let (xm, ym) = self.point(r, mid);
            let (x4, y4) = self.point(ir, start);
            let (xn, yn) = self.point(ir, mid);
            return format!(
                "M {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 1 1 {xm:.2} {ym:.2} A {r:.2} {r:.2} 0 1 1 {x1:.2} {y1:.2} \
                 L {x4:.2} {y4:.2} A {ir:.2} {ir:.2} 0 1 0 {xn:.2} {yn:.2} A {ir:.2} {ir:.2} 0 1 0 {x4:.2} {y4:.2} Z"
            );
        }

        let large_arc = u8::from(segment.large_arc);
        let (x1, y1) = self.point(r, start);
        let (x2, y2) = self.point(r, end);
        let (x3, y3) = self.point(ir, end);
        let (x4, y4) = self.point(ir, start);
        format!(
            "M {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} \
             L {x3:.2} {y3:.2} A {ir:.2} {ir:.2} 0 {large_arc} 0 {x4:.2} {y4:.2} Z"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{default_palette, NO_DATA_TEXT};

    fn data(values: &[u64]) -> Vec<ChartDatum> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| ChartDatum::new(format!("item{i}"), *v))
            .collect()
    }

    #[test]
    fn extents_are_proportional_and_sum_to_full_turn() {
        let segments = donut_segments(&data(&[1, 2, 3, 4]));

        assert!((segments[0].extent - 36.0).abs() < 1e-9);
        assert!((segments[3].extent - 144.0).abs() < 1e-9);
        let total: f64 = segments.iter().map(|s| s.extent).sum();
        assert!((total - 360.0).abs() < 1e-9);
        assert!((segments[0].start_angle + 90.0).abs() < 1e-9);
        assert!((segments[3].end_angle() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn segments_are_contiguous() {
        let segments = donut_segments(&data(&[5, 7, 11]));
        for pair in segments.windows(2) {
            assert!((pair[0].end_angle() - pair[1].start_angle).abs() < 1e-9);
        }
    }

    #[test]
    fn large_arc_only_above_half_turn() {
        let segments = donut_segments(&data(&[3, 1]));
        assert!(segments[0].large_arc); // 270°
        assert!(!segments[1].large_arc); // 90°

        let halves = donut_segments(&data(&[1, 1]));
        assert!(!halves[0].large_arc); // exactly 180°
    }

    #[test]
    fn zero_total_renders_placeholder() {
        let palette = default_palette();
        let size = ChartSize::new(500, 300);

        assert!(render_donut(&[], "Empty", size, &palette).contains(NO_DATA_TEXT));
        assert!(render_donut(&data(&[0, 0]), "Zeros", size, &palette).contains(NO_DATA_TEXT));
    }

    #[test]
    fn renders_path_and_legend_per_datum() {
        let palette = default_palette();
        let svg = render_donut(&data(&[60, 40]), "Languages", ChartSize::new(500, 300), &palette);

        assert_eq!(svg.matches("<path ").count(), 2);
        assert!(svg.contains("item0: 60.0%"));
        assert!(svg.contains("item1: 40.0%"));
        assert!(svg.contains("fill=\"#3178c6\""));
        assert!(svg.contains("fill=\"#f1e05a\""));
        assert!(!svg.contains(NO_DATA_TEXT));
    }

    #[test]
    fn explicit_color_overrides_palette() {
        let palette = default_palette();
        let datum = ChartDatum::new("Public", 3).with_color("#28a745");
        let svg = render_donut(&[datum], "Repos", ChartSize::new(500, 300), &palette);

        assert!(svg.contains("fill=\"#28a745\""));
        assert!(!svg.contains("fill=\"#3178c6\""));
    }

    #[test]
    fn single_datum_draws_full_ring() {
        let palette = default_palette();
        let svg = render_donut(&data(&[9]), "Repos", ChartSize::new(500, 300), &palette);

        // Two outer and two inner half arcs.
        let path = svg.split("d=\"").nth(1).unwrap();
        let path = &path[..path.find('"').unwrap()];
        assert_eq!(path.matches(" A ").count(), 4);
        assert!(svg.contains("item0: 100.0%"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let palette = default_palette();
        let size = ChartSize::new(500, 300);
        let first = render_donut(&data(&[3, 9, 1]), "Same", size, &palette);
        let second = render_donut(&data(&[3, 9, 1]), "Same", size, &palette);
        assert_eq!(first, second);
    }

    #[test]
    fn legend_rows_fit_chart_height() {
        assert_eq!(legend_rows(ChartSize::new(500, 300)), 12);
        assert_eq!(legend_rows(ChartSize::new(500, 54)), 1);
        assert_eq!(legend_rows(ChartSize::new(500, 20)), 0);
    }

    #[test]
    fn long_legend_folds_into_other() {
        let palette = default_palette();
        let svg = render_donut(&data(&[1; 20]), "Many", ChartSize::new(500, 300), &palette);

        assert_eq!(svg.matches("<path ").count(), 20);
        assert_eq!(svg.matches("<rect x=\"10\"").count(), 12);
        for rect in svg.split("<rect x=\"10\" y=\"").skip(1) {
            let y: f64 = rect[..rect.find('"').unwrap()].parse().unwrap();
            assert!(y + SWATCH <= 300.0, "legend row at {y}");
        }
        assert!(svg.contains(">item10: 5.0%</text>"));
        assert!(!svg.contains(">item11: 5.0%</text>"));
        assert!(svg.contains(">Other: 45.0%</text>"));
        assert!(svg.contains(&format!("fill=\"{NEUTRAL}\" opacity")));
    }

    #[test]
    fn short_legend_lists_every_entry() {
        let palette = default_palette();
        let svg = render_donut(&data(&[1; 12]), "Fits", ChartSize::new(500, 300), &palette);

        assert!(svg.contains(">item11: 8.3%</text>"));
        assert!(!svg.contains(OTHER_LABEL));
    }

    #[test]
    fn labels_are_escaped() {
        let palette = default_palette();
        let datum = ChartDatum::new("C & C++", 1);
        let svg = render_donut(&[datum], "<Title>", ChartSize::new(500, 300), &palette);

        assert!(svg.contains("C &amp; C++: 100.0%"));
        assert!(svg.contains("&lt;Title&gt;"));
    }
}
