//! SVG chart rendering.
//!
//! Renderers are pure: the same input always produces byte-identical markup.

mod bar;
mod donut;
mod palette;
mod svg;

pub use bar::{bar_geometry, render_bar, BarGeometry};
pub use donut::{donut_segments, render_donut, DonutSegment};
pub use palette::{color_at, default_palette, DEFAULT_PALETTE};
pub use svg::{escape, no_data, NO_DATA_TEXT};

/// One category of a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartDatum {
    /// Category label. May be blank for bar charts.
    pub label: String,

    /// Non-negative weight.
    pub value: u64,

    /// Explicit colour, overriding the palette.
    pub color: Option<String>,

    /// Hover text, overriding the label-derived default.
    pub tooltip: Option<String>,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
            tooltip: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

/// Chart dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl ChartSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
