//! Shared SVG document pieces.

use super::ChartSize;

/// Font stack used by every chart.
const FONT_STYLE: &str = "text { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', \
                          'Noto Sans', Helvetica, Arial, sans-serif; }";

/// Text shown instead of geometry when there is nothing to draw.
pub const NO_DATA_TEXT: &str = "No data available";

/// Escapes text for use in SVG content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Opens a standalone SVG document with embedded styling.
pub(crate) fn open_document(out: &mut String, size: ChartSize) {
    out.push_str(&format!(
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        w = size.width,
        h = size.height
    ));
    out.push_str(&format!("  <style>\n    {FONT_STYLE}\n  </style>\n"));
}

/// Writes the centred chart title.
pub(crate) fn title(out: &mut String, size: ChartSize, text: &str) {
    out.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"20\" text-anchor=\"middle\" font-size=\"16\" font-weight=\"bold\" fill=\"#333\">{}</text>\n",
        f64::from(size.width) / 2.0,
        escape(text)
    ));
}

/// Renders the placeholder used for empty or all-zero datasets.
#[must_use]
pub fn no_data(title_text: &str, size: ChartSize) -> String {
    let mut out = String::new();
    open_document(&mut out, size);
    title(&mut out, size, title_text);
    out.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"16\" fill=\"#666\">{NO_DATA_TEXT}</text>\n",
        f64::from(size.width) / 2.0,
        f64::from(size.height) / 2.0
    ));
    out.push_str("</svg>\n");
    out
}
