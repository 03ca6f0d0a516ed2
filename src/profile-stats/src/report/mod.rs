//! Report assembly: chart assets, Markdown rendering, and document splicing.

mod builder;
mod chart_kind;
mod error;
mod splice;
mod template;
mod writer;

pub use builder::{
    build_report, group_thousands, RenderedChart, Report, ReportOptions, PRIVATE_COLOR,
    PUBLIC_COLOR,
};
pub use chart_kind::ChartKind;
pub use error::ReportError;
pub use splice::{splice_section, Markers};
pub use template::{create_handlebars_registry, MarkdownRenderer};
pub use writer::{asset_prefix, read_document, update_document, write_charts, write_document};
