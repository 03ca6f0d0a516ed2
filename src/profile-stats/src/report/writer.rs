//! Writes chart assets and splices the document on disk.

use super::{splice_section, Markers, RenderedChart, ReportError};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Writes each chart into `dir`, creating it if needed.
///
/// Returns the written paths in chart order.
///
/// # Errors
///
/// Returns [`ReportError::IoError`] if the directory or a file cannot be written.
pub fn write_charts(dir: &Path, charts: &[RenderedChart]) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;

    let mut written = Vec::with_capacity(charts.len());
    for chart in charts {
        let path = dir.join(chart.kind.file_name());
        fs::write(&path, &chart.svg).map_err(|e| io_error(&path, e))?;
        debug!(path = %path.display(), "Wrote chart");
        written.push(path);
    }
    Ok(written)
}

/// Reads the document the generated section lives in.
///
/// # Errors
///
/// Returns [`ReportError::IoError`] if the document cannot be read. A
/// missing document is never created from scratch.
pub fn read_document(path: &Path) -> Result<String, ReportError> {
    fs::read_to_string(path).map_err(|e| io_error(path, e))
}

/// Splices `fragment` into `current` and writes the result to `path`.
///
/// Returns `true` if the content changed; an unchanged document is not
/// rewritten.
///
/// # Errors
///
/// Returns [`ReportError::IoError`] if the document cannot be written.
pub fn write_document(
    path: &Path,
    current: &str,
    fragment: &str,
    markers: &Markers,
) -> Result<bool, ReportError> {
    let updated = splice_section(current, fragment, markers);
    if updated == current {
        return Ok(false);
    }
    fs::write(path, updated).map_err(|e| io_error(path, e))?;
    Ok(true)
}

/// Reads, splices and writes the document at `path`.
///
/// Returns `true` if the file content changed.
///
/// # Errors
///
/// Returns [`ReportError::IoError`] if the document cannot be read or written.
pub fn update_document(path: &Path, fragment: &str, markers: &Markers) -> Result<bool, ReportError> {
    let current = read_document(path)?;
    write_document(path, &current, fragment, markers)
}

/// Link prefix that reaches `assets_dir` from the directory holding `document`.
///
/// Both paths are taken as given (no filesystem access). When the assets do
/// not live below the document's directory, `assets_dir` is used as is; an
/// absolute directory outside it stays absolute.
#[must_use]
pub fn asset_prefix(document: &Path, assets_dir: &Path) -> String {
    let base = document.parent().unwrap_or_else(|| Path::new(""));
    let relative = assets_dir.strip_prefix(base).unwrap_or(assets_dir);
    if relative.has_root() {
        return relative.to_string_lossy().into_owned();
    }
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn io_error(path: &Path, source: std::io::Error) -> ReportError {
    ReportError::IoError {
        path: path.display().to_string(),
        source,
    }
}
