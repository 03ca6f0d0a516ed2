//! Turns aggregated statistics into chart assets and a Markdown section.

use super::template::{MarkdownRenderer, REPORT_TEMPLATE};
use super::{ChartKind, ReportError};
use crate::activity::fill_month_gaps;
use crate::charts::{default_palette, render_bar, render_donut, ChartDatum, ChartSize};
use crate::stats::{language_percentages, RepoStats, Tally};
use serde_json::{json, Value};

/// Colour of the public slice in the repository chart.
pub const PUBLIC_COLOR: &str = "#28a745";

/// Colour of the private slice in the repository chart.
pub const PRIVATE_COLOR: &str = "#6f42c1";

/// Presentation settings for a report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// How many languages the donut shows.
    pub top_languages: usize,

    /// Size of the donut charts.
    pub chart_size: ChartSize,

    /// Size of the activity bar chart.
    pub activity_size: ChartSize,

    /// Colours cycled across categories.
    pub palette: Vec<String>,

    /// Link prefix of chart images, relative to the document.
    pub asset_prefix: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_languages: 10,
            chart_size: ChartSize::new(500, 300),
            activity_size: ChartSize::new(800, 300),
            palette: default_palette(),
            asset_prefix: "assets".to_string(),
        }
    }
}

impl ReportOptions {
    /// Link to a chart from the document.
    #[must_use]
    pub fn asset_link(&self, kind: ChartKind) -> String {
        let prefix = self.asset_prefix.trim_end_matches('/');
        if prefix.is_empty() {
            kind.file_name().to_string()
        } else {
            format!("{prefix}/{}", kind.file_name())
        }
    }
}

/// A rendered chart waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChart {
    pub kind: ChartKind,
    pub svg: String,
}

/// Everything a run produces.
#[derive(Debug, Clone)]
pub struct Report {
    /// Markdown placed between the markers.
    pub markdown: String,

    /// One chart per [`ChartKind`], placeholders included.
    pub charts: Vec<RenderedChart>,
}

impl Report {
    /// Looks up the chart of one kind.
    #[must_use]
    pub fn chart(&self, kind: ChartKind) -> Option<&RenderedChart> {
        self.charts.iter().find(|c| c.kind == kind)
    }
}

/// Builds charts and Markdown from the aggregate.
///
/// `last_updated` is printed verbatim in the footer.
///
/// # Errors
///
/// Returns [`ReportError::Template`] if the Markdown fails to render.
pub fn build_report(
    stats: &RepoStats,
    options: &ReportOptions,
    last_updated: &str,
) -> Result<Report, ReportError> {
    let repositories = repository_data(stats);
    let languages = language_percentages(stats);
    let top_languages: Vec<ChartDatum> = languages
        .iter()
        .take(options.top_languages)
        .map(|share| ChartDatum::new(share.language.clone(), share.bytes))
        .collect();
    let platforms = tally_data(stats.platforms());
    let databases = tally_data(stats.databases());
    let series = fill_month_gaps(stats.activities());
    let activity = activity_data(&series);

    let donut = |kind: ChartKind, data: &[ChartDatum]| RenderedChart {
        kind,
        svg: render_donut(data, kind.title(), options.chart_size, &options.palette),
    };
    let charts = vec![
        donut(ChartKind::Repositories, &repositories),
        donut(ChartKind::Languages, &top_languages),
        donut(ChartKind::Platforms, &platforms),
        donut(ChartKind::Databases, &databases),
        RenderedChart {
            kind: ChartKind::Activity,
            svg: render_bar(
                &activity,
                ChartKind::Activity.title(),
                options.activity_size,
                &options.palette,
            ),
        },
    ];

    let total_commits: u64 = series.iter().map(|(_, count)| count).sum();
    let active_months = series.iter().filter(|(_, count)| *count > 0).count();
    let data = json!({
        "has_repos": stats.total_repos() > 0,
        "repos": {
            "title": ChartKind::Repositories.title(),
            "chart": options.asset_link(ChartKind::Repositories),
            "total": stats.total_repos(),
            "public": stats.public_repos(),
            "private": stats.private_repos(),
        },
        "has_languages": !languages.is_empty(),
        "languages": {
            "title": format!("Top {} Languages", top_languages.len()),
            "chart": options.asset_link(ChartKind::Languages),
            "rows": languages
                .iter()
                .map(|share| json!({
                    "language": share.language,
                    "percentage": format!("{:.2}", share.percentage),
                    "bytes": group_thousands(share.bytes),
                }))
                .collect::<Vec<Value>>(),
        },
        "has_platforms": !platforms.is_empty(),
        "platforms": count_section(ChartKind::Platforms, &platforms, options),
        "has_databases": !databases.is_empty(),
        "databases": count_section(ChartKind::Databases, &databases, options),
        "has_activity": !series.is_empty(),
        "activity": {
            "title": ChartKind::Activity.title(),
            "chart": options.asset_link(ChartKind::Activity),
            "total": group_thousands(total_commits),
            "active_months": active_months,
            "first": series.first().map(|(m, _)| m.as_str()).unwrap_or_default(),
            "last": series.last().map(|(m, _)| m.as_str()).unwrap_or_default(),
        },
        "last_updated": last_updated,
    });

    let markdown = MarkdownRenderer::new().render(REPORT_TEMPLATE, &data)?;
    Ok(Report { markdown, charts })
}

fn repository_data(stats: &RepoStats) -> Vec<ChartDatum> {
    let slices = [
        ("Public", stats.public_repos(), PUBLIC_COLOR),
        ("Private", stats.private_repos(), PRIVATE_COLOR),
    ];
    slices
        .into_iter()
        .filter(|(_, count, _)| *count > 0)
        .map(|(label, count, color)| ChartDatum::new(label, count).with_color(color))
        .collect()
}

fn tally_data(tally: &Tally) -> Vec<ChartDatum> {
    tally
        .ranked()
        .into_iter()
        .map(|(name, count)| ChartDatum::new(name, count))
        .collect()
}

/// Bars are labelled with the year on the first bar and on each January.
fn activity_data(series: &[(String, u64)]) -> Vec<ChartDatum> {
    series
        .iter()
        .enumerate()
        .map(|(index, (month, count))| {
            let (year, month_number) = month.split_once('-').unwrap_or((month.as_str(), ""));
            let label = if index == 0 || month_number == "01" {
                year
            } else {
                ""
            };
            ChartDatum::new(label, *count).with_tooltip(format!("{month}: {count} commits"))
        })
        .collect()
}

fn count_section(kind: ChartKind, data: &[ChartDatum], options: &ReportOptions) -> Value {
    json!({
        "title": kind.title(),
        "chart": options.asset_link(kind),
        "rows": data
            .iter()
            .map(|d| json!({ "name": d.label, "count": d.value }))
            .collect::<Vec<Value>>(),
    })
}

/// Formats `1234567` as `1,234,567`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::MonthHistogram;
    use crate::charts::NO_DATA_TEXT;
    use crate::detection::Detection;
    use std::collections::BTreeMap;

    const NOW: &str = "2026-01-01 00:00:00 UTC";

    fn sample_stats() -> RepoStats {
        let mut stats = RepoStats::new();
        stats.record_repository(false);
        stats.record_repository(true);
        stats.record_languages(&BTreeMap::from([
            ("Python".to_string(), 60_000),
            ("JavaScript".to_string(), 40_000),
        ]));
        stats.record_detection(&Detection {
            platforms: vec!["Django".to_string()],
            databases: vec!["SQLite".to_string()],
        });
        let histogram: MonthHistogram =
            BTreeMap::from([("2023-11".to_string(), 4), ("2024-02".to_string(), 2)]);
        stats.record_activity(&histogram);
        stats
    }

    #[test]
    fn can_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn asset_link_joins_prefix() {
        let mut options = ReportOptions::default();
        assert_eq!(options.asset_link(ChartKind::Languages), "assets/languages.svg");
        options.asset_prefix = "docs/img/".to_string();
        assert_eq!(options.asset_link(ChartKind::Activity), "docs/img/activity.svg");
        options.asset_prefix = String::new();
        assert_eq!(options.asset_link(ChartKind::Databases), "databases.svg");
    }

    #[test]
    fn activity_labels_mark_years() {
        let series = vec![
            ("2023-11".to_string(), 4),
            ("2023-12".to_string(), 0),
            ("2024-01".to_string(), 1),
            ("2024-02".to_string(), 2),
        ];
        let data = activity_data(&series);
        let labels: Vec<&str> = data.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["2023", "", "2024", ""]);
        assert_eq!(data[1].tooltip.as_deref(), Some("2023-12: 0 commits"));
    }

    #[test]
    fn builds_full_report() {
        let report = build_report(&sample_stats(), &ReportOptions::default(), NOW).unwrap();

        assert_eq!(report.charts.len(), ChartKind::ALL.len());
        let md = &report.markdown;
        assert!(md.contains("**Total Repositories:** 2"));
        assert!(md.contains("**Public Repositories:** 1"));
        assert!(md.contains("**Private Repositories:** 1"));
        assert!(md.contains("| Python | 60.00% | 60,000 |"));
        assert!(md.contains("| JavaScript | 40.00% | 40,000 |"));
        assert!(md.contains("| Django | 1 |"));
        assert!(md.contains("| SQLite | 1 |"));
        assert!(md.contains("![Monthly Commit Activity](assets/activity.svg)"));
        assert!(md.contains("**Total Commits:** 6"));
        assert!(md.contains("*Last updated: 2026-01-01 00:00:00 UTC*"));

        let repos = report.chart(ChartKind::Repositories).unwrap();
        assert!(repos.svg.contains(PUBLIC_COLOR));
        assert!(repos.svg.contains(PRIVATE_COLOR));
        assert!(repos.svg.contains("Public: 50.0%"));
    }

    #[test]
    fn empty_stats_render_placeholders() {
        let report = build_report(&RepoStats::new(), &ReportOptions::default(), NOW).unwrap();

        let md = &report.markdown;
        assert!(md.contains("**Total Repositories:** 0"));
        assert!(md.contains("*No language statistics available*"));
        assert!(!md.contains("Framework & Technology Statistics"));
        assert!(!md.contains("Database Statistics"));
        assert!(!md.contains("Commit Activity"));
        for chart in &report.charts {
            assert!(chart.svg.contains(NO_DATA_TEXT), "{:?}", chart.kind);
        }
    }

    #[test]
    fn language_chart_respects_top_n() {
        let mut stats = RepoStats::new();
        stats.record_languages(&BTreeMap::from([
            ("Rust".to_string(), 30),
            ("Go".to_string(), 20),
            ("C".to_string(), 10),
        ]));
        let options = ReportOptions {
            top_languages: 2,
            ..ReportOptions::default()
        };
        let report = build_report(&stats, &options, NOW).unwrap();

        let chart = &report.chart(ChartKind::Languages).unwrap().svg;
        assert!(chart.contains("Rust: 60.0%"));
        assert!(chart.contains("Go: 40.0%"));
        assert!(!chart.contains(">C: "));
        // The table still lists every language.
        assert!(report.markdown.contains("| C | 16.67% | 10 |"));
        assert!(report.markdown.contains("![Top 2 Languages]"));
    }
}
