//! The charts a report is made of.

/// One chart asset of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Repositories,
    Languages,
    Platforms,
    Databases,
    Activity,
}

impl ChartKind {
    /// Every kind, in report order.
    pub const ALL: [ChartKind; 5] = [
        Self::Repositories,
        Self::Languages,
        Self::Platforms,
        Self::Databases,
        Self::Activity,
    ];

    /// File name of the SVG asset.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Repositories => "repositories.svg",
            Self::Languages => "languages.svg",
            Self::Platforms => "platforms.svg",
            Self::Databases => "databases.svg",
            Self::Activity => "activity.svg",
        }
    }

    /// Chart title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Repositories => "Repository Distribution",
            Self::Languages => "Top Languages",
            Self::Platforms => "Frameworks & Technologies",
            Self::Databases => "Databases",
            Self::Activity => "Monthly Commit Activity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_distinct() {
        let mut names: Vec<&str> = ChartKind::ALL.iter().map(|k| k.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ChartKind::ALL.len());
    }
}
