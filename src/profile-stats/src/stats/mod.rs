//! Run-wide aggregate and the language share calculation.

mod languages;
mod repo_stats;
mod tally;

pub use languages::{language_percentages, LanguageShare};
pub use repo_stats::RepoStats;
pub use tally::Tally;
