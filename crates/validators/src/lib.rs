// validators crate

mod bibliography;
mod citations;
pub mod config;
mod placeholders;
mod references;
mod sections;
mod sources;
mod summary;
mod truncation;
mod word_count;

pub use bibliography::check_bibliography;
pub use citations::check_citations;
pub use config::{ConfigError, LabeledPattern, RuleSet, ValidatorConfig};
pub use placeholders::check_placeholders;
pub use references::check_broken_references;
pub use sections::check_required_sections;
pub use sources::check_source_count;
pub use summary::check_executive_summary;
pub use truncation::check_truncation;
pub use word_count::check_word_count;

use itertools::Itertools;

/// Render a list of numbers the way findings quote them, e.g. `[2, 4]`.
pub(crate) fn format_numbers<'a>(numbers: impl IntoIterator<Item = &'a u64>) -> String {
    format!("[{}]", numbers.into_iter().join(", "))
}
