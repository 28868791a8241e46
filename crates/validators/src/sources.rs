use crate::RuleSet;
use models::ValidationResult;
use parser::{bibliography_entries, locate_section, Report};

/// Warn when the bibliography lists too few distinct sources.
///
/// A missing bibliography is left to [`crate::check_bibliography`].
pub fn check_source_count(report: &Report, rules: &RuleSet, result: &mut ValidationResult) {
    let Some(section) = locate_section(&report.content, &rules.config.bibliography_synonyms) else {
        return;
    };

    let entries = bibliography_entries(section.body);
    if entries.len() < rules.config.min_sources {
        result.add_warning(format!(
            "Only {} sources (recommended: 10+)",
            entries.len()
        ));
    }
}
