use crate::{format_numbers, RuleSet};
use models::ValidationResult;
use parser::{bibliography_entries, locate_section, unique_citations, Report};

/// Check that the bibliography is complete and covers every body citation.
///
/// Truncation placeholders inside the bibliography are critical: the first
/// one found is reported and nothing else is examined. Citations after the
/// bibliography heading are ignored when cross-referencing, since entries
/// routinely carry their own bracketed numbers.
pub fn check_bibliography(report: &Report, rules: &RuleSet, result: &mut ValidationResult) {
    let section = match locate_section(&report.content, &rules.config.bibliography_synonyms) {
        Some(section) => section,
        None => {
            result.add_error("Missing Bibliography section".to_string());
            return;
        }
    };

    if let Some(rule) = rules
        .bibliography_truncation
        .iter()
        .find(|rule| rule.regex.is_match(section.body))
    {
        result.add_error(format!(
            "CRITICAL: Bibliography truncation: {}",
            rule.description
        ));
        return;
    }

    let entries = bibliography_entries(section.body);
    if entries.is_empty() {
        result.add_error("Bibliography has no entries".to_string());
        return;
    }

    let cited = unique_citations(&report.content[..section.start]);
    let missing: Vec<u64> = cited.difference(&entries).copied().collect();
    if !missing.is_empty() {
        result.add_error(format!(
            "Citations missing from bibliography: {}",
            format_numbers(&missing)
        ));
    }
}
