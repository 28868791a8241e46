use crate::RuleSet;
use models::ValidationResult;
use parser::Report;

/// Reject reports that announce content was left out. The first phrase found wins.
pub fn check_truncation(report: &Report, rules: &RuleSet, result: &mut ValidationResult) {
    if let Some(rule) = rules
        .truncation
        .iter()
        .find(|rule| rule.regex.is_match(&report.content))
    {
        result.add_error(format!("CRITICAL: Content truncation: {}", rule.description));
    }
}
