use crate::RuleSet;
use models::ValidationResult;
use parser::Report;

/// Require every configured section to have a heading.
///
/// Detection is looser than section extraction: any line with `##` followed
/// by one of the section's phrases counts, so `###` subsections and headings
/// that mention the phrase mid-line are accepted.
pub fn check_required_sections(report: &Report, rules: &RuleSet, result: &mut ValidationResult) {
    let missing: Vec<&str> = rules
        .section_detectors
        .iter()
        .filter(|(_, detector)| !detector.is_match(&report.content))
        .map(|(name, _)| name.as_str())
        .collect();

    if !missing.is_empty() {
        result.add_error(format!("Missing sections: {}", missing.join(", ")));
    }
}
