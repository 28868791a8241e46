use models::ValidationResult;
use parser::{read_report, Report, ReportError};
use std::path::Path;
use validators::{
    check_bibliography, check_broken_references, check_citations, check_executive_summary,
    check_placeholders, check_required_sections, check_source_count, check_truncation,
    check_word_count, ConfigError, RuleSet, ValidatorConfig,
};

/// Signature shared by every check: read the report, append findings.
pub type CheckFn = fn(&Report, &RuleSet, &mut ValidationResult);

/// All checks, in the order they run and are displayed.
pub const CHECKS: &[(&str, CheckFn)] = &[
    ("Executive Summary", check_executive_summary),
    ("Required Sections", check_required_sections),
    ("Citations", check_citations),
    ("Bibliography", check_bibliography),
    ("Placeholder Text", check_placeholders),
    ("Content Truncation", check_truncation),
    ("Word Count", check_word_count),
    ("Source Count", check_source_count),
    ("Broken References", check_broken_references),
];

/// Runs every check against a report using one immutable rule set.
#[derive(Debug, Clone, Default)]
pub struct ReportValidator {
    rules: RuleSet,
}

impl ReportValidator {
    pub fn new(config: ValidatorConfig) -> Result<Self, ConfigError> {
        Ok(ReportValidator {
            rules: RuleSet::compile(config)?,
        })
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.rules.config
    }

    /// Run all checks. No check is skipped because another one failed.
    pub fn evaluate(&self, report: &Report) -> ValidationResult {
        let mut result = ValidationResult::new(report.name.clone());

        for (name, check) in CHECKS {
            let errors_before = result.errors().len();
            let warnings_before = result.warnings().len();

            check(report, &self.rules, &mut result);

            let errors = result.errors().len() - errors_before;
            let warnings = result.warnings().len() - warnings_before;
            logging::debug(&format!(
                "{}: check '{}' added {} error(s), {} warning(s)",
                report.name, name, errors, warnings
            ));

            result.record_check(*name, errors == 0);
        }

        result
    }

    pub fn evaluate_text(&self, name: &str, content: &str) -> ValidationResult {
        self.evaluate(&Report::from_text(name, content))
    }
}

/// Read a report from disk and validate it.
///
/// Fails only when the file cannot be read. In that case no check runs.
pub fn evaluate_report_file(
    path: &Path,
    validator: &ReportValidator,
) -> Result<ValidationResult, ReportError> {
    let report = read_report(path)?;
    logging::info(&format!("Validating {}", path.display()));
    Ok(validator.evaluate(&report))
}
