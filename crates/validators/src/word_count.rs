use crate::RuleSet;
use models::ValidationResult;
use parser::{word_count, Report};

pub fn check_word_count(report: &Report, rules: &RuleSet, result: &mut ValidationResult) {
    let words = word_count(&report.content);

    if words < rules.config.min_report_words {
        result.add_warning(format!("Report very short: {} words", words));
    }
}
