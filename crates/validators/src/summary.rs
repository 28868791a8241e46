use crate::RuleSet;
use models::ValidationResult;
use parser::{locate_section, word_count, Report};

pub fn check_executive_summary(report: &Report, rules: &RuleSet, result: &mut ValidationResult) {
    let config = &rules.config;

    let section = match locate_section(&report.content, &config.summary_synonyms) {
        Some(section) => section,
        None => {
            result.add_error("Missing Executive Summary section".to_string());
            return;
        }
    };

    let words = word_count(section.body);

    if words > config.summary_max_words {
        result.add_warning(format!(
            "Executive summary too long: {} words (max {})",
            words, config.summary_max_words
        ));
    }
    if words < config.summary_min_words {
        result.add_warning(format!(
            "Executive summary too short: {} words (min {})",
            words, config.summary_min_words
        ));
    }
}
