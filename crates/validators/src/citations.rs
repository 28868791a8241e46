use crate::{format_numbers, RuleSet};
use models::ValidationResult;
use parser::{unique_citations, Report};

pub fn check_citations(report: &Report, rules: &RuleSet, result: &mut ValidationResult) {
    let config = &rules.config;
    let unique = unique_citations(&report.content);

    let max = match unique.iter().next_back() {
        Some(max) => *max,
        None => {
            result.add_error("No citations [N] found in report".to_string());
            return;
        }
    };

    if unique.len() < config.min_unique_citations {
        result.add_warning(format!(
            "Only {} unique sources (recommended: 10+)",
            unique.len()
        ));
    }

    // Gaps are only enumerated up to max_gap_scan.
    if max > config.max_gap_scan {
        result.add_warning(format!(
            "Citation [{}] exceeds {}, numbering gaps not checked",
            max, config.max_gap_scan
        ));
        return;
    }

    let missing: Vec<u64> = (1..=max).filter(|n| !unique.contains(n)).collect();
    if !missing.is_empty() {
        result.add_warning(format!(
            "Non-consecutive citations, missing: {}",
            format_numbers(&missing)
        ));
    }
}
