use crate::RuleSet;
use models::ValidationResult;
use parser::{relative_links, Report};

/// Warn about `./` links that do not resolve next to the report.
///
/// Broken links are cosmetic, so this never records an error.
pub fn check_broken_references(report: &Report, _rules: &RuleSet, result: &mut ValidationResult) {
    let broken: Vec<&str> = relative_links(&report.content)
        .into_iter()
        .filter(|link| {
            let target = link.split('#').next().unwrap_or(link);
            !report.base_dir.join(target).exists()
        })
        .collect();

    if !broken.is_empty() {
        result.add_warning(format!("Broken internal links: {}", broken.join(", ")));
    }
}
