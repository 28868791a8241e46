use crate::RuleSet;
use models::ValidationResult;
use parser::Report;

pub fn check_placeholders(report: &Report, rules: &RuleSet, result: &mut ValidationResult) {
    let found: Vec<&str> = rules
        .config
        .placeholders
        .iter()
        .map(|token| token.as_str())
        .filter(|token| !token.is_empty() && report.content.contains(token))
        .collect();

    if !found.is_empty() {
        result.add_error(format!("Found placeholder text: {}", found.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> ValidationResult {
        let mut result = ValidationResult::new("test");
        check_placeholders(&Report::from_text("test", text), &RuleSet::default(), &mut result);
        result
    }

    #[test]
    fn test_clean_report() {
        assert!(run("A finished report with nothing left to do.").errors().is_empty());
    }

    #[test]
    fn test_todo_is_reported() {
        let result = run("Finish this section. TODO");
        assert_eq!(result.errors(), ["Found placeholder text: TODO"]);
    }

    #[test]
    fn test_bracketed_tokens_listed_in_config_order() {
        let result = run("Claim [citation needed]. Later [TODO] and FIXME.");
        assert_eq!(
            result.errors(),
            ["Found placeholder text: TODO, FIXME, [citation needed], [TODO]"]
        );
    }

    #[test]
    fn test_bare_tokens_are_case_sensitive() {
        assert!(run("todo: nothing, tbd is lowercase").errors().is_empty());
    }
}
