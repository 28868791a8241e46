use colored::*;
use models::{Severity, ValidationResult};
use serde::Serialize;

const BANNER_WIDTH: usize = 60;

fn banner(out: &mut String, title: &str) {
    let rule = "=".repeat(BANNER_WIDTH);
    out.push_str(&format!("\n{}\n{}\n{}\n\n", rule, title, rule));
}

/// Human-readable report: per-check lines, then every finding, then a verdict.
pub fn render_text(result: &ValidationResult) -> String {
    let mut out = String::new();

    banner(&mut out, &format!("VALIDATING: {}", result.report()));

    for check in result.checks() {
        let status = if check.passed {
            "PASS".green()
        } else {
            "FAIL".red()
        };
        out.push_str(&format!("Checking: {}... {}\n", check.name, status));
    }

    banner(&mut out, "VALIDATION SUMMARY");

    for severity in [Severity::Error, Severity::Warning] {
        let messages = result.messages(severity);
        if messages.is_empty() {
            continue;
        }
        out.push_str(&format!("{} ({}):\n", severity.heading(), messages.len()));
        for message in messages {
            out.push_str(&format!("  - {}\n", message));
        }
        out.push('\n');
    }

    let verdict = if !result.errors().is_empty() {
        "VALIDATION FAILED - fix errors before delivery".red().bold()
    } else if !result.warnings().is_empty() {
        "VALIDATION PASSED (with warnings)".yellow().bold()
    } else {
        "ALL CHECKS PASSED".green().bold()
    };
    out.push_str(&format!("{}\n", verdict));

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a ValidationResult,
    strict: bool,
    passed: bool,
}

impl<'a> JsonReport<'a> {
    fn new(result: &'a ValidationResult, strict: bool) -> Self {
        JsonReport {
            result,
            strict,
            passed: result.passes(strict),
        }
    }
}

/// JSON view. A single result renders as an object, several as an array.
pub fn render_json(results: &[ValidationResult], strict: bool) -> serde_json::Result<String> {
    let reports: Vec<JsonReport<'_>> = results
        .iter()
        .map(|result| JsonReport::new(result, strict))
        .collect();

    match reports.as_slice() {
        [single] => serde_json::to_string_pretty(single),
        _ => serde_json::to_string_pretty(&reports),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ValidationResult {
        let mut result = ValidationResult::new("report.md");
        result.record_check("Executive Summary", true);
        result.record_check("Bibliography", false);
        result.add_error("Missing Bibliography section".to_string());
        result.add_warning("Report very short: 42 words".to_string());
        result
    }

    #[test]
    fn test_text_layout() {
        colored::control::set_override(false);
        let text = render_text(&sample());

        assert!(text.contains(&format!("{}\nVALIDATING: report.md\n", "=".repeat(60))));
        assert!(text.contains("Checking: Executive Summary... PASS\n"));
        assert!(text.contains("Checking: Bibliography... FAIL\n"));
        assert!(text.contains("ERRORS (1):\n  - Missing Bibliography section\n"));
        assert!(text.contains("WARNINGS (1):\n  - Report very short: 42 words\n"));
        assert!(text.ends_with("VALIDATION FAILED - fix errors before delivery\n"));

        let errors_at = text.find("ERRORS").unwrap();
        let warnings_at = text.find("WARNINGS").unwrap();
        assert!(errors_at < warnings_at);
    }

    #[test]
    fn test_text_verdicts() {
        colored::control::set_override(false);
        let mut result = ValidationResult::new("clean.md");
        assert!(render_text(&result).ends_with("ALL CHECKS PASSED\n"));

        result.add_warning("Only 3 sources (recommended: 10+)".to_string());
        let text = render_text(&result);
        assert!(text.ends_with("VALIDATION PASSED (with warnings)\n"));
        assert!(!text.contains("ERRORS"));
    }

    #[test]
    fn test_json_single_report() {
        let json = render_json(&[sample()], false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["report"], "report.md");
        assert_eq!(value["passed"], false);
        assert_eq!(value["strict"], false);
        assert_eq!(value["errors"][0], "Missing Bibliography section");
        assert_eq!(value["checks"][1]["name"], "Bibliography");
    }

    #[test]
    fn test_json_strict_verdict() {
        let mut result = ValidationResult::new("warned.md");
        result.add_warning("Report very short: 10 words".to_string());

        let lenient: serde_json::Value =
            serde_json::from_str(&render_json(&[result.clone()], false).unwrap()).unwrap();
        let strict: serde_json::Value =
            serde_json::from_str(&render_json(&[result], true).unwrap()).unwrap();
        assert_eq!(lenient["passed"], true);
        assert_eq!(strict["passed"], false);
    }

    #[test]
    fn test_json_many_reports_is_an_array() {
        let json = render_json(&[sample(), ValidationResult::new("b.md")], false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["passed"], true);
    }
}
