// Report handlers
use crate::render::{render_json, render_text};
use evaluator::{evaluate_report_file, ReportValidator};
use models::ValidationResult;
use parser::ReportError;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiError {
    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOptions {
    /// Treat warnings as failures when deciding the verdict.
    pub strict: bool,
    pub format: OutputFormat,
}

/// Validate a report file, or every report directly inside a directory.
///
/// Returns whether all reports passed. A single unreadable file is an
/// error; inside a directory an unreadable file counts as failed and the
/// rest are still validated.
pub fn validate_path(
    path: &Path,
    validator: &ReportValidator,
    options: ValidateOptions,
    out: &mut dyn Write,
) -> Result<bool, UiError> {
    let results = if path.is_dir() {
        validate_directory(path, validator, options, out)?
    } else {
        let result = evaluate_report_file(path, validator)?;
        if options.format == OutputFormat::Text {
            write!(out, "{}", render_text(&result))?;
        }
        vec![result]
    };

    let all_passed = results.iter().all(|r| r.passes(options.strict));

    if options.format == OutputFormat::Json {
        writeln!(out, "{}", render_json(&results, options.strict)?)?;
    }

    Ok(all_passed)
}

fn validate_directory(
    dir: &Path,
    validator: &ReportValidator,
    options: ValidateOptions,
    out: &mut dyn Write,
) -> Result<Vec<ValidationResult>, UiError> {
    let reports = utils::report_files(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    if reports.is_empty() {
        return Err(ReportError::NoReports(dir.to_path_buf()).into());
    }

    logging::info(&format!(
        "Validating {} report file(s) in {}",
        reports.len(),
        dir.display()
    ));

    let mut results = Vec::new();
    let mut passed_count = 0;
    let mut failed_count = 0;

    for report_path in reports {
        match evaluate_report_file(&report_path, validator) {
            Ok(result) => {
                if result.passes(options.strict) {
                    passed_count += 1;
                } else {
                    failed_count += 1;
                }
                if options.format == OutputFormat::Text {
                    write!(out, "{}", render_text(&result))?;
                }
                results.push(result);
            }
            Err(e) => {
                logging::error(&format!("Skipping {}: {}", report_path.display(), e));
                let mut result = ValidationResult::new(report_path.display().to_string());
                result.add_error(e.to_string());
                failed_count += 1;
                if options.format == OutputFormat::Text {
                    write!(out, "{}", render_text(&result))?;
                }
                results.push(result);
            }
        }
    }

    if options.format == OutputFormat::Text {
        writeln!(
            out,
            "\nSummary: {} passed, {} failed",
            passed_count, failed_count
        )?;
    }

    Ok(results)
}
