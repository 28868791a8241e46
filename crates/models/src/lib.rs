use serde::Serialize;

/// How serious a finding is.
///
/// Errors block delivery of the report. Warnings are advisory and only fail
/// a run when strict mode is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Heading used when listing findings of this severity.
    pub fn heading(&self) -> &'static str {
        match self {
            Severity::Error => "ERRORS",
            Severity::Warning => "WARNINGS",
        }
    }
}

/// Outcome of a single named check. A check passes when it recorded no errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
}

/// Findings collected while validating one report.
///
/// Findings can only be appended. Once the evaluator hands the result back
/// nothing mutates it any more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    report: String,
    errors: Vec<String>,
    warnings: Vec<String>,
    checks: Vec<CheckOutcome>,
}

impl ValidationResult {
    pub fn new(report: impl Into<String>) -> Self {
        ValidationResult {
            report: report.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
            checks: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: String) {
        self.add(Severity::Error, message);
    }

    pub fn add_warning(&mut self, message: String) {
        self.add(Severity::Warning, message);
    }

    pub fn add(&mut self, severity: Severity, message: String) {
        match severity {
            Severity::Error => self.errors.push(message),
            Severity::Warning => self.warnings.push(message),
        }
    }

    pub fn record_check(&mut self, name: impl Into<String>, passed: bool) {
        self.checks.push(CheckOutcome {
            name: name.into(),
            passed,
        });
    }

    /// Identifier of the validated report, for display only.
    pub fn report(&self) -> &str {
        &self.report
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn messages(&self, severity: Severity) -> &[String] {
        match severity {
            Severity::Error => &self.errors,
            Severity::Warning => &self.warnings,
        }
    }

    pub fn checks(&self) -> &[CheckOutcome] {
        &self.checks
    }

    /// True when no errors were recorded.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Final verdict. In strict mode any warning also fails the report.
    pub fn passes(&self, strict: bool) -> bool {
        self.passed() && !(strict && !self.warnings.is_empty())
    }
}
