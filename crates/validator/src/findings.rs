//! Validation findings and the aggregated report

use serde::Serialize;

/// Severity of a single validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation finding
///
/// Each finding records the rule that produced it, its severity, the
/// slash-joined location in the document it applies to, and a
/// human-readable message.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Rule group that produced the finding (e.g., "paths", "refs")
    pub rule: &'static str,

    /// Severity of the finding
    pub severity: Severity,

    /// Slash-joined key/index trail locating the finding, empty for
    /// document-level findings
    pub context: String,

    /// Human-readable message
    pub message: String,
}

impl Finding {
    pub fn error(rule: &'static str, context: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Error,
            context: context.into(),
            message: message.into(),
        }
    }

    pub fn warning(
        rule: &'static str,
        context: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule,
            severity: Severity::Warning,
            context: context.into(),
            message: message.into(),
        }
    }

    /// Flattened message text, prefixed with the location when one exists
    pub fn render(&self) -> String {
        if self.context.is_empty() {
            self.message.clone()
        } else {
            format!("{}: {}", self.context, self.message)
        }
    }
}

/// Aggregated validation verdict
///
/// `errors` and `warnings` preserve the flattened message text of each
/// finding in the order the rules produced them; `findings` carries the
/// structured records.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub passed: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let errors: Vec<String> = findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .map(Finding::render)
            .collect();
        let warnings: Vec<String> = findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .map(Finding::render)
            .collect();

        Self {
            passed: errors.is_empty(),
            error_count: errors.len(),
            warning_count: warnings.len(),
            errors,
            warnings,
            findings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_match_lists() {
        let report = ValidationReport::from_findings(vec![
            Finding::error("info", "info/title", "Missing or blank 'title'"),
            Finding::warning("servers", "servers", "No servers defined"),
            Finding::warning("operations", "paths//a/get", "Missing or blank operationId"),
        ]);

        assert!(!report.passed);
        assert_eq!(report.error_count, 1);
        assert_eq!(report.warning_count, 2);
        assert_eq!(report.errors.len(), report.error_count);
        assert_eq!(report.warnings.len(), report.warning_count);
    }

    #[test]
    fn test_render_prefixes_context() {
        let finding = Finding::error("info", "info/title", "Missing or blank 'title'");
        assert_eq!(finding.render(), "info/title: Missing or blank 'title'");

        let document_level = Finding::error("document", "", "Document must be a JSON object");
        assert_eq!(document_level.render(), "Document must be a JSON object");
    }

    #[test]
    fn test_empty_findings_pass() {
        let report = ValidationReport::from_findings(Vec::new());
        assert!(report.passed);
        assert_eq!(report.error_count, 0);
        assert_eq!(report.warning_count, 0);
    }
}
