//! Rendering of validation results for the terminal or for machines.

use clap::ValueEnum;
use serde::Serialize;

use veoprompt::{Severity, TabStatuses, ValidationFinding, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// One JSON object
    Json,
}

/// Everything one run prints.
pub struct Report<'a> {
    pub source: String,
    pub result: &'a ValidationResult,
    pub tabs: Option<&'a TabStatuses>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    is_valid: bool,
    summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    findings: Option<&'a [ValidationFinding]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tabs: Option<&'a TabStatuses>,
}

fn marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "✗ error  ",
        Severity::Warning => "! warning",
        Severity::Info => "· info   ",
    }
}

impl Report<'_> {
    pub fn render(&self, format: OutputFormat, summary_only: bool) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text(summary_only)),
            OutputFormat::Json => self.render_json(summary_only),
        }
    }

    fn render_text(&self, summary_only: bool) -> String {
        let status = if self.result.is_valid { "valid" } else { "invalid" };
        let mut lines = vec![format!(
            "{}: {} ({})",
            self.source,
            self.result.summary(),
            status
        )];
        if summary_only {
            return lines.join("\n");
        }

        for finding in &self.result.findings {
            lines.push(format!(
                "  {} {}: {}",
                marker(finding.severity),
                finding.field,
                finding.message
            ));
        }

        if let Some(tabs) = self.tabs {
            lines.push(String::new());
            lines.push("Sections:".to_string());
            for (section, status) in tabs.iter() {
                lines.push(format!("  {:<15} {:?}", section.as_str(), status));
            }
        }

        lines.join("\n")
    }

    fn render_json(&self, summary_only: bool) -> serde_json::Result<String> {
        let report = JsonReport {
            source: &self.source,
            is_valid: self.result.is_valid,
            summary: self.result.summary(),
            findings: (!summary_only).then_some(self.result.findings.as_slice()),
            tabs: if summary_only { None } else { self.tabs },
        };
        serde_json::to_string_pretty(&report)
    }
}
