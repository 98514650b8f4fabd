//! JSON reporter for machine-readable output

use crate::SynthesizedReport;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a single synthesized report as JSON
    pub fn report(&self, report: &SynthesizedReport) -> String {
        if self.pretty {
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Report multiple results as a JSON array
    pub fn report_many(&self, reports: &[SynthesizedReport]) -> String {
        if self.pretty {
            serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(reports).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}
