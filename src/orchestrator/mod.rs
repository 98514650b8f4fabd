//! Orchestration: route a request, invoke the selected analyzers in
//! isolation, and synthesize one prioritized report. A single analyzer's
//! panic or timeout surfaces as a per-analyzer failure and never aborts its
//! siblings or the request.

mod synthesis;

use crate::analyzer::{default_analyzers, TextAnalyzer};
use crate::audit::{self, AuditEntry, ExecutionStatus};
use crate::router::IntentRouter;
use crate::{AnalyzerFailure, AnalyzerKind, AnalyzerReport, SynthesizedReport};
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default per-analyzer timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Invokes analyzers for one request and owns the aggregation buffer.
/// Analyzers are pure functions of their input text, so one orchestrator can
/// be shared across threads and requests.
pub struct Orchestrator {
    analyzers: Vec<Arc<dyn TextAnalyzer>>,
    router: IntentRouter,
    timeout: Duration,
    audit: bool,
    audit_file: Option<PathBuf>,
}

impl Orchestrator {
    /// Orchestrator over the default four analyzers
    pub fn new() -> Self {
        Self {
            analyzers: default_analyzers(),
            router: IntentRouter::new(),
            timeout: DEFAULT_TIMEOUT,
            audit: false,
            audit_file: None,
        }
    }

    /// Replace the analyzer set (used by tests and embedders)
    pub fn with_analyzers(mut self, analyzers: Vec<Arc<dyn TextAnalyzer>>) -> Self {
        self.analyzers = analyzers;
        self
    }

    /// Override the per-analyzer timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Record an audit entry per invocation and attach the log to the report
    pub fn with_audit(mut self) -> Self {
        self.audit = true;
        self
    }

    /// Also append audit entries to a JSON-lines file (best-effort)
    pub fn with_audit_file(mut self, path: PathBuf) -> Self {
        self.audit = true;
        self.audit_file = Some(path);
        self
    }

    /// Run one analysis request: route, invoke in isolation, synthesize.
    /// Always returns a report; partial failure shows up in
    /// `analyzer_reports`, never as an error.
    pub fn run(&self, request: &str, text: &str) -> SynthesizedReport {
        let kinds = self.router.route(request);
        let execution_id = self.audit.then(audit::execution_id);

        // Spawn every selected analyzer up front; each gets its own channel
        // so a stuck invocation can be abandoned without blocking the rest.
        let mut pending = Vec::new();
        for kind in kinds {
            let Some(analyzer) = self.analyzers.iter().find(|a| a.kind() == kind) else {
                continue;
            };
            let analyzer = Arc::clone(analyzer);
            let text = text.to_string();
            let (tx, rx) = mpsc::channel();
            thread::spawn(move || {
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| analyzer.analyze(&text)));
                let _ = tx.send(outcome);
            });
            pending.push((kind, rx, Instant::now(), audit::timestamp()));
        }

        let mut reports = BTreeMap::new();
        let mut entries = Vec::new();
        for (kind, rx, started, timestamp) in pending {
            let remaining = self.timeout.saturating_sub(started.elapsed());
            let report = match rx.recv_timeout(remaining) {
                Ok(Ok(report)) => report,
                Ok(Err(payload)) => AnalyzerReport::Failed(AnalyzerFailure {
                    analyzer_name: kind,
                    error: panic_message(payload.as_ref()),
                }),
                Err(RecvTimeoutError::Timeout) => AnalyzerReport::Failed(AnalyzerFailure {
                    analyzer_name: kind,
                    error: format!("timed out after {}ms", self.timeout.as_millis()),
                }),
                Err(RecvTimeoutError::Disconnected) => AnalyzerReport::Failed(AnalyzerFailure {
                    analyzer_name: kind,
                    error: "analyzer terminated without producing a result".to_string(),
                }),
            };

            if let Some(id) = &execution_id {
                entries.push(AuditEntry {
                    execution_id: id.clone(),
                    analyzer_name: kind.to_string(),
                    timestamp,
                    duration_ms: started.elapsed().as_millis() as u64,
                    status: if report.is_failed() {
                        ExecutionStatus::Failed
                    } else {
                        ExecutionStatus::Success
                    },
                    error: match &report {
                        AnalyzerReport::Failed(f) => Some(f.error.clone()),
                        _ => None,
                    },
                });
            }

            reports.insert(kind, report);
        }

        if let Some(path) = &self.audit_file {
            audit::append_jsonl(path, &entries);
        }

        let key_findings = synthesis::key_findings(&reports);
        let recommendations = synthesis::recommendations(&reports);

        SynthesizedReport {
            execution_id,
            key_findings,
            recommendations,
            analyzer_reports: reports,
            log_entries: self.audit.then_some(entries),
        }
    }

    /// Analyze several texts under the same request, in parallel
    pub fn run_many(&self, request: &str, texts: &[String]) -> Vec<SynthesizedReport> {
        use rayon::prelude::*;

        texts.par_iter().map(|t| self.run(request, t)).collect()
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable message from a caught panic payload
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "analyzer panicked".to_string()
    }
}
