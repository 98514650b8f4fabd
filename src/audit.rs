//! Execution audit trail: one append-only entry per analyzer invocation,
//! for external observability tooling. Best-effort only; recording must
//! never change the synthesized report.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Invocation outcome as recorded in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExecutionStatus {
    Success,
    Failed,
}

/// One analyzer invocation record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    /// Shared id for all invocations of one request
    pub execution_id: String,
    pub analyzer_name: String,
    /// RFC 3339 invocation start time
    pub timestamp: String,
    pub duration_ms: u64,
    pub status: ExecutionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Short unique id for one orchestrator run: the first 8 hex chars of a
/// SHA-256 over the current timestamp.
pub fn execution_id() -> String {
    let mut hasher = Sha256::new();
    hasher.update(Utc::now().to_rfc3339().as_bytes());
    hex::encode(hasher.finalize())[..8].to_string()
}

/// Current time in the format log entries carry
pub fn timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// Append entries to a JSON-lines file. Errors are swallowed: the log is an
/// observability sink, not part of the analysis contract.
pub fn append_jsonl(path: &Path, entries: &[AuditEntry]) {
    let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    for entry in entries {
        if let Ok(line) = serde_json::to_string(entry) {
            let _ = writeln!(file, "{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_id_is_short_hex() {
        let id = execution_id();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn entry_serializes_status_uppercase() {
        let entry = AuditEntry {
            execution_id: "abcd1234".to_string(),
            analyzer_name: "grammar".to_string(),
            timestamp: timestamp(),
            duration_ms: 3,
            status: ExecutionStatus::Success,
            error: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"status\":\"SUCCESS\""));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn append_writes_one_line_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");
        let entry = AuditEntry {
            execution_id: "abcd1234".to_string(),
            analyzer_name: "seo".to_string(),
            timestamp: timestamp(),
            duration_ms: 1,
            status: ExecutionStatus::Failed,
            error: Some("timed out".to_string()),
        };
        append_jsonl(&path, &[entry.clone(), entry]);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        let parsed: AuditEntry = serde_json::from_str(content.lines().next().unwrap()).unwrap();
        assert_eq!(parsed.status, ExecutionStatus::Failed);
    }
}
