// authprov-cli/src/audit.rs
// ============================================================================
// Module: Validation Audit Logging
// Description: Structured audit events for validation runs.
// Purpose: Emit one anonymized JSON line per validated request.
// Dependencies: authprov-config, serde, serde_json
// ============================================================================

//! ## Overview
//! Every `authprov validate` run records a [`ValidationAuditEvent`] through a
//! [`ValidationAuditSink`]. Events carry counts and resource paths, never
//! key material. Paths are anonymized unless the config disables it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use authprov_config::AuditConfig;
use authprov_config::AuditSinkKind;
use serde::Serialize;

use crate::anonymize::anonymize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Event identifier for validation runs.
pub const VALIDATION_EVENT: &str = "authprov_validation";

/// Outcome of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// Every change was accepted.
    Accepted,
    /// At least one change was rejected.
    Rejected,
    /// The request document was structurally invalid.
    BadRequest,
}

/// Validation audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Run outcome.
    pub outcome: ValidationOutcome,
    /// HTTP-style status code answered.
    pub status: u16,
    /// Number of changes in the request.
    pub change_count: usize,
    /// Number of related resources in the request.
    pub related_count: usize,
    /// Number of errors reported.
    pub error_count: usize,
    /// Request document size in bytes.
    pub request_bytes: usize,
    /// Resource paths of the requested changes.
    pub resource_paths: Vec<String>,
}

/// Inputs for [`ValidationAuditEvent::new`].
pub struct ValidationAuditEventParams {
    /// Run outcome.
    pub outcome: ValidationOutcome,
    /// HTTP-style status code answered.
    pub status: u16,
    /// Number of changes in the request.
    pub change_count: usize,
    /// Number of related resources in the request.
    pub related_count: usize,
    /// Number of errors reported.
    pub error_count: usize,
    /// Request document size in bytes.
    pub request_bytes: usize,
    /// Raw resource paths of the requested changes.
    pub resource_paths: Vec<String>,
    /// Mask IMSIs in `resource_paths`.
    pub anonymize: bool,
}

impl ValidationAuditEvent {
    /// Creates a new audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: ValidationAuditEventParams) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        let resource_paths = if params.anonymize {
            params.resource_paths.iter().map(|path| anonymize(path)).collect()
        } else {
            params.resource_paths
        };
        Self {
            event: VALIDATION_EVENT,
            timestamp_ms,
            outcome: params.outcome,
            status: params.status,
            change_count: params.change_count,
            related_count: params.related_count,
            error_count: params.error_count,
            request_bytes: params.request_bytes,
            resource_paths,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for validation events.
pub trait ValidationAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &ValidationAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl ValidationAuditSink for StderrAuditSink {
    fn record(&self, event: &ValidationAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl ValidationAuditSink for FileAuditSink {
    fn record(&self, event: &ValidationAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl ValidationAuditSink for NoopAuditSink {
    fn record(&self, _event: &ValidationAuditEvent) {}
}

// ============================================================================
// SECTION: Construction
// ============================================================================

/// Builds the sink selected by the audit config.
///
/// # Errors
///
/// Returns an error when the file sink cannot open its log.
pub fn sink_from_config(config: &AuditConfig) -> io::Result<Box<dyn ValidationAuditSink>> {
    match (config.sink, config.path.as_deref()) {
        (AuditSinkKind::Stderr, _) => Ok(Box::new(StderrAuditSink)),
        (AuditSinkKind::File, Some(path)) => {
            Ok(Box::new(FileAuditSink::new(Path::new(path.trim()))?))
        }
        (AuditSinkKind::File, None) => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "audit.path is required for the file sink",
        )),
        (AuditSinkKind::None, _) => Ok(Box::new(NoopAuditSink)),
    }
}
