//! Diagnostics sinks.

use std::sync::Mutex;

use crate::infrastructure::ports::{Diagnostic, DiagnosticsPort, Severity};

/// Forwards diagnostics to `tracing`.
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingDiagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsPort for TracingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Info => tracing::info!(kind = diagnostic.kind(), "{diagnostic}"),
            Severity::Warning => tracing::warn!(kind = diagnostic.kind(), "{diagnostic}"),
        }
    }
}

/// Keeps every diagnostic in memory, for callers that want to report them
/// together (and for tests).
#[derive(Default)]
pub struct RecordingDiagnostics {
    recorded: Mutex<Vec<Diagnostic>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<Diagnostic> {
        self.recorded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn warnings(&self) -> Vec<Diagnostic> {
        self.recorded()
            .into_iter()
            .filter(|d| d.severity() == Severity::Warning)
            .collect()
    }
}

impl DiagnosticsPort for RecordingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        self.recorded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(diagnostic);
    }
}
