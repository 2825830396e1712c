//! Diagnostic trap
//!
//! Pre-emission diagnostics are advisory. They are flattened to plain text and
//! handed to a [`DiagnosticSink`], one message per diagnostic, and never change
//! the outcome of a run.

use crate::program::{CompilationUnit, Diagnostic};
use parking_lot::Mutex;
use tracing::{error, warn};

/// Receives one flattened message per diagnostic
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic, message: &str);
}

/// Default sink: errors at `error!`, everything else at `warn!`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic, message: &str) {
        if diagnostic.is_error() {
            error!(code = diagnostic.code, "{}", message);
        } else {
            warn!(code = diagnostic.code, "{}", message);
        }
    }
}

/// Plain text on stderr, one line per diagnostic
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&self, _diagnostic: &Diagnostic, message: &str) {
        eprintln!("{}", message);
    }
}

/// Keeps every message in memory, for embedding callers and tests
#[derive(Debug, Default)]
pub struct CollectingSink {
    messages: Mutex<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock())
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, _diagnostic: &Diagnostic, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

/// `path(line,col): message`, with chained detail lines indented below
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    format!(
        "{}({},{}): {}",
        crate::utils::paths::to_unix_style(&diagnostic.file),
        diagnostic.line,
        diagnostic.column + 1,
        diagnostic.flatten_message_text("\n")
    )
}

/// Emit every pre-emission diagnostic of `unit`; returns how many were emitted
pub fn trap_diagnostics(unit: &CompilationUnit, sink: &dyn DiagnosticSink) -> usize {
    let diagnostics = unit.pre_emit_diagnostics();

    for diagnostic in diagnostics {
        sink.emit(diagnostic, &format_diagnostic(diagnostic));
    }

    diagnostics.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_trap_emits_one_message_per_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.ts");
        fs::write(&path, "interface A {\n  b: Missing;\n  c: AlsoMissing;\n}\n").unwrap();
        let unit = CompilationUnit::build(&[path.clone()]).unwrap();
        let sink = CollectingSink::new();

        let count = trap_diagnostics(&unit, &sink);

        let messages = sink.messages();
        assert_eq!(count, 2);
        assert_eq!(messages.len(), 2);
        let prefix = crate::utils::paths::to_unix_style(&path);
        assert_eq!(
            messages[0],
            format!("{}(2,6): Cannot find name 'Missing'.", prefix)
        );
        assert!(messages[1].ends_with("Cannot find name 'AlsoMissing'."));
    }

    #[test]
    fn test_trap_is_silent_for_clean_units() {
        let unit = CompilationUnit::build(&[]).unwrap();
        let sink = CollectingSink::new();

        assert_eq!(trap_diagnostics(&unit, &sink), 0);
        assert!(sink.take().is_empty());
    }
}
