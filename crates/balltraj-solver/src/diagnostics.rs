//! Diagnostic messages for failed trajectory updates.

use std::fmt;

use balltraj_core::SolveError;

/// A classified, human-readable diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Failure class, see [`SolveError::kind`].
    pub kind: &'static str,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn from_error(err: &SolveError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Receives diagnostics. Delivery is up to the implementation.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Writes diagnostics to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        eprintln!("balltraj: {diagnostic}");
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
