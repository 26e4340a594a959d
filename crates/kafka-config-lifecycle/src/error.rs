//! Shutdown failure aggregation

use crate::registry::ClientKind;
use std::fmt;
use thiserror::Error;

type BoxedCause = Box<dyn std::error::Error + Send + Sync>;

/// One failed close attempt recorded during a shutdown sweep.
#[derive(Debug)]
pub struct CloseFailure {
    kind: ClientKind,
    source: BoxedCause,
}

impl CloseFailure {
    pub(crate) fn new(kind: ClientKind, source: BoxedCause) -> Self {
        Self { kind, source }
    }

    /// The kind of client whose close failed.
    pub fn kind(&self) -> ClientKind {
        self.kind
    }

    /// The failure returned by the handle's close.
    pub fn source(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.source.as_ref()
    }
}

impl fmt::Display for CloseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} client: {}", self.kind, self.source)
    }
}

/// Aggregate failure raised after a shutdown sweep in which one or more
/// closes failed.
///
/// The sweep always runs to completion first; this error then summarizes
/// it, naming the first recorded cause in its message while keeping every
/// cause reachable through [`failures`](Self::failures).
#[derive(Debug, Error)]
#[error("{summary}")]
pub struct ShutdownError {
    summary: String,
    failures: Vec<CloseFailure>,
}

impl ShutdownError {
    /// Builds the aggregate from the recorded failures.
    ///
    /// Callers only construct this once at least one close failed.
    pub(crate) fn new(failures: Vec<CloseFailure>) -> Self {
        debug_assert!(!failures.is_empty());
        let summary = match failures.first() {
            Some(first) => format!(
                "failed to close {} client(s) during shutdown; first failure: {}",
                failures.len(),
                first
            ),
            None => "failed to close clients during shutdown".to_string(),
        };
        Self { summary, failures }
    }

    /// Every recorded close failure, in the order the sweep hit them.
    pub fn failures(&self) -> &[CloseFailure] {
        &self.failures
    }

    /// The first recorded cause, the one named in the error message.
    pub fn first_cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.failures.first().map(CloseFailure::source)
    }
}
