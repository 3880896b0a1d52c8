use std::fmt;
use std::path::PathBuf;

/// Errors from JBMC invocation.
///
/// These belong to the orchestration layer and are fatal for the run,
/// unlike per-argument reconstruction errors which are collected as skip
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerError {
    /// JBMC binary not found at the specified path.
    NotFound(PathBuf),
    /// Process failed to start or crashed before producing a trace.
    ProcessError(String),
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerError::NotFound(path) => {
                write!(f, "JBMC binary not found at: {}", path.display())
            }
            RunnerError::ProcessError(msg) => write!(f, "JBMC process error: {msg}"),
        }
    }
}

impl std::error::Error for RunnerError {}
