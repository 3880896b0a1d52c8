use std::fmt;

/// Errors from reconstructing one top-level argument.
///
/// Both variants are recoverable at the granularity of a single argument
/// within a single failing execution: the assembler records the error as a
/// skip diagnostic and continues with sibling arguments and subsequent
/// executions. Nothing here is fatal to the overall run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CexError {
    /// Type descriptor not recognized by the classifier.
    UnsupportedType(String),
    /// Expected structural record missing, dereference chain unterminated,
    /// or an array/string literal that cannot be parsed.
    MalformedTrace(String),
}

impl fmt::Display for CexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CexError::UnsupportedType(ty) => write!(f, "Unsupported type descriptor: `{ty}`"),
            CexError::MalformedTrace(msg) => write!(f, "Malformed trace: {msg}"),
        }
    }
}

impl std::error::Error for CexError {}
