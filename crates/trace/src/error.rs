use std::fmt;

/// Errors from parsing a JBMC trace document.
///
/// All of these are fatal for the document: a trace that cannot be read
/// into records cannot be reconstructed. Per-argument reconstruction
/// failures are a separate, recoverable taxonomy in the `jbmc-cex` crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// The document is not well-formed XML.
    Xml(String),
    /// A required element is missing (tag name).
    MissingElement(&'static str),
    /// A required attribute is missing (attribute name).
    MissingAttribute(&'static str),
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::Xml(msg) => write!(f, "Malformed trace XML: {msg}"),
            TraceError::MissingElement(tag) => {
                write!(f, "Trace document missing required element <{tag}>")
            }
            TraceError::MissingAttribute(attr) => {
                write!(f, "Trace document missing required attribute `{attr}`")
            }
        }
    }
}

impl std::error::Error for TraceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_xml() {
        let err = TraceError::Xml("unexpected end of stream".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed trace XML: unexpected end of stream"
        );
    }

    #[test]
    fn display_missing_element() {
        let err = TraceError::MissingElement("failure");
        assert_eq!(
            err.to_string(),
            "Trace document missing required element <failure>"
        );
    }

    #[test]
    fn display_missing_attribute() {
        let err = TraceError::MissingAttribute("base_name");
        assert_eq!(
            err.to_string(),
            "Trace document missing required attribute `base_name`"
        );
    }

    #[test]
    fn error_equality() {
        assert_eq!(
            TraceError::MissingElement("goto_trace"),
            TraceError::MissingElement("goto_trace")
        );
        assert_ne!(
            TraceError::MissingElement("goto_trace"),
            TraceError::MissingAttribute("reason")
        );
    }
}
