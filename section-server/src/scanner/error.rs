//! Scanner error types.

/// Errors that stop a scan before it can report a result.
///
/// A scan that finds no matching record is not an error; it returns an
/// empty list instead.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The data file could not be opened or read
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed XML
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Character data is not valid UTF-8
    #[error("invalid UTF-8 in character data: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Input ended before the document was complete
    #[error("unexpected end of document ({open_elements} elements still open)")]
    UnexpectedEof { open_elements: usize },

    /// A text-only field contained a child element
    #[error("element <{element}> must contain text only")]
    NestedElement { element: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ScanError::NestedElement {
            element: "trainNumber".into(),
        };
        assert_eq!(err.to_string(), "element <trainNumber> must contain text only");

        let err = ScanError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(err.to_string().starts_with("failed to read data file"));
        assert!(err.to_string().contains("denied"));

        let err = ScanError::UnexpectedEof { open_elements: 2 };
        assert_eq!(
            err.to_string(),
            "unexpected end of document (2 elements still open)"
        );
    }
}
