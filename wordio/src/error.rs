use std::fmt;

/// Error returned when a byte slice does not have the exact length of a fixed-width value.
pub struct Error {
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new `Error` with the given message.
    pub fn new<S>(message: S) -> Self
    where
        S: ToString,
    {
        Self {
            message: message.to_string(),
            source: None,
        }
    }

    /// Creates a new `Error` with a custom message and a source error value.
    pub fn with_context<S, E>(message: S, error: E) -> Self
    where
        S: ToString,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: message.to_string(),
            source: Some(Box::new(error)),
        }
    }

    pub(crate) fn length_mismatch<E>(expected: usize, actual: usize, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::with_context(
            format!("length mismatch: expected {} bytes, got {}", expected, actual),
            error,
        )
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // defer to Display
        write!(f, "{}", self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref().map(|e| e as _)
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::convert::TryFrom;
    use std::error::Error as _;

    #[test]
    fn length_mismatch_keeps_source() {
        let source = <[u8; 4]>::try_from(&[0u8; 3][..]).unwrap_err();
        let error = Error::length_mismatch(4, 3, source);
        assert_eq!(error.to_string(), "length mismatch: expected 4 bytes, got 3");
        assert_eq!(format!("{:?}", error), error.to_string());
        assert!(error.source().is_some());
    }

    #[test]
    fn with_context_keeps_message_and_source() {
        let source = <[u8; 8]>::try_from(&[0u8; 2][..]).unwrap_err();
        let error = Error::with_context("bad block", source);
        assert_eq!(error.to_string(), "bad block");
        assert_eq!(
            error.source().map(|e| e.to_string()),
            Some("could not convert slice to array".to_string())
        );
    }

    #[test]
    fn new_has_no_source() {
        let error = Error::new("boom");
        assert_eq!(error.to_string(), "boom");
        assert!(error.source().is_none());
    }
}
