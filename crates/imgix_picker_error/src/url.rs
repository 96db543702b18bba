//! Asset URL error types.

/// An asset `src` that could not be parsed as an absolute URL.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("URL Error: {} ({:?}) at line {} in {}", message, input, line, file)]
pub struct UrlError {
    /// Why parsing failed
    pub message: String,
    /// The rejected input, if one was available
    pub input: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl UrlError {
    /// Create a new UrlError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use imgix_picker_error::UrlError;
    ///
    /// let err = UrlError::new("relative URL without a base");
    /// assert!(err.message.contains("relative URL"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            input: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a UrlError that records the offending input.
    #[track_caller]
    pub fn for_input(input: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            input: Some(input.into()),
            line: location.line(),
            file: location.file(),
        }
    }
}
