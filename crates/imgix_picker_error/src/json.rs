//! Payload decoding errors.

/// An asset payload or metadata descriptor that is not the JSON we expect.
///
/// Raised when a host value cannot be read as an asset, when an asset cannot
/// be written back, or when the rendering API returns a body that is not a
/// JSON object.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// What could not be decoded or encoded
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl JsonError {
    /// Records a decoding failure at the caller's location.
    ///
    /// ```
    /// use imgix_picker_error::JsonError;
    ///
    /// let err = JsonError::new("Metadata is not a JSON object: [1,2]");
    /// assert!(err.to_string().starts_with("JSON Error: Metadata"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
