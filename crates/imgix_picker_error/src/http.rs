//! HTTP error types.

/// HTTP failure talking to the imgix rendering API.
///
/// `status` is set when the server answered with a non-success code and
/// left empty for transport failures (DNS, refused connection, timeout).
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} (status {:?}) at line {} in {}", message, status, line, file)]
pub struct HttpError {
    /// The underlying error message
    pub message: String,
    /// Response status code, if a response was received
    pub status: Option<u16>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a transport-level HttpError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use imgix_picker_error::HttpError;
    ///
    /// let err = HttpError::new("Connection refused");
    /// assert!(err.message.contains("Connection refused"));
    /// assert_eq!(err.status, None);
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create an HttpError for a non-success response.
    ///
    /// ```
    /// use imgix_picker_error::HttpError;
    ///
    /// let err = HttpError::with_status(500, "Internal Server Error");
    /// assert_eq!(err.status, Some(500));
    /// ```
    #[track_caller]
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: Some(status),
            line: location.line(),
            file: location.file(),
        }
    }
}
