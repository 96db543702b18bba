//! Host SDK error types.

/// Failures reported by the host platform capability ports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum HostErrorKind {
    /// Field storage rejected a write
    #[display("Field storage rejected value: {}", _0)]
    FieldStorage(String),
    /// The modal dialog could not be opened
    #[display("Dialog failed to open: {}", _0)]
    Dialog(String),
}

/// Host SDK error with location tracking.
///
/// # Examples
///
/// ```
/// use imgix_picker_error::{HostError, HostErrorKind};
///
/// let err = HostError::new(HostErrorKind::Dialog("iframe detached".to_string()));
/// assert!(format!("{}", err).contains("Dialog failed to open"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Host Error: {} at line {} in {}", kind, line, file)]
pub struct HostError {
    /// The kind of error that occurred
    pub kind: HostErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl HostError {
    /// Create a new host error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: HostErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
