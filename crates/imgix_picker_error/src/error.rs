//! Top-level error wrapper types.

use crate::{ConfigError, HostError, HttpError, JsonError, UrlError};

/// Every failure the picker can surface to an embedding host.
///
/// # Examples
///
/// ```
/// use imgix_picker_error::{PickerError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: PickerError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PickerErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Asset URL could not be parsed
    #[from(UrlError)]
    Url(UrlError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Host SDK port failure
    #[from(HostError)]
    Host(HostError),
}

/// Picker error with kind discrimination.
///
/// # Examples
///
/// ```
/// use imgix_picker_error::{PickerErrorKind, PickerResult, ConfigError};
///
/// fn might_fail() -> PickerResult<()> {
///     Err(ConfigError::new("dialog width must be positive"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), PickerErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Picker Error: {}", _0)]
pub struct PickerError(Box<PickerErrorKind>);

impl PickerError {
    /// Create a new error from a kind.
    pub fn new(kind: PickerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PickerErrorKind {
        &self.0
    }
}

impl<T> From<T> for PickerError
where
    T: Into<PickerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for picker operations.
pub type PickerResult<T> = std::result::Result<T, PickerError>;
