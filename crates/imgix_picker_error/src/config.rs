//! Configuration error types.

/// Picker settings that failed to load or validate.
///
/// `key` names the offending setting (for example `dialog.width`) when a
/// single value is at fault; file and parse failures leave it empty.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} (key {:?}) at line {} in {}", message, key, line, file)]
pub struct ConfigError {
    /// Why the configuration was rejected
    pub message: String,
    /// Dotted path of the rejected setting
    pub key: Option<String>,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// A load or parse failure not tied to one setting.
    ///
    /// ```
    /// use imgix_picker_error::ConfigError;
    ///
    /// let err = ConfigError::new("Failed to parse configuration");
    /// assert_eq!(err.key, None);
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self::located(None, message.into())
    }

    /// A setting whose value is out of range.
    ///
    /// ```
    /// use imgix_picker_error::ConfigError;
    ///
    /// let err = ConfigError::for_key("dialog.width", "must be positive");
    /// assert_eq!(err.key.as_deref(), Some("dialog.width"));
    /// assert!(err.to_string().contains("dialog.width"));
    /// ```
    #[track_caller]
    pub fn for_key(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::located(Some(key.into()), message.into())
    }

    #[track_caller]
    fn located(key: Option<String>, message: String) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message,
            key,
            line: location.line(),
            file: location.file(),
        }
    }
}
