//! Error types for the imgix picker.
//!
//! This crate provides the foundation error types used throughout the picker
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind (or a message) with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Missing preconditions (no selected asset, empty `src`) are not errors at all;
//! the components report them as outcome values instead.
//!
//! # Examples
//!
//! ```
//! use imgix_picker_error::{PickerResult, UrlError};
//!
//! fn parse_src(src: &str) -> PickerResult<()> {
//!     if src.is_empty() {
//!         Err(UrlError::new("empty asset URL"))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(parse_src("").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod host;
mod http;
mod json;
mod url;

pub use config::ConfigError;
pub use error::{PickerError, PickerErrorKind, PickerResult};
pub use host::{HostError, HostErrorKind};
pub use http::HttpError;
pub use json::JsonError;
pub use url::UrlError;
