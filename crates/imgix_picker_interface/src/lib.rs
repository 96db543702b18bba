//! Trait definitions for the imgix picker host ports.
//!
//! The field component and the gallery dialog never talk to a concrete
//! platform SDK. They are written against the capability traits in this crate,
//! which an embedding host implements (and tests implement with fakes).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{DialogService, FieldStorage, HostSdk, MetadataSource, PageNavigator, WindowSurface};
pub use types::{DialogOptions, DialogOptionsBuilder, DialogPosition, InvocationParameters};
