//! Gallery dialog state for the imgix picker.
//!
//! [`Gallery`] tracks which asset the editor clicked, enriches it with the
//! rendering API's metadata on submit, flattens the nested attributes the host
//! cannot store, and closes the dialog with the configured payload shape.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attributes;
mod gallery;
mod metadata;
mod view;

pub use attributes::{merge_metadata, stringify_json_fields};
pub use gallery::{Gallery, GalleryProps, SubmitOutcome};
pub use metadata::ImgixMetadataClient;
pub use view::{ActionBar, GalleryView, GridTile, PlaceholderKind};
