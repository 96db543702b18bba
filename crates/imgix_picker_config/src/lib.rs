//! Configuration for the imgix picker.
//!
//! Settings come from TOML with a precedence system:
//! - Bundled defaults (`include_str!` of `imgix_picker.toml`)
//! - `~/.config/imgix_picker/imgix_picker.toml`
//! - `./imgix_picker.toml`

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{
    DialogConfig, GalleryConfig, MediaConfig, MetadataConfig, PickerConfig, SubmitProfile,
};
