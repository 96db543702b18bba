//! Core data types for the imgix picker.
//!
//! This crate provides the asset model shared by the field component and the
//! gallery dialog, together with the query-string helpers that keep an asset's
//! `src` and its `imgixParams` projection consistent.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset;
mod attributes;
mod media;
mod params;
mod query;
mod source;
mod telemetry;

pub use asset::Asset;
pub use attributes::Attributes;
pub use media::{MediaKind, is_image_like};
pub use params::{ImgixParams, ParamEditAction, ParamEdits, ParamValue, ParamValues};
pub use query::{metadata_url, rewrite_query};
pub use source::{PageInfo, SelectedSource, SourceKind};
pub use telemetry::init_telemetry;
