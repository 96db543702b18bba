//! imgix picker - CMS field extension for imgix assets
//!
//! The picker lets an editor choose an image or video from an imgix source,
//! store it in a content field, and tune the transform parameters encoded in
//! its rendering URL.
//!
//! # Features
//!
//! - **Param sync**: Checklist edits rewrite the asset's `src` query string and
//!   its `imgixParams` projection together
//! - **Coalesced dialogs**: Repeated open requests while the picker is showing
//!   collapse into one
//! - **Gallery submit**: The chosen asset is enriched from the rendering API's
//!   JSON descriptor before it is handed back
//! - **Layered config**: Bundled TOML defaults with user overrides
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use imgix_picker::{FieldController, ParamEdits, ParamEditAction, PickerConfig, init_telemetry};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     init_telemetry()?;
//!     let host = Arc::new(MyHost::connect());
//!     let field = FieldController::mount(host, PickerConfig::load()?);
//!
//!     field.open_dialog().await?;
//!     field
//!         .update_params(&ParamEdits::new().with("auto", "format"), ParamEditAction::Add)
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The picker is organized as a workspace with focused crates:
//!
//! - `imgix_picker_error` - Error types
//! - `imgix_picker_core` - Asset model, query rewriting, telemetry setup
//! - `imgix_picker_interface` - Host capability traits and dialog types
//! - `imgix_picker_config` - TOML configuration
//! - `imgix_picker_field` - Field component state
//! - `imgix_picker_gallery` - Gallery dialog state and metadata client
//!
//! This crate (`imgix_picker`) re-exports everything for convenience.

#![forbid(unsafe_code)]

pub use imgix_picker_config::*;
pub use imgix_picker_core::*;
pub use imgix_picker_error::*;
pub use imgix_picker_field::*;
pub use imgix_picker_gallery::*;
pub use imgix_picker_interface::*;
