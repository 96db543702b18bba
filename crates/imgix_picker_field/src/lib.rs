//! Field component state for the imgix picker.
//!
//! [`FieldController`] owns the asset stored in a content field. It keeps the
//! asset's `src` and `imgixParams` consistent while the editor toggles
//! transform parameters, opens the picker dialog (one at a time), and writes
//! every committed change back through the host's field storage.
//!
//! Host payloads come in more than one shape. [`normalize_selection`] is the
//! only place that deals with that; everything past it works on a bare
//! [`Asset`](imgix_picker_core::Asset).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod controller;
mod normalize;
mod view;

pub use controller::{DialogOutcome, FieldController, ParamUpdate};
pub use normalize::normalize_selection;
pub use view::{AssetPreview, FieldView};
