//! Types exchanged with the host platform.

use derive_getters::Getters;
use imgix_picker_core::Asset;
use serde::{Deserialize, Serialize};

/// Vertical placement of the modal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DialogPosition {
    /// Pinned to the top of the viewport
    #[default]
    Top,
    /// Vertically centred
    Center,
}

/// Parameters the field passes to the picker dialog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationParameters {
    /// Asset currently stored in the field, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_image: Option<Asset>,
}

/// Geometry and parameters of a dialog open request.
///
/// # Examples
///
/// ```
/// use imgix_picker_interface::{DialogOptions, DialogPosition, InvocationParameters};
///
/// let options = DialogOptions::builder()
///     .width(1200u32)
///     .min_height(660u32)
///     .position(DialogPosition::Top)
///     .parameters(InvocationParameters::default())
///     .build()
///     .unwrap();
/// assert_eq!(*options.width(), 1200);
/// assert!(*options.should_close_on_overlay_click());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct DialogOptions {
    /// Dialog width in pixels
    width: u32,
    /// Minimum dialog height in pixels
    min_height: u32,
    /// Vertical placement
    #[builder(default)]
    position: DialogPosition,
    /// Close when the overlay is clicked
    #[builder(default = "true")]
    should_close_on_overlay_click: bool,
    /// Let the dialog grow past the viewport
    #[builder(default = "true")]
    allow_height_overflow: bool,
    /// Parameters forwarded to the dialog
    #[builder(default)]
    parameters: InvocationParameters,
}

impl DialogOptions {
    /// Creates a builder.
    pub fn builder() -> DialogOptionsBuilder {
        DialogOptionsBuilder::default()
    }
}
