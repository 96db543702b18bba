//! What the field should display.

use derive_getters::Getters;
use imgix_picker_core::{Asset, ImgixParams, is_image_like};

/// Display state of the field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldView {
    /// Nothing usable is stored; prompt the editor to pick an asset.
    Prompt,
    /// An asset is stored; show it.
    Preview(AssetPreview),
}

/// Preview of the stored asset.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct AssetPreview {
    /// Content type of the asset
    content_type: String,
    /// Rendering URL
    src: String,
    /// Parameters currently applied
    imgix_params: ImgixParams,
    /// Whether the parameter checklist is offered
    editable_params: bool,
}

impl FieldView {
    /// Derives the view from the current selection.
    pub fn from_selection(selection: Option<&Asset>) -> Self {
        let Some(asset) = selection else {
            return FieldView::Prompt;
        };
        let Some(src) = asset.usable_src() else {
            return FieldView::Prompt;
        };
        let content_type = asset.attributes.content_type().unwrap_or_default();
        FieldView::Preview(AssetPreview {
            content_type: content_type.to_string(),
            src: src.to_string(),
            imgix_params: asset.imgix_params.clone(),
            editable_params: is_image_like(content_type),
        })
    }
}
