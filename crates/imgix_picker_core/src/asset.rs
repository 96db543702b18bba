//! The selectable asset record.

use crate::{Attributes, ImgixParams, SelectedSource};
use imgix_picker_error::{JsonError, PickerResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A media item picked from an imgix source.
///
/// `src` is the single source of truth for transform parameters;
/// `imgix_params` is a cached projection of its query string. Keys the picker
/// does not model are kept in `extra` and written back untouched.
///
/// # Examples
///
/// ```
/// use imgix_picker_core::Asset;
///
/// let asset = Asset::from_src("https://demo.imgix.net/a.jpg?w=400").unwrap();
/// assert_eq!(asset.usable_src(), Some("https://demo.imgix.net/a.jpg?w=400"));
/// assert!(asset.imgix_params.contains_key("w"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Asset {
    /// Rendering URL including transform parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Query parameters of `src`, grouped by key
    #[serde(rename = "imgixParams", default)]
    pub imgix_params: ImgixParams,
    /// Content type and source metadata
    #[serde(default)]
    pub attributes: Attributes,
    /// Source the asset was picked from
    #[serde(
        rename = "selectedSource",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_source: Option<SelectedSource>,
    /// Raw origin-asset URL some host payloads carry instead of `src`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    /// Unmodelled keys, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Asset {
    /// Builds an asset from a rendering URL, deriving its params.
    ///
    /// # Errors
    ///
    /// Returns a `UrlError` if `src` is not an absolute URL.
    pub fn from_src(src: impl Into<String>) -> PickerResult<Self> {
        let src = src.into();
        let imgix_params = ImgixParams::from_src(&src)?;
        Ok(Self {
            src: Some(src),
            imgix_params,
            ..Self::default()
        })
    }

    /// Deserializes a host payload object.
    ///
    /// # Errors
    ///
    /// Returns a `JsonError` if `value` is not an asset-shaped object.
    pub fn from_value(value: Value) -> PickerResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| JsonError::new(format!("Failed to parse asset: {}", e)).into())
    }

    /// Serializes the asset for the host.
    ///
    /// # Errors
    ///
    /// Returns a `JsonError` if serialization fails.
    pub fn to_value(&self) -> PickerResult<Value> {
        serde_json::to_value(self)
            .map_err(|e| JsonError::new(format!("Failed to serialize asset: {}", e)).into())
    }

    /// `src` if it is present and non-empty.
    pub fn usable_src(&self) -> Option<&str> {
        self.src.as_deref().filter(|s| !s.is_empty())
    }

    /// Whether `other` renders the same URL.
    pub fn same_src(&self, other: &Asset) -> bool {
        self.usable_src().is_some() && self.usable_src() == other.usable_src()
    }
}
