//! Capability traits implemented by the host platform.

use crate::{DialogOptions, InvocationParameters};
use async_trait::async_trait;
use imgix_picker_core::Asset;
use imgix_picker_error::PickerResult;
use serde_json::{Map, Value};

/// Storage backing the content field.
///
/// The field component reads once when it mounts and writes after every
/// committed change to the selected asset.
#[async_trait]
pub trait FieldStorage: Send + Sync {
    /// The stored value, in whatever shape the host kept it.
    fn get_value(&self) -> Option<Value>;

    /// Replaces the stored value; `None` clears the field.
    async fn set_value(&self, value: Option<&Asset>) -> PickerResult<()>;
}

/// Modal dialog service.
#[async_trait]
pub trait DialogService: Send + Sync {
    /// Opens the picker dialog and resolves with what the dialog closed with.
    ///
    /// `None` means the dialog was dismissed. The payload may be a bare asset
    /// or a list-wrapped one depending on the host.
    async fn open_dialog(&self, options: DialogOptions) -> PickerResult<Option<Value>>;

    /// Closes the current dialog, handing `payload` to whoever opened it.
    fn close(&self, payload: Option<Value>);

    /// Parameters the dialog was opened with.
    fn invocation_parameters(&self) -> InvocationParameters {
        InvocationParameters::default()
    }
}

/// Window sizing hook of the field iframe.
pub trait WindowSurface: Send + Sync {
    /// Requests a new height; `None` asks the host to measure the content.
    fn update_height(&self, height: Option<u32>);
}

/// Everything the field component needs from its host.
pub trait HostSdk: FieldStorage + DialogService + WindowSurface {}

impl<T> HostSdk for T where T: FieldStorage + DialogService + WindowSurface {}

/// Moves the gallery listing to another page.
pub trait PageNavigator: Send + Sync {
    /// Requests page `index` (zero-based).
    fn change_page(&self, index: usize);
}

/// Source of supplementary asset metadata.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Metadata describing the asset at `src`.
    ///
    /// Best effort: implementations return an empty map on any failure.
    async fn asset_metadata(&self, src: &str) -> Map<String, Value>;
}
