//! Asset sources and pagination state.

use serde::{Deserialize, Serialize};

/// Storage backend type of an imgix source.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SourceKind {
    /// Amazon S3 bucket
    S3,
    /// Google Cloud Storage bucket
    Gcs,
    /// Azure blob container
    Azure,
    /// Web folder; not listable by the gallery
    WebFolder,
    /// Web proxy
    WebProxy,
    /// Any type this build does not know about
    #[serde(other)]
    Unknown,
}

/// The source the gallery is currently listing.
///
/// Identity is the `id`; two values with the same id refer to the same source
/// even if the name changed.
///
/// # Examples
///
/// ```
/// use imgix_picker_core::{SelectedSource, SourceKind};
///
/// let source: SelectedSource = serde_json::from_value(serde_json::json!({
///     "id": "5f3a",
///     "name": "marketing",
///     "type": "webfolder"
/// })).unwrap();
/// assert_eq!(source.kind, Some(SourceKind::WebFolder));
/// assert!(!source.is_listable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectedSource {
    /// Source identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Backend type; unset until a source is chosen
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SourceKind>,
}

impl SelectedSource {
    /// Whether the user has chosen a source.
    pub fn is_chosen(&self) -> bool {
        self.kind.is_some()
    }

    /// Whether the gallery can list assets from this source.
    pub fn is_listable(&self) -> bool {
        !matches!(self.kind, None | Some(SourceKind::WebFolder))
    }

    /// Whether `other` refers to the same source.
    pub fn same_source(&self, other: &SelectedSource) -> bool {
        self.id == other.id
    }
}

/// Pagination state of the gallery listing.
///
/// Owned by the host listing; the gallery only reads it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Zero-based index of the page on screen
    current_index: usize,
    /// Number of pages available
    total_page_count: usize,
    /// Assets per page
    page_size: usize,
}

impl PageInfo {
    /// Creates pagination state.
    pub fn new(current_index: usize, total_page_count: usize, page_size: usize) -> Self {
        Self {
            current_index,
            total_page_count,
            page_size,
        }
    }

    /// Whether a page follows the current one.
    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.total_page_count
    }

    /// Whether a page precedes the current one.
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Whether `index` names an existing page.
    pub fn contains(&self, index: usize) -> bool {
        index < self.total_page_count
    }
}
