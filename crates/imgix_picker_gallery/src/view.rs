//! What the gallery should display.

use derive_getters::Getters;
use imgix_picker_core::{Asset, PageInfo, SelectedSource};

/// Placeholders shown instead of the asset grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PlaceholderKind {
    /// Assets are loading, or the previous selection's source is being listed
    #[display("Loading")]
    Loading,
    /// No source has been chosen
    #[display("Select a Source to view your image gallery")]
    NoSource,
    /// The chosen source is a web folder, which cannot be listed
    #[display("Select a different Source to view your visual media.")]
    WebFolder,
    /// The chosen source has no assets
    #[display("Add assets to this Source by selecting Upload.")]
    EmptySource,
}

/// One cell of the asset grid.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct GridTile {
    /// The listed asset
    asset: Asset,
    /// Whether this asset is the current selection
    selected: bool,
}

impl GridTile {
    pub(crate) fn new(asset: Asset, selected: bool) -> Self {
        Self { asset, selected }
    }
}

/// Footer with pagination and the submit/close actions.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ActionBar {
    /// Pagination state forwarded from the listing
    page_info: PageInfo,
    /// Whether a next-page control is enabled
    has_next: bool,
    /// Whether a previous-page control is enabled
    has_previous: bool,
    /// Whether submit would do anything
    can_submit: bool,
    /// Source being listed
    selected_source: SelectedSource,
}

impl ActionBar {
    pub(crate) fn new(page_info: PageInfo, can_submit: bool, selected_source: SelectedSource) -> Self {
        Self {
            page_info,
            has_next: page_info.has_next(),
            has_previous: page_info.has_previous(),
            can_submit,
            selected_source,
        }
    }
}

/// Display state of the gallery.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryView {
    /// A placeholder with guidance text (its `Display`)
    Placeholder(PlaceholderKind),
    /// The asset grid and its footer
    Grid {
        /// Listed assets
        tiles: Vec<GridTile>,
        /// Footer actions
        action_bar: ActionBar,
    },
}
