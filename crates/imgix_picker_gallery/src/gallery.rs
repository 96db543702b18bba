//! The gallery state container.

use crate::{ActionBar, GalleryView, GridTile, PlaceholderKind, merge_metadata, stringify_json_fields};
use imgix_picker_config::{PickerConfig, SubmitProfile};
use imgix_picker_core::{Asset, PageInfo, SelectedSource};
use imgix_picker_error::PickerResult;
use imgix_picker_interface::{DialogService, MetadataSource, PageNavigator};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// Inputs the gallery receives from the listing around it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryProps {
    /// Source being listed
    pub selected_source: SelectedSource,
    /// Assets on the current page
    pub assets: Vec<Asset>,
    /// Pagination state
    pub page_info: PageInfo,
    /// Whether the listing is still loading
    pub loading: bool,
}

/// Result of [`Gallery::handle_submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing with a usable `src` was selected.
    Skipped,
    /// The selection changed while metadata was loading; the dialog stays open.
    Stale,
    /// The dialog was closed with this payload.
    Submitted(Value),
}

#[derive(Debug, Default)]
struct GalleryState {
    props: GalleryProps,
    selection: Option<Asset>,
    /// Bumped on every selection change so in-flight submits can detect it.
    generation: u64,
}

impl GalleryState {
    /// Replaces the selection. Re-selecting the same `src` keeps the
    /// generation, so a submit already in flight still completes.
    fn select(&mut self, selection: Option<Asset>) {
        let current = self.selection.as_ref().and_then(Asset::usable_src);
        let next = selection.as_ref().and_then(Asset::usable_src);
        if selection.is_none() || current != next {
            self.generation += 1;
        }
        self.selection = selection;
    }
}

/// State container of the picker dialog's gallery.
pub struct Gallery<D, M> {
    dialog: Arc<D>,
    metadata: Arc<M>,
    navigator: Option<Arc<dyn PageNavigator>>,
    config: PickerConfig,
    previous_source: Option<SelectedSource>,
    state: Mutex<GalleryState>,
}

impl<D: DialogService, M: MetadataSource> Gallery<D, M> {
    /// Initializes the gallery with its first props.
    ///
    /// The source of the asset the field already holds is read once from the
    /// dialog's invocation parameters.
    pub fn new(dialog: Arc<D>, metadata: Arc<M>, config: PickerConfig, props: GalleryProps) -> Self {
        let previous_source = dialog
            .invocation_parameters()
            .selected_image
            .and_then(|asset| asset.selected_source);
        debug!(has_previous_source = previous_source.is_some(), "Creating gallery");

        Self {
            dialog,
            metadata,
            navigator: None,
            config,
            previous_source,
            state: Mutex::new(GalleryState {
                props,
                ..GalleryState::default()
            }),
        }
    }

    /// Routes page changes to `navigator`.
    pub fn with_navigator(mut self, navigator: Arc<dyn PageNavigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Reconciles new props from the listing.
    ///
    /// Switching to a different source drops the selection.
    #[instrument(skip_all, fields(source = ?props.selected_source.id))]
    pub async fn sync_props(&self, props: GalleryProps) {
        let mut state = self.state.lock().await;
        if !state.props.selected_source.same_source(&props.selected_source) {
            debug!("Source changed; clearing selection");
            state.select(None);
        }
        state.props = props;
    }

    /// Marks `asset` as the selection. Nothing is persisted.
    #[instrument(skip_all, fields(src = ?asset.src))]
    pub async fn handle_click(&self, asset: Asset) {
        self.state.lock().await.select(Some(asset));
    }

    /// Snapshot of the current selection.
    pub async fn selection(&self) -> Option<Asset> {
        self.state.lock().await.selection.clone()
    }

    /// Enriches the selection with metadata and closes the dialog with it.
    ///
    /// Metadata is always fetched, but only the `full_asset` profile carries
    /// attributes: there, fetched metadata fills attributes that are absent,
    /// the configured fields are flattened to JSON text, and `original_url`
    /// defaults to the selection's `src`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the merged asset cannot be serialized. Missing
    /// metadata is not an error.
    #[instrument(skip(self))]
    pub async fn handle_submit(&self) -> PickerResult<SubmitOutcome> {
        let (ticket, mut asset, source) = {
            let state = self.state.lock().await;
            let Some(selection) = state.selection.as_ref().filter(|a| a.usable_src().is_some())
            else {
                debug!("Nothing selected; ignoring submit");
                return Ok(SubmitOutcome::Skipped);
            };
            (
                state.generation,
                selection.clone(),
                state.props.selected_source.clone(),
            )
        };
        let src = asset.usable_src().unwrap_or_default().to_string();

        let metadata = self.metadata.asset_metadata(&src).await;

        if self.state.lock().await.generation != ticket {
            debug!(%src, "Selection changed during metadata fetch; discarding result");
            return Ok(SubmitOutcome::Stale);
        }

        let payload = match self.config.gallery().submit_profile() {
            SubmitProfile::OriginUrl => {
                // Attributes are not part of this payload; metadata is dropped.
                debug!(keys = metadata.len(), "Submitting origin URL only");
                json!([{ "original_url": src }])
            }
            SubmitProfile::FullAsset => {
                merge_metadata(&mut asset.attributes, metadata);
                stringify_json_fields(&mut asset.attributes, self.config.gallery().flatten_fields());
                asset.original_url.get_or_insert_with(|| src.clone());
                asset.selected_source = Some(source);
                Value::Array(vec![asset.to_value()?])
            }
        };

        debug!(profile = %self.config.gallery().submit_profile(), "Closing dialog with selection");
        self.dialog.close(Some(payload.clone()));
        Ok(SubmitOutcome::Submitted(payload))
    }

    /// Closes the dialog without a selection.
    pub fn handle_close(&self) {
        debug!("Closing dialog without selection");
        self.dialog.close(None);
    }

    /// Requests page `index` from the listing.
    ///
    /// Returns whether the request was forwarded; the current page, pages out
    /// of range, and galleries without a navigator are ignored.
    pub async fn change_page(&self, index: usize) -> bool {
        let page_info = self.state.lock().await.props.page_info;
        let Some(navigator) = &self.navigator else {
            return false;
        };
        if !page_info.contains(index) || index == *page_info.current_index() {
            debug!(index, "Ignoring page change");
            return false;
        }
        navigator.change_page(index);
        true
    }

    /// What the gallery should display right now.
    pub async fn view(&self) -> GalleryView {
        let state = self.state.lock().await;
        let props = &state.props;

        let replacing_from_this_source = self
            .previous_source
            .as_ref()
            .is_some_and(|prev| prev.id.is_some() && prev.same_source(&props.selected_source));
        if props.loading || (replacing_from_this_source && props.assets.is_empty()) {
            return GalleryView::Placeholder(PlaceholderKind::Loading);
        }

        if props.assets.is_empty() {
            let source = &props.selected_source;
            let kind = if !source.is_chosen() {
                PlaceholderKind::NoSource
            } else if !source.is_listable() {
                PlaceholderKind::WebFolder
            } else {
                PlaceholderKind::EmptySource
            };
            return GalleryView::Placeholder(kind);
        }

        let selection = state.selection.as_ref();
        let tiles = props
            .assets
            .iter()
            .map(|asset| {
                let selected = selection.is_some_and(|s| s.same_src(asset));
                GridTile::new(asset.clone(), selected)
            })
            .collect();
        let can_submit = selection.is_some_and(|s| s.usable_src().is_some());

        GalleryView::Grid {
            tiles,
            action_bar: ActionBar::new(props.page_info, can_submit, props.selected_source.clone()),
        }
    }
}
