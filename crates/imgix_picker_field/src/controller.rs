//! The field state container.

use crate::{FieldView, normalize_selection};
use imgix_picker_config::PickerConfig;
use imgix_picker_core::{Asset, ParamEditAction, ParamEdits, rewrite_query};
use imgix_picker_error::{ConfigError, PickerResult};
use imgix_picker_interface::{DialogOptions, DialogPosition, HostSdk, InvocationParameters};
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

/// Result of [`FieldController::update_params`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParamUpdate {
    /// No asset with a usable `src` was selected; nothing changed.
    Skipped,
    /// The edit was committed; carries the asset as committed.
    Applied(Asset),
}

/// Result of [`FieldController::open_dialog`].
#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    /// Another open request was already in flight; the host was not contacted.
    Coalesced,
    /// The dialog closed without a usable selection.
    Dismissed,
    /// The dialog returned an asset, which is now stored.
    Selected(Asset),
}

#[derive(Debug, Default)]
struct FieldState {
    selected_asset: Option<Asset>,
}

/// Resets the in-flight flag when an open request finishes, however it ends.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// State container of the content field.
///
/// All mutation goes through the controller's own methods. Edits are computed
/// against the state current at commit time, and every write to host storage
/// sends the state current at write time, so rapid edits cannot lose updates.
pub struct FieldController<H> {
    host: Arc<H>,
    config: PickerConfig,
    state: Mutex<FieldState>,
    persist_gate: Mutex<()>,
    dialog_in_flight: AtomicBool,
}

impl<H: HostSdk> FieldController<H> {
    /// Initializes the controller from the value stored in the field.
    ///
    /// The stored value is normalized once, and the host is asked to resize
    /// the field to its content.
    #[instrument(skip_all)]
    pub fn mount(host: Arc<H>, config: PickerConfig) -> Self {
        let selected_asset = host
            .get_value()
            .and_then(|value| normalize_selection(value, config.media().video_extensions()));
        debug!(has_asset = selected_asset.is_some(), "Mounted field");

        host.update_height(None);

        Self {
            host,
            config,
            state: Mutex::new(FieldState { selected_asset }),
            persist_gate: Mutex::new(()),
            dialog_in_flight: AtomicBool::new(false),
        }
    }

    /// Snapshot of the selected asset.
    pub async fn selected_asset(&self) -> Option<Asset> {
        self.state.lock().await.selected_asset.clone()
    }

    /// What the field should display right now.
    pub async fn view(&self) -> FieldView {
        let state = self.state.lock().await;
        FieldView::from_selection(state.selected_asset.as_ref())
    }

    /// Asks the host to re-measure the field.
    pub fn refresh_height(&self) {
        self.host.update_height(None);
    }

    /// Applies parameter edits to the selected asset's `src` and persists.
    ///
    /// `src` and `imgixParams` are replaced together; the params are grouped
    /// from the rewritten URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored `src` is not an absolute URL or the host
    /// rejects the write. A missing selection is not an error.
    #[instrument(skip(self, edits, action), fields(edits = edits.len(), action = %action))]
    pub async fn update_params(
        &self,
        edits: &ParamEdits,
        action: ParamEditAction,
    ) -> PickerResult<ParamUpdate> {
        let committed = {
            let mut state = self.state.lock().await;
            let Some(asset) = state.selected_asset.as_mut() else {
                debug!("No asset selected; ignoring param edit");
                return Ok(ParamUpdate::Skipped);
            };
            let Some(src) = asset.usable_src() else {
                debug!("Selected asset has no src; ignoring param edit");
                return Ok(ParamUpdate::Skipped);
            };

            let (src, params) = rewrite_query(src, edits, action)?;
            debug!(%src, "Rewrote asset src");
            asset.src = Some(src);
            asset.imgix_params = params;
            asset.clone()
        };

        self.persist_latest().await?;
        Ok(ParamUpdate::Applied(committed))
    }

    /// Removes the stored asset.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the write.
    #[instrument(skip(self))]
    pub async fn clear_selection(&self) -> PickerResult<()> {
        self.state.lock().await.selected_asset = None;
        debug!("Cleared selection");
        self.persist_latest().await
    }

    /// Opens the picker dialog and stores what it returns.
    ///
    /// Only one request is in flight at a time; calls made meanwhile return
    /// [`DialogOutcome::Coalesced`] without reaching the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the host fails to open the dialog or rejects the
    /// write. The in-flight guard is released either way.
    #[instrument(skip(self))]
    pub async fn open_dialog(&self) -> PickerResult<DialogOutcome> {
        if self
            .dialog_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Dialog already opening; coalescing request");
            return Ok(DialogOutcome::Coalesced);
        }
        let _in_flight = InFlight(&self.dialog_in_flight);

        let options = self.dialog_options(self.selected_asset().await)?;
        let result = self.host.open_dialog(options).await?;

        let Some(value) = result else {
            debug!("Dialog dismissed");
            return Ok(DialogOutcome::Dismissed);
        };
        let Some(asset) = normalize_selection(value, self.config.media().video_extensions())
        else {
            warn!("Dialog returned no usable asset");
            return Ok(DialogOutcome::Dismissed);
        };

        self.state.lock().await.selected_asset = Some(asset.clone());
        self.persist_latest().await?;
        Ok(DialogOutcome::Selected(asset))
    }

    fn dialog_options(&self, current: Option<Asset>) -> PickerResult<DialogOptions> {
        let dialog = self.config.dialog();
        let position = DialogPosition::from_str(dialog.position()).unwrap_or_default();
        DialogOptions::builder()
            .width(*dialog.width())
            .min_height(*dialog.min_height())
            .position(position)
            .should_close_on_overlay_click(*dialog.close_on_overlay_click())
            .allow_height_overflow(*dialog.allow_height_overflow())
            .parameters(InvocationParameters {
                selected_image: current,
            })
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid dialog options: {}", e)).into())
    }

    /// Writes the current selection to host storage.
    ///
    /// Writes are serialized, and each one reads the state when it starts, so
    /// the last write always carries the latest state.
    async fn persist_latest(&self) -> PickerResult<()> {
        let _gate = self.persist_gate.lock().await;
        let snapshot = self.state.lock().await.selected_asset.clone();
        self.host.set_value(snapshot.as_ref()).await
    }
}
