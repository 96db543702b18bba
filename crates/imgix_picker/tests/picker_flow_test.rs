//! End-to-end flow: the field opens the dialog, the gallery submits, the
//! field stores the result.

use async_trait::async_trait;
use imgix_picker::{
    Asset, DialogOptions, DialogOutcome, DialogService, FieldController, FieldStorage, FieldView,
    Gallery, GalleryProps, InvocationParameters, MetadataSource, PageInfo, ParamEditAction,
    ParamEdits, PickerConfig, PickerResult, SelectedSource, SourceKind, SubmitOutcome,
    WindowSurface,
};
use serde_json::{Map, Value, json};
use std::sync::{Arc, Mutex};

const SRC: &str = "https://demo.imgix.net/photos/a.jpg";

/// Dialog handle given to the gallery; forwards the close payload.
#[derive(Default)]
struct DialogFrame {
    invocation: InvocationParameters,
    closed_with: Mutex<Option<Option<Value>>>,
}

#[async_trait]
impl DialogService for DialogFrame {
    async fn open_dialog(&self, _options: DialogOptions) -> PickerResult<Option<Value>> {
        Ok(None)
    }

    fn close(&self, payload: Option<Value>) {
        *self.closed_with.lock().unwrap() = Some(payload);
    }

    fn invocation_parameters(&self) -> InvocationParameters {
        self.invocation.clone()
    }
}

struct StaticMetadata;

#[async_trait]
impl MetadataSource for StaticMetadata {
    async fn asset_metadata(&self, _src: &str) -> Map<String, Value> {
        json!({"PixelWidth": 4000, "PixelHeight": 3000})
            .as_object()
            .cloned()
            .unwrap_or_default()
    }
}

/// Host that runs the gallery in place of a real dialog.
#[derive(Default)]
struct EmbeddedHost {
    stored: Mutex<Option<Value>>,
    pick: Mutex<Option<String>>,
}

impl EmbeddedHost {
    fn picking(src: &str) -> Self {
        Self {
            pick: Mutex::new(Some(src.to_string())),
            ..Self::default()
        }
    }

    fn stored(&self) -> Option<Value> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl FieldStorage for EmbeddedHost {
    fn get_value(&self) -> Option<Value> {
        self.stored()
    }

    async fn set_value(&self, value: Option<&Asset>) -> PickerResult<()> {
        let value = value.map(Asset::to_value).transpose()?;
        *self.stored.lock().unwrap() = value;
        Ok(())
    }
}

#[async_trait]
impl DialogService for EmbeddedHost {
    async fn open_dialog(&self, options: DialogOptions) -> PickerResult<Option<Value>> {
        let frame = Arc::new(DialogFrame {
            invocation: options.parameters().clone(),
            ..DialogFrame::default()
        });
        let props = GalleryProps {
            selected_source: SelectedSource {
                id: Some("s1".to_string()),
                name: Some("photos".to_string()),
                kind: Some(SourceKind::S3),
            },
            assets: vec![Asset::from_src(SRC)?],
            page_info: PageInfo::new(0, 1, 18),
            loading: false,
        };
        let gallery = Gallery::new(
            frame.clone(),
            Arc::new(StaticMetadata),
            PickerConfig::bundled()?,
            props,
        );

        let pick = self.pick.lock().unwrap().clone();
        match pick {
            Some(src) => {
                gallery.handle_click(Asset::from_src(src)?).await;
                gallery.handle_submit().await?;
            }
            None => gallery.handle_close(),
        }

        let payload = frame.closed_with.lock().unwrap().clone().flatten();
        Ok(payload)
    }

    fn close(&self, _payload: Option<Value>) {}
}

impl WindowSurface for EmbeddedHost {
    fn update_height(&self, _height: Option<u32>) {}
}

#[tokio::test]
async fn test_pick_then_tune_params() -> anyhow::Result<()> {
    let host = Arc::new(EmbeddedHost::picking(SRC));
    let field = FieldController::mount(host.clone(), PickerConfig::bundled()?);
    assert_eq!(field.view().await, FieldView::Prompt);

    let DialogOutcome::Selected(asset) = field.open_dialog().await? else {
        panic!("expected a selection");
    };
    assert_eq!(asset.usable_src(), Some(SRC));
    assert_eq!(asset.attributes.content_type(), Some("image"));

    field
        .update_params(
            &ParamEdits::new().with("auto", "format").with("fit", "crop"),
            ParamEditAction::Add,
        )
        .await?;

    let stored = host.stored().expect("field should be stored");
    assert_eq!(stored["src"], json!(format!("{SRC}?auto=format&fit=crop")));
    assert_eq!(stored["imgixParams"], json!({"auto": "format", "fit": "crop"}));
    assert!(matches!(field.view().await, FieldView::Preview(_)));
    Ok(())
}

#[tokio::test]
async fn test_closing_gallery_leaves_field_empty() -> anyhow::Result<()> {
    let host = Arc::new(EmbeddedHost::default());
    let field = FieldController::mount(host.clone(), PickerConfig::bundled()?);

    assert_eq!(field.open_dialog().await?, DialogOutcome::Dismissed);
    assert!(host.stored().is_none());
    assert_eq!(field.selected_asset().await, None);
    Ok(())
}

#[tokio::test]
async fn test_stored_field_reaches_gallery_as_invocation() -> anyhow::Result<()> {
    let mut existing = Asset::from_src(SRC)?;
    existing.selected_source = Some(SelectedSource {
        id: Some("s1".to_string()),
        ..SelectedSource::default()
    });
    let host = Arc::new(EmbeddedHost::picking("https://demo.imgix.net/photos/b.jpg"));
    *host.stored.lock().unwrap() = Some(existing.to_value()?);

    let field = FieldController::mount(host.clone(), PickerConfig::bundled()?);
    let outcome = field.open_dialog().await?;

    let DialogOutcome::Selected(asset) = outcome else {
        panic!("expected a selection");
    };
    assert_eq!(asset.usable_src(), Some("https://demo.imgix.net/photos/b.jpg"));
    Ok(())
}

#[tokio::test]
async fn test_gallery_payload_shape() -> anyhow::Result<()> {
    let frame = Arc::new(DialogFrame::default());
    let gallery = Gallery::new(
        frame.clone(),
        Arc::new(StaticMetadata),
        PickerConfig::bundled()?,
        GalleryProps::default(),
    );
    gallery.handle_click(Asset::from_src(SRC)?).await;

    let outcome = gallery.handle_submit().await?;

    assert_eq!(
        outcome,
        SubmitOutcome::Submitted(json!([{"original_url": SRC}]))
    );
    Ok(())
}
