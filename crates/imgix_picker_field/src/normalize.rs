//! Normalization of host-provided selections.

use imgix_picker_core::{Asset, ImgixParams, MediaKind};
use serde_json::Value;
use tracing::{debug, warn};

/// Turns a host selection payload into a canonical [`Asset`].
///
/// Runs once per payload, before any parameter logic:
/// 1. a one-element list is unwrapped to its element;
/// 2. a missing or empty `src` is copied from `original_url`;
/// 3. a missing content type is inferred from the URL extension;
/// 4. `imgixParams` is re-derived from `src`.
///
/// Returns `None` when the payload holds no usable selection (null, `false`,
/// empty list, or no URL at all).
///
/// # Examples
///
/// ```
/// use imgix_picker_field::normalize_selection;
/// use serde_json::json;
///
/// let exts = [".mp4".to_string()];
/// let asset = normalize_selection(json!([{"original_url": "https://x/a.jpg"}]), &exts).unwrap();
/// assert_eq!(asset.src.as_deref(), Some("https://x/a.jpg"));
/// assert_eq!(asset.attributes.content_type(), Some("image"));
/// ```
pub fn normalize_selection(value: Value, video_extensions: &[String]) -> Option<Asset> {
    let value = unwrap_single(value)?;
    if !value.is_object() {
        debug!(payload = %value, "Selection payload is not an object");
        return None;
    }

    let mut asset = match Asset::from_value(value) {
        Ok(asset) => asset,
        Err(e) => {
            warn!(error = %e, "Discarding malformed selection payload");
            return None;
        }
    };

    if asset.usable_src().is_none() {
        asset.src = asset.original_url.clone().filter(|url| !url.is_empty());
    }
    let src = asset.usable_src()?.to_string();

    if asset.attributes.content_type().is_none() {
        let kind = MediaKind::infer(&src, video_extensions);
        asset.attributes.set_content_type(kind.as_ref());
    }

    match ImgixParams::from_src(&src) {
        Ok(params) => asset.imgix_params = params,
        Err(e) => {
            warn!(error = %e, "Discarding selection with unparseable src");
            return None;
        }
    }

    Some(asset)
}

fn unwrap_single(value: Value) -> Option<Value> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Array(items) => {
            let count = items.len();
            if count > 1 {
                warn!(count, "Selection payload holds several assets; keeping the first");
            }
            items.into_iter().next()
        }
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn exts() -> Vec<String> {
        vec![".mp4".to_string()]
    }

    #[test]
    fn bare_payload_keeps_existing_src_and_type() {
        let asset = normalize_selection(
            json!({
                "src": "https://demo.imgix.net/a.png?w=10",
                "original_url": "https://origin/a.png",
                "attributes": {"content_type": "image/png"}
            }),
            &exts(),
        )
        .unwrap();
        assert_eq!(asset.usable_src(), Some("https://demo.imgix.net/a.png?w=10"));
        assert_eq!(asset.attributes.content_type(), Some("image/png"));
        assert!(asset.imgix_params.contains_key("w"));
    }

    #[test]
    fn video_extension_is_detected() {
        let asset =
            normalize_selection(json!([{"original_url": "https://x/clip.mp4"}]), &exts()).unwrap();
        assert_eq!(asset.attributes.content_type(), Some("video"));
    }

    #[test]
    fn empty_and_falsy_payloads_are_no_selection() {
        assert!(normalize_selection(json!([]), &exts()).is_none());
        assert!(normalize_selection(Value::Null, &exts()).is_none());
        assert!(normalize_selection(json!(false), &exts()).is_none());
        assert!(normalize_selection(json!({"attributes": {}}), &exts()).is_none());
    }

    #[test]
    fn longer_lists_keep_the_first_asset() {
        let asset = normalize_selection(
            json!([{"original_url": "https://x/a.jpg"}, {"original_url": "https://x/b.jpg"}]),
            &exts(),
        )
        .unwrap();
        assert_eq!(asset.usable_src(), Some("https://x/a.jpg"));
    }

    #[test]
    fn empty_src_falls_back_to_original_url() {
        let asset = normalize_selection(
            json!({"src": "", "original_url": "https://x/a.jpg?fit=crop"}),
            &exts(),
        )
        .unwrap();
        assert_eq!(asset.usable_src(), Some("https://x/a.jpg?fit=crop"));
        assert!(asset.imgix_params.contains_key("fit"));
    }
}
