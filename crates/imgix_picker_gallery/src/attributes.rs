//! Attribute enrichment applied on submit.

use imgix_picker_core::Attributes;
use serde_json::{Map, Value};
use tracing::debug;

/// Metadata keys mapped onto the attribute names the host stores.
const METADATA_ALIASES: &[(&str, &str)] = &[
    ("PixelWidth", Attributes::MEDIA_WIDTH),
    ("PixelHeight", Attributes::MEDIA_HEIGHT),
];

/// Fills attributes from fetched metadata without overwriting anything.
///
/// `PixelWidth`/`PixelHeight` populate `media_width`/`media_height`; every
/// other metadata key is copied under its own name. Values already present in
/// `attributes` always win.
///
/// # Examples
///
/// ```
/// use imgix_picker_core::Attributes;
/// use imgix_picker_gallery::merge_metadata;
/// use serde_json::json;
///
/// let mut attributes: Attributes = serde_json::from_value(json!({"media_width": 100})).unwrap();
/// let metadata = json!({"PixelWidth": 4000, "PixelHeight": 3000}).as_object().unwrap().clone();
/// merge_metadata(&mut attributes, metadata);
/// assert_eq!(attributes.get("media_width"), Some(&json!(100)));
/// assert_eq!(attributes.get("media_height"), Some(&json!(3000)));
/// ```
pub fn merge_metadata(attributes: &mut Attributes, metadata: Map<String, Value>) {
    for (key, value) in metadata {
        let target = METADATA_ALIASES
            .iter()
            .find(|(source, _)| *source == key)
            .map(|(_, target)| *target)
            .unwrap_or(key.as_str());
        if !attributes.insert_if_absent(target, value) {
            debug!(key = target, "Keeping existing attribute over fetched metadata");
        }
    }
}

/// Serializes structured values at the given dotted paths to JSON text.
///
/// Objects, arrays, numbers and booleans become their JSON text; strings,
/// nulls and missing paths are left alone, so running it twice is harmless.
///
/// # Examples
///
/// ```
/// use imgix_picker_core::Attributes;
/// use imgix_picker_gallery::stringify_json_fields;
/// use serde_json::json;
///
/// let mut attributes: Attributes = serde_json::from_value(json!({
///     "tags": {"beach": 0.9},
///     "colors": {"dominant_colors": {"blue": 0.5}}
/// })).unwrap();
/// stringify_json_fields(&mut attributes, &["tags", "colors.dominant_colors", "custom_fields"]);
/// assert_eq!(attributes.get("tags"), Some(&json!("{\"beach\":0.9}")));
/// assert_eq!(
///     attributes.get_path("colors.dominant_colors"),
///     Some(&json!("{\"blue\":0.5}"))
/// );
/// assert!(attributes.get("custom_fields").is_none());
/// ```
pub fn stringify_json_fields<S: AsRef<str>>(attributes: &mut Attributes, paths: &[S]) {
    for path in paths {
        let path = path.as_ref();
        let Some(value) = attributes.get_path_mut(path) else {
            continue;
        };
        if value.is_string() || value.is_null() {
            continue;
        }
        *value = Value::String(value.to_string());
    }
}
