//! Free-form asset attributes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attribute map attached to an asset.
///
/// Holds the content type plus whatever metadata the source listing or the
/// rendering API reported (`custom_fields`, `tags`, `colors`, `media_width`,
/// `media_height`, ...). Keys are kept verbatim so the host receives back what
/// it sent.
///
/// # Examples
///
/// ```
/// use imgix_picker_core::Attributes;
/// use serde_json::json;
///
/// let mut attributes = Attributes::default();
/// attributes.set_content_type("image/jpeg");
/// assert!(attributes.insert_if_absent("media_width", json!(640)));
/// assert!(!attributes.insert_if_absent("media_width", json!(1280)));
/// assert_eq!(attributes.get("media_width"), Some(&json!(640)));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    /// Key holding the MIME-like content type.
    pub const CONTENT_TYPE: &'static str = "content_type";
    /// Key holding the pixel width.
    pub const MEDIA_WIDTH: &'static str = "media_width";
    /// Key holding the pixel height.
    pub const MEDIA_HEIGHT: &'static str = "media_height";

    /// The content type, if one is recorded as a string.
    pub fn content_type(&self) -> Option<&str> {
        self.0.get(Self::CONTENT_TYPE).and_then(Value::as_str)
    }

    /// Records the content type.
    pub fn set_content_type(&mut self, content_type: impl Into<String>) {
        self.0
            .insert(Self::CONTENT_TYPE.to_string(), Value::String(content_type.into()));
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether `key` holds a present value. `null` counts as absent.
    pub fn has(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(|v| !v.is_null())
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Stores `value` only when `key` has no present value.
    ///
    /// Returns whether the value was written.
    pub fn insert_if_absent(&mut self, key: &str, value: Value) -> bool {
        if self.has(key) {
            return false;
        }
        self.0.insert(key.to_string(), value);
        true
    }

    /// Mutable access to the value at a dotted path such as `colors.dominant_colors`.
    pub fn get_path_mut(&mut self, path: &str) -> Option<&mut Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.0.get_mut(first)?;
        for segment in segments {
            current = current.as_object_mut()?.get_mut(segment)?;
        }
        Some(current)
    }

    /// Value at a dotted path such as `colors.dominant_colors`.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Iterates keys and values.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no attributes are recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Attributes {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Attributes> for Map<String, Value> {
    fn from(attributes: Attributes) -> Self {
        attributes.0
    }
}
