//! Image-transform parameter types.

use imgix_picker_error::{PickerResult, UrlError};
use reqwest::Url;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Values recorded for one query key.
///
/// A key seen with a single distinct value serializes as a bare string; once a
/// second distinct value appears it becomes an ordered set.
///
/// # Examples
///
/// ```
/// use imgix_picker_core::ParamValues;
///
/// let mut values = ParamValues::Single("format".to_string());
/// values.push("compress");
/// values.push("format");
/// assert_eq!(values.as_slice(), ["format", "compress"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValues {
    /// Exactly one distinct value
    Single(String),
    /// Several distinct values in first-seen order
    Set(Vec<String>),
}

impl ParamValues {
    /// Adds a value unless it is already present.
    pub fn push(&mut self, value: impl Into<String>) {
        let value = value.into();
        match self {
            ParamValues::Single(existing) if *existing == value => {}
            ParamValues::Single(existing) => {
                let first = std::mem::take(existing);
                *self = ParamValues::Set(vec![first, value]);
            }
            ParamValues::Set(values) => {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
        }
    }

    /// All values in first-seen order.
    pub fn as_slice(&self) -> &[String] {
        match self {
            ParamValues::Single(value) => std::slice::from_ref(value),
            ParamValues::Set(values) => values,
        }
    }

    /// Whether `value` is one of the recorded values.
    pub fn contains(&self, value: &str) -> bool {
        self.as_slice().iter().any(|v| v == value)
    }
}

/// Structured view of an asset URL's query string, grouped by key.
///
/// This is always a projection of `src`; build it with [`ImgixParams::from_url`]
/// or [`ImgixParams::from_src`] rather than editing it directly. Keys keep the
/// order of their first appearance in the query string, and serialize as a
/// JSON object in that order.
///
/// # Examples
///
/// ```
/// use imgix_picker_core::ImgixParams;
///
/// let params = ImgixParams::from_src("https://demo.imgix.net/a.jpg?w=400&auto=format&auto=compress").unwrap();
/// assert_eq!(params.get("w").unwrap().as_slice(), ["400"]);
/// assert_eq!(params.get("auto").unwrap().as_slice(), ["format", "compress"]);
/// assert_eq!(params.keys().collect::<Vec<_>>(), ["w", "auto"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImgixParams(Vec<(String, ParamValues)>);

impl ImgixParams {
    /// Groups the query pairs of `url` by key.
    pub fn from_url(url: &Url) -> Self {
        let mut params = Self::default();
        for (key, value) in url.query_pairs() {
            params.push(key.into_owned(), value.into_owned());
        }
        params
    }

    /// Parses `src` and groups its query pairs by key.
    ///
    /// # Errors
    ///
    /// Returns a [`UrlError`] if `src` is not an absolute URL.
    pub fn from_src(src: &str) -> PickerResult<Self> {
        let url = Url::parse(src).map_err(|e| UrlError::for_input(src, e.to_string()))?;
        Ok(Self::from_url(&url))
    }

    fn push(&mut self, key: String, value: String) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => self.0.push((key, ParamValues::Single(value))),
        }
    }

    /// Values recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&ParamValues> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Whether `key` appears in the query string.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in order of first appearance.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the query string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ImgixParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, values) in &self.0 {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ImgixParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ParamsVisitor;

        impl<'de> Visitor<'de> for ParamsVisitor {
            type Value = ImgixParams;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of query keys to a value or list of values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ImgixParams, A::Error> {
                let mut entries: Vec<(String, ParamValues)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, values)) = access.next_entry::<String, ParamValues>()? {
                    match entries.iter_mut().find(|(k, _)| *k == key) {
                        Some(existing) => existing.1 = values,
                        None => entries.push((key, values)),
                    }
                }
                Ok(ImgixParams(entries))
            }
        }

        deserializer.deserialize_map(ParamsVisitor)
    }
}

/// Value a checklist toggle writes into the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean toggle, written as `true` or `false`
    Flag(bool),
    /// Literal value
    Text(String),
}

impl ParamValue {
    /// The text written into the query string.
    pub fn as_query_value(&self) -> String {
        match self {
            ParamValue::Flag(flag) => flag.to_string(),
            ParamValue::Text(text) => text.clone(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

/// Whether an edit adds or removes the keys it names.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParamEditAction {
    /// Set each key; a key without a value is removed
    #[default]
    Add,
    /// Delete each key regardless of its value
    Remove,
}

/// Ordered set of parameter edits.
///
/// Keys are applied in the order they were added.
///
/// # Examples
///
/// ```
/// use imgix_picker_core::ParamEdits;
///
/// let edits = ParamEdits::new()
///     .with("w", "400")
///     .with("fit", "crop")
///     .with("lossless", true)
///     .without("h");
/// assert_eq!(edits.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParamEdits(Vec<(String, Option<ParamValue>)>);

impl ParamEdits {
    /// Creates an empty edit set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key` with a value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.0.push((key.into(), Some(value.into())));
        self
    }

    /// Adds `key` without a value.
    pub fn without(mut self, key: impl Into<String>) -> Self {
        self.0.push((key.into(), None));
        self
    }

    /// Iterates the edits in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ParamValue>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Number of edited keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no edits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Applies the edits to an ordered list of query pairs.
    ///
    /// `Add` replaces the first occurrence of a key in place and drops later
    /// duplicates, appending keys that were not present. A key without a value
    /// is removed. `Remove` deletes every occurrence of each key.
    pub fn apply(&self, pairs: &mut Vec<(String, String)>, action: ParamEditAction) {
        for (key, value) in self.iter() {
            match (action, value) {
                (ParamEditAction::Add, Some(value)) => set_pair(pairs, key, value.as_query_value()),
                (ParamEditAction::Add, None) | (ParamEditAction::Remove, _) => {
                    pairs.retain(|(k, _)| k != key)
                }
            }
        }
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for ParamEdits
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        )
    }
}

fn set_pair(pairs: &mut Vec<(String, String)>, key: &str, value: String) {
    match pairs.iter().position(|(k, _)| k == key) {
        Some(first) => {
            pairs[first].1 = value;
            let mut index = 0;
            pairs.retain(|(k, _)| {
                let keep = index <= first || k != key;
                index += 1;
                keep
            });
        }
        None => pairs.push((key.to_string(), value)),
    }
}
