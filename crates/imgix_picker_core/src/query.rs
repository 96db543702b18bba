//! URL rewriting for asset sources.

use crate::{ImgixParams, ParamEditAction, ParamEdits};
use imgix_picker_error::{PickerResult, UrlError};
use reqwest::Url;

fn parse_absolute(src: &str) -> PickerResult<Url> {
    let url = Url::parse(src).map_err(|e| UrlError::for_input(src, e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(UrlError::for_input(src, "asset URL has no path").into());
    }
    Ok(url)
}

/// Applies `edits` to the query string of `src`.
///
/// The result keeps the origin and path of `src` and always carries a query
/// component, so an empty parameter set yields a trailing `?`. Credentials and
/// fragments are dropped. The returned params are grouped from the rewritten
/// URL, never patched incrementally.
///
/// # Errors
///
/// Returns a [`UrlError`] if `src` is not an absolute URL.
///
/// # Examples
///
/// ```
/// use imgix_picker_core::{rewrite_query, ParamEditAction, ParamEdits};
///
/// let (src, params) = rewrite_query(
///     "https://demo.imgix.net/a.jpg?w=400",
///     &ParamEdits::new().with("fit", "crop"),
///     ParamEditAction::Add,
/// )
/// .unwrap();
/// assert_eq!(src, "https://demo.imgix.net/a.jpg?w=400&fit=crop");
/// assert!(params.contains_key("fit"));
///
/// let (src, params) = rewrite_query(&src, &ParamEdits::new().without("w").without("fit"), ParamEditAction::Remove).unwrap();
/// assert_eq!(src, "https://demo.imgix.net/a.jpg?");
/// assert!(params.is_empty());
/// ```
pub fn rewrite_query(
    src: &str,
    edits: &ParamEdits,
    action: ParamEditAction,
) -> PickerResult<(String, ImgixParams)> {
    let mut url = parse_absolute(src)?;
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    edits.apply(&mut pairs, action);

    // Origin + path only. The credential setters fail only for URLs without a
    // host, which carry no credentials to drop.
    let _ = url.set_username("");
    let _ = url.set_password(None);
    url.set_fragment(None);
    url.set_query(Some(""));
    if !pairs.is_empty() {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    let params = ImgixParams::from_url(&url);
    Ok((url.into(), params))
}

/// URL of the JSON metadata descriptor for `src`.
///
/// Any existing query or fragment is replaced by `fm=<format>`.
///
/// # Errors
///
/// Returns a [`UrlError`] if `src` is not an absolute URL.
///
/// # Examples
///
/// ```
/// use imgix_picker_core::metadata_url;
///
/// let url = metadata_url("https://demo.imgix.net/a.jpg?w=400#top", "json").unwrap();
/// assert_eq!(url.as_str(), "https://demo.imgix.net/a.jpg?fm=json");
/// ```
pub fn metadata_url(src: &str, format: &str) -> PickerResult<Url> {
    let mut url = parse_absolute(src)?;
    url.set_fragment(None);
    url.set_query(None);
    url.query_pairs_mut().append_pair("fm", format);
    Ok(url)
}
