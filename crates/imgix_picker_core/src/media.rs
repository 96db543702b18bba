//! Media kind detection.

use serde::{Deserialize, Serialize};

/// Broad kind of a selected asset.
///
/// # Examples
///
/// ```
/// use imgix_picker_core::MediaKind;
///
/// let exts = [".mp4".to_string()];
/// assert_eq!(MediaKind::infer("https://x/clip.mp4", &exts), MediaKind::Video);
/// assert_eq!(MediaKind::infer("https://x/a.jpg", &exts), MediaKind::Image);
/// assert_eq!(MediaKind::Video.to_string(), "video");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    /// Still image
    Image,
    /// Video clip
    Video,
}

impl MediaKind {
    /// Infers the kind from the file extension of `url`.
    ///
    /// Anything that does not end in one of `video_extensions` is an image.
    /// Query strings and fragments are ignored.
    pub fn infer(url: &str, video_extensions: &[String]) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or(url).to_ascii_lowercase();
        if video_extensions
            .iter()
            .any(|ext| path.ends_with(&ext.to_ascii_lowercase()))
        {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// Whether a content type describes an image (prefix match on `image`).
///
/// ```
/// use imgix_picker_core::is_image_like;
///
/// assert!(is_image_like("image/png"));
/// assert!(is_image_like("image"));
/// assert!(!is_image_like("video/mp4"));
/// ```
pub fn is_image_like(content_type: &str) -> bool {
    content_type.starts_with("image")
}
