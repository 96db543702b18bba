//! Configuration structures for the picker.

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use imgix_picker_error::{ConfigError, PickerError, PickerResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../imgix_picker.toml");

/// Payload shape the gallery hands back to the host on submit.
///
/// Hosts disagree on what the dialog should return, so exactly one shape is
/// chosen per deployment:
///
/// ```toml
/// [gallery]
/// submit_profile = "full_asset"
/// ```
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubmitProfile {
    /// `[{ "original_url": <src> }]`
    #[default]
    OriginUrl,
    /// `[<merged asset with flattened attributes and selectedSource>]`
    FullAsset,
}

/// Geometry of the picker dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct DialogConfig {
    /// Width in pixels
    width: u32,
    /// Minimum height in pixels
    min_height: u32,
    /// `top` or `center`
    position: String,
    /// Close when the overlay is clicked
    close_on_overlay_click: bool,
    /// Allow the dialog to grow past the viewport
    allow_height_overflow: bool,
}

/// Metadata descriptor request settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MetadataConfig {
    /// Value of the `fm` query parameter
    format: String,
    /// Request timeout in seconds
    timeout_secs: u64,
}

/// Gallery submit settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GalleryConfig {
    /// Dotted attribute paths serialized to text on submit
    flatten_fields: Vec<String>,
    /// Payload shape returned to the host
    submit_profile: SubmitProfile,
}

/// Media detection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MediaConfig {
    /// URL suffixes treated as video, including the dot
    video_extensions: Vec<String>,
}

/// Top-level picker configuration.
///
/// # Example
///
/// ```
/// use imgix_picker_config::{PickerConfig, SubmitProfile};
///
/// let config = PickerConfig::bundled().unwrap();
/// assert_eq!(*config.dialog().width(), 1200);
/// assert_eq!(*config.gallery().submit_profile(), SubmitProfile::OriginUrl);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PickerConfig {
    /// Dialog geometry
    dialog: DialogConfig,
    /// Metadata fetch settings
    metadata: MetadataConfig,
    /// Gallery submit settings
    gallery: GalleryConfig,
    /// Media detection settings
    media: MediaConfig,
}

impl PickerConfig {
    /// Bundled defaults only, ignoring user files.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse or validate.
    pub fn bundled() -> PickerResult<Self> {
        let builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));
        Self::finish(builder)
    }

    /// Bundled defaults overridden by a specific file.
    ///
    /// Only the keys present in the file override the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> PickerResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User files are optional and silently skipped if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file fails to parse or the merged result
    /// fails validation.
    #[instrument]
    pub fn load() -> PickerResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let home_config = config_dir.join("imgix_picker/imgix_picker.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("imgix_picker").required(false));

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> PickerResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                PickerError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                PickerError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first offending value.
    pub fn validate(&self) -> PickerResult<()> {
        if self.dialog.width == 0 {
            return Err(ConfigError::for_key("dialog.width", "must be positive").into());
        }
        if self.dialog.min_height == 0 {
            return Err(ConfigError::for_key("dialog.min_height", "must be positive").into());
        }
        if !matches!(self.dialog.position.as_str(), "top" | "center") {
            return Err(ConfigError::for_key(
                "dialog.position",
                format!("must be \"top\" or \"center\", got {:?}", self.dialog.position),
            )
            .into());
        }
        if self.metadata.format.trim().is_empty() {
            return Err(ConfigError::for_key("metadata.format", "must not be empty").into());
        }
        if let Some(ext) = self
            .media
            .video_extensions
            .iter()
            .find(|ext| !ext.starts_with('.') || ext.len() < 2)
        {
            return Err(ConfigError::for_key(
                "media.video_extensions",
                format!("must look like \".mp4\", got {:?}", ext),
            )
            .into());
        }
        Ok(())
    }
}
