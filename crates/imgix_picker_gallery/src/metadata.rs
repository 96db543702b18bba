//! Metadata descriptor client for the imgix rendering API.

use async_trait::async_trait;
use imgix_picker_config::MetadataConfig;
use imgix_picker_core::metadata_url;
use imgix_picker_error::{HttpError, JsonError, PickerResult};
use imgix_picker_interface::MetadataSource;
use reqwest::Client;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Fetches `?fm=json` descriptors for asset URLs.
#[derive(Debug, Clone)]
pub struct ImgixMetadataClient {
    client: Client,
    format: String,
}

impl ImgixMetadataClient {
    /// Creates a client from the metadata settings.
    ///
    /// # Errors
    ///
    /// Returns an `HttpError` if the underlying HTTP client cannot be built.
    pub fn new(config: &MetadataConfig) -> PickerResult<Self> {
        debug!(format = %config.format(), timeout_secs = config.timeout_secs(), "Creating metadata client");
        let client = Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, config.format().clone()))
    }

    /// Wraps an existing HTTP client.
    pub fn with_client(client: Client, format: impl Into<String>) -> Self {
        Self {
            client,
            format: format.into(),
        }
    }

    /// Fetches the descriptor for `src`, reporting every failure.
    ///
    /// The query and fragment of `src` are replaced by `fm=<format>`.
    ///
    /// # Errors
    ///
    /// Returns an error if `src` is not absolute, the request fails, the
    /// server answers with a non-success status, or the body is not a JSON
    /// object.
    #[instrument(skip(self))]
    pub async fn fetch_metadata(&self, src: &str) -> PickerResult<Map<String, Value>> {
        let url = metadata_url(src, &self.format)?;
        debug!(%url, "Requesting asset metadata");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::with_status(status.as_u16(), "Metadata request rejected").into());
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| JsonError::new(format!("Failed to parse metadata: {}", e)))?;

        match body {
            Value::Object(map) => {
                debug!(keys = map.len(), "Received asset metadata");
                Ok(map)
            }
            other => Err(JsonError::new(format!(
                "Metadata is not a JSON object: {}",
                other
            ))
            .into()),
        }
    }
}

#[async_trait]
impl MetadataSource for ImgixMetadataClient {
    async fn asset_metadata(&self, src: &str) -> Map<String, Value> {
        match self.fetch_metadata(src).await {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(error = %e, src, "Metadata unavailable; submitting without it");
                Map::new()
            }
        }
    }
}
