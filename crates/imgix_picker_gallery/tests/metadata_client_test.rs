//! Tests for the metadata descriptor client against a local server.

mod test_utils;

use imgix_picker_config::PickerConfig;
use imgix_picker_gallery::ImgixMetadataClient;
use imgix_picker_interface::MetadataSource;
use serde_json::json;
use test_utils::serve_once;

fn client() -> ImgixMetadataClient {
    let config = PickerConfig::bundled().unwrap();
    // Keep ambient proxy settings away from the loopback server.
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    ImgixMetadataClient::with_client(http, config.metadata().format().clone())
}

#[test]
fn test_builds_from_config() {
    let config = PickerConfig::bundled().unwrap();
    assert!(ImgixMetadataClient::new(config.metadata()).is_ok());
}

#[tokio::test]
async fn test_requests_json_descriptor_without_original_query() -> anyhow::Result<()> {
    let (base, request_line) =
        serve_once("200 OK", r#"{"PixelWidth": 4000, "PixelHeight": 3000}"#).await;

    let metadata = client()
        .asset_metadata(&format!("{base}/photos/a.jpg?w=400&fit=crop"))
        .await;

    assert_eq!(metadata.get("PixelWidth"), Some(&json!(4000)));
    assert_eq!(request_line.await?, "GET /photos/a.jpg?fm=json HTTP/1.1");
    Ok(())
}

#[tokio::test]
async fn test_server_error_yields_empty_metadata() -> anyhow::Result<()> {
    let (base, _) = serve_once("500 Internal Server Error", r#"{"error": "boom"}"#).await;

    let metadata = client().asset_metadata(&format!("{base}/a.jpg")).await;

    assert!(metadata.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_reported_by_fetch() -> anyhow::Result<()> {
    let (base, _) = serve_once("500 Internal Server Error", "").await;

    let err = client()
        .fetch_metadata(&format!("{base}/a.jpg"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("status Some(500)"));
    Ok(())
}

#[tokio::test]
async fn test_non_json_body_yields_empty_metadata() -> anyhow::Result<()> {
    let (base, _) = serve_once("200 OK", "<html>not json</html>").await;

    let metadata = client().asset_metadata(&format!("{base}/a.jpg")).await;

    assert!(metadata.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_non_object_json_yields_empty_metadata() -> anyhow::Result<()> {
    let (base, _) = serve_once("200 OK", "[1, 2, 3]").await;

    let metadata = client().asset_metadata(&format!("{base}/a.jpg")).await;

    assert!(metadata.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_unreachable_host_yields_empty_metadata() -> anyhow::Result<()> {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let metadata = client().asset_metadata(&format!("http://{addr}/a.jpg")).await;

    assert!(metadata.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_relative_src_yields_empty_metadata() {
    assert!(client().asset_metadata("/a.jpg").await.is_empty());
}
