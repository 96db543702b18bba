//! Fakes and a canned HTTP server for the gallery tests.

#![allow(dead_code)]

use async_trait::async_trait;
use imgix_picker_core::Asset;
use imgix_picker_error::PickerResult;
use imgix_picker_interface::{
    DialogOptions, DialogService, InvocationParameters, MetadataSource, PageNavigator,
};
use serde_json::{Map, Value};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::{Notify, oneshot};

/// Dialog side of the host, recording close payloads.
#[derive(Default)]
pub struct FakeDialog {
    invocation: InvocationParameters,
    closes: Mutex<Vec<Option<Value>>>,
}

impl FakeDialog {
    /// Dialog opened for a field that already holds `asset`.
    pub fn replacing(asset: Asset) -> Self {
        Self {
            invocation: InvocationParameters {
                selected_image: Some(asset),
            },
            ..Self::default()
        }
    }

    pub fn closes(&self) -> Vec<Option<Value>> {
        self.closes.lock().unwrap().clone()
    }
}

#[async_trait]
impl DialogService for FakeDialog {
    async fn open_dialog(&self, _options: DialogOptions) -> PickerResult<Option<Value>> {
        Ok(None)
    }

    fn close(&self, payload: Option<Value>) {
        self.closes.lock().unwrap().push(payload);
    }

    fn invocation_parameters(&self) -> InvocationParameters {
        self.invocation.clone()
    }
}

/// Metadata source returning a canned map.
#[derive(Default)]
pub struct FakeMetadata {
    metadata: Map<String, Value>,
    gate: Option<Notify>,
    requests: Mutex<Vec<String>>,
}

impl FakeMetadata {
    pub fn returning(metadata: Value) -> Self {
        Self {
            metadata: metadata.as_object().cloned().unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Lookups block until [`FakeMetadata::release`] is called.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Notify::new());
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetadataSource for FakeMetadata {
    async fn asset_metadata(&self, src: &str) -> Map<String, Value> {
        self.requests.lock().unwrap().push(src.to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.metadata.clone()
    }
}

/// Navigator recording requested pages.
#[derive(Default)]
pub struct FakeNavigator {
    pages: Mutex<Vec<usize>>,
    calls: AtomicUsize,
}

impl FakeNavigator {
    pub fn pages(&self) -> Vec<usize> {
        self.pages.lock().unwrap().clone()
    }
}

impl PageNavigator for FakeNavigator {
    fn change_page(&self, index: usize) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pages.lock().unwrap().push(index);
    }
}

/// Serves one canned HTTP response on a local port.
///
/// Returns the base URL and a receiver yielding the request line.
pub async fn serve_once(status_line: &str, body: &str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let text = String::from_utf8_lossy(&request);
        let request_line = text.lines().next().unwrap_or_default().to_string();
        let _ = tx.send(request_line);
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    (format!("http://{addr}"), rx)
}
