//! In-memory host used by the field tests.

#![allow(dead_code)]

use async_trait::async_trait;
use imgix_picker_core::Asset;
use imgix_picker_error::{HostError, HostErrorKind, PickerResult};
use imgix_picker_interface::{DialogOptions, DialogService, FieldStorage, WindowSurface};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Fake host SDK recording every call.
#[derive(Default)]
pub struct FakeHost {
    stored: Mutex<Option<Value>>,
    writes: Mutex<Vec<Option<Asset>>>,
    dialog_results: Mutex<VecDeque<PickerResult<Option<Value>>>>,
    dialog_requests: Mutex<Vec<DialogOptions>>,
    dialog_gate: Option<Notify>,
    yield_on_write: bool,
    reject_writes: bool,
    height_updates: AtomicUsize,
}

impl FakeHost {
    /// Host whose field already stores `value`.
    pub fn with_stored(value: Value) -> Self {
        Self {
            stored: Mutex::new(Some(value)),
            ..Self::default()
        }
    }

    /// Dialogs block until [`FakeHost::release_dialog`] is called.
    pub fn gated(mut self) -> Self {
        self.dialog_gate = Some(Notify::new());
        self
    }

    /// Writes yield to the scheduler before recording.
    pub fn yielding(mut self) -> Self {
        self.yield_on_write = true;
        self
    }

    /// Every write is rejected by field storage.
    pub fn rejecting_writes(mut self) -> Self {
        self.reject_writes = true;
        self
    }

    /// Queues the result of the next dialog open.
    pub fn push_dialog_result(&self, result: Option<Value>) {
        self.dialog_results.lock().unwrap().push_back(Ok(result));
    }

    /// Queues a failing dialog open.
    pub fn push_dialog_failure(&self) {
        self.dialog_results
            .lock()
            .unwrap()
            .push_back(Err(HostError::new(HostErrorKind::Dialog("detached".to_string())).into()));
    }

    /// Lets a gated dialog resolve.
    pub fn release_dialog(&self) {
        if let Some(gate) = &self.dialog_gate {
            gate.notify_one();
        }
    }

    pub fn writes(&self) -> Vec<Option<Asset>> {
        self.writes.lock().unwrap().clone()
    }

    pub fn last_write(&self) -> Option<Option<Asset>> {
        self.writes.lock().unwrap().last().cloned()
    }

    pub fn dialog_requests(&self) -> Vec<DialogOptions> {
        self.dialog_requests.lock().unwrap().clone()
    }

    pub fn height_updates(&self) -> usize {
        self.height_updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FieldStorage for FakeHost {
    fn get_value(&self) -> Option<Value> {
        self.stored.lock().unwrap().clone()
    }

    async fn set_value(&self, value: Option<&Asset>) -> PickerResult<()> {
        if self.reject_writes {
            return Err(
                HostError::new(HostErrorKind::FieldStorage("read-only field".to_string())).into(),
            );
        }
        let value = value.cloned();
        if self.yield_on_write {
            tokio::task::yield_now().await;
        }
        *self.stored.lock().unwrap() = value.as_ref().map(|a| a.to_value().unwrap());
        self.writes.lock().unwrap().push(value);
        Ok(())
    }
}

#[async_trait]
impl DialogService for FakeHost {
    async fn open_dialog(&self, options: DialogOptions) -> PickerResult<Option<Value>> {
        self.dialog_requests.lock().unwrap().push(options);
        if let Some(gate) = &self.dialog_gate {
            gate.notified().await;
        }
        self.dialog_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(None))
    }

    fn close(&self, _payload: Option<Value>) {}
}

impl WindowSurface for FakeHost {
    fn update_height(&self, _height: Option<u32>) {
        self.height_updates.fetch_add(1, Ordering::SeqCst);
    }
}
