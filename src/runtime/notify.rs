//! IntentHub - one-way menu-intent delivery from host to UI.
//!
//! Menu actions broadcast a [`MenuIntent`] to every subscriber registered for
//! that channel. Delivery is fire-and-forget: it never blocks, expects no
//! acknowledgement, and an intent broadcast while no subscriber is registered
//! is lost, not queued. Subscribers are managed explicitly by id rather than
//! removed ad hoc by channel name.

use std::sync::{Arc, Mutex};

use tauri::{Emitter, WebviewWindow};
use uuid::Uuid;

/// The fixed set of host-initiated intents. Each maps to one notification
/// channel; there is no payload and no reply slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIntent {
    NewDocument,
    SaveDocument,
    ExportPdf,
    ExportData,
    ImportData,
}

impl MenuIntent {
    pub const ALL: [MenuIntent; 5] = [
        MenuIntent::NewDocument,
        MenuIntent::SaveDocument,
        MenuIntent::ExportPdf,
        MenuIntent::ExportData,
        MenuIntent::ImportData,
    ];

    /// Channel name as seen by the UI event listener.
    pub fn channel(self) -> &'static str {
        match self {
            MenuIntent::NewDocument => "new-document-intent",
            MenuIntent::SaveDocument => "save-document-intent",
            MenuIntent::ExportPdf => "export-pdf-intent",
            MenuIntent::ExportData => "export-data-intent",
            MenuIntent::ImportData => "import-data-intent",
        }
    }

    pub fn from_channel(channel: &str) -> Option<Self> {
        MenuIntent::ALL.into_iter().find(|i| i.channel() == channel)
    }
}

/// Destination for one subscriber. `deliver` must not block.
pub trait IntentSink: Send + Sync {
    fn deliver(&self, intent: MenuIntent);
}

/// Opaque token returned by `subscribe`, used to unsubscribe later.
pub type SubscriberId = String;

struct Subscriber {
    id: SubscriberId,
    intent: MenuIntent,
    sink: Arc<dyn IntentSink>,
}

/// Managed subscriber list with explicit subscribe/unsubscribe lifecycle.
///
/// Injected as managed state via `app.manage(Arc::new(IntentHub::new()))`.
/// Subscribers for the same channel are delivered to in subscription order.
pub struct IntentHub {
    subscribers: Mutex<Vec<Subscriber>>,
}

impl IntentHub {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Register `sink` for one intent channel. Returns the token needed to
    /// unsubscribe.
    pub fn subscribe(&self, intent: MenuIntent, sink: Arc<dyn IntentSink>) -> SubscriberId {
        let id = Uuid::new_v4().to_string();
        let mut subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        subscribers.push(Subscriber {
            id: id.clone(),
            intent,
            sink,
        });
        log::debug!(
            "Intent subscriber added: channel={}, id={id}, total={}",
            intent.channel(),
            subscribers.len()
        );
        id
    }

    /// Remove a subscriber by token. Returns false if the token is unknown
    /// (already unsubscribed, or never issued).
    pub fn unsubscribe(&self, id: &str) -> bool {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        before != subscribers.len()
    }

    /// Deliver `intent` to every subscriber of its channel. Never blocks and
    /// never fails; with zero subscribers the intent is simply dropped.
    pub fn broadcast(&self, intent: MenuIntent) {
        let subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        let mut delivered = 0usize;
        for subscriber in subscribers.iter().filter(|s| s.intent == intent) {
            subscriber.sink.deliver(intent);
            delivered += 1;
        }
        log::debug!(
            "Intent broadcast: channel={}, subscribers={delivered}",
            intent.channel()
        );
    }
}

impl Default for IntentHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Sink that forwards an intent to a webview window as a Tauri event.
pub struct WebviewSink {
    window: WebviewWindow,
}

impl WebviewSink {
    pub fn new(window: WebviewWindow) -> Self {
        Self { window }
    }
}

impl IntentSink for WebviewSink {
    fn deliver(&self, intent: MenuIntent) {
        // Fire-and-forget: a failed emit (window mid-teardown) is logged and
        // dropped, never surfaced.
        if let Err(e) = self.window.emit(intent.channel(), ()) {
            log::warn!(
                "Failed to deliver intent to window '{}': channel={}, error={e}",
                self.window.label(),
                intent.channel()
            );
        }
    }
}
