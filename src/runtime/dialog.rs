//! Dialog gateway - adapter over the native file choosers.
//!
//! The gateway is the only seam between the bridge and user interaction, so
//! it is a trait: the shell wires in [`NativeDialogGateway`], tests script
//! their own. A `None` return means the user dismissed the chooser; that is
//! a normal outcome, never an error.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tauri::{AppHandle, Manager};
use tauri_plugin_dialog::DialogExt;
use tokio::sync::oneshot;

use crate::api::types::{DialogMode, DialogRequest};
use crate::runtime::window::WindowAnchor;

/// Presents one native chooser per call and waits (indefinitely, no timeout)
/// for the user's answer.
#[async_trait]
pub trait DialogGateway: Send + Sync {
    async fn prompt(&self, request: DialogRequest) -> Option<PathBuf>;
}

/// Gateway backed by `tauri-plugin-dialog`, anchored to the host window when
/// one is alive. Stateless per call; safe to construct per command.
pub struct NativeDialogGateway {
    app: AppHandle,
    anchor: Arc<WindowAnchor>,
}

impl NativeDialogGateway {
    pub fn new(app: &AppHandle) -> Self {
        let anchor = app.state::<Arc<WindowAnchor>>().inner().clone();
        Self {
            app: app.clone(),
            anchor,
        }
    }
}

#[async_trait]
impl DialogGateway for NativeDialogGateway {
    async fn prompt(&self, request: DialogRequest) -> Option<PathBuf> {
        let mut builder = self.app.dialog().file().set_title(&request.title);

        for filter in &request.filters {
            let extensions: Vec<&str> = filter.extensions.iter().map(String::as_str).collect();
            builder = builder.add_filter(&filter.label, &extensions);
        }

        if let Some(name) = &request.default_name {
            builder = builder.set_file_name(name);
        }

        // Anchoring gives native modal behavior against the host window.
        // A lost anchor is survivable: the chooser opens unparented.
        if let Some(window) = self.anchor.current() {
            builder = builder.set_parent(&window);
        } else {
            log::warn!("Dialog opened without a host window anchor: {}", request.title);
        }

        // The plugin answers through a callback; bridge it into the async
        // flow with a oneshot channel.
        let (tx, rx) = oneshot::channel();
        match request.mode {
            DialogMode::Save => builder.save_file(move |picked| {
                let _ = tx.send(picked);
            }),
            DialogMode::Open => builder.pick_file(move |picked| {
                let _ = tx.send(picked);
            }),
        }

        let picked = rx.await.ok().flatten()?;
        match picked.into_path() {
            Ok(path) => Some(path),
            Err(e) => {
                // Non-filesystem selections (content URIs) do not occur on
                // desktop; treat as a dismissal rather than crossing an error.
                log::warn!("Selected location is not a filesystem path: {e}");
                None
            }
        }
    }
}
