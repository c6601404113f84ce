//! Full-collection backup and restore commands.
//!
//! `export_all_data` writes the caller's snapshot verbatim; `import_all_data`
//! hands the parsed file back without merging anything into application
//! state. What the snapshot contains is the frontend's business.

use serde_json::Value;
use tauri::AppHandle;

use crate::api::types::{DialogRequest, FileOpResult};
use crate::runtime::bridge::{run_file_op, OpOutput};
use crate::runtime::codec;
use crate::runtime::dialog::{DialogGateway, NativeDialogGateway};

/// Default filename for the backup file.
const BACKUP_FILE_NAME: &str = "invoices-backup.json";

async fn export_all_data_inner(gateway: &dyn DialogGateway, snapshot: Value) -> FileOpResult {
    let request = DialogRequest::save("Export All Data")
        .default_name(BACKUP_FILE_NAME)
        .json_filters();

    run_file_op(gateway, request, |path| async move {
        codec::write_text(&path, &snapshot).await.map(|()| OpOutput::Written)
    })
    .await
}

async fn import_all_data_inner(gateway: &dyn DialogGateway) -> FileOpResult {
    let request = DialogRequest::open("Import Data").json_filters();

    run_file_op(gateway, request, |path| async move {
        codec::read_text(&path).await.map(OpOutput::Loaded)
    })
    .await
}

/// Prompt for a destination and write the full collection snapshot.
#[tauri::command]
#[specta::specta]
pub async fn export_all_data(app: AppHandle, snapshot: Value) -> FileOpResult {
    log::info!("export_all_data requested");
    export_all_data_inner(&NativeDialogGateway::new(&app), snapshot).await
}

/// Prompt for a backup file and return its parsed contents.
///
/// A malformed file yields `Failed { kind: Parse }`; nothing is merged into
/// application state on any failure path.
#[tauri::command]
#[specta::specta]
pub async fn import_all_data(app: AppHandle) -> FileOpResult {
    log::info!("import_all_data requested");
    import_all_data_inner(&NativeDialogGateway::new(&app)).await
}
