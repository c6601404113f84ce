//! Invoice save/load commands.
//!
//! The invoice document is caller-defined JSON; the bridge is shape-agnostic
//! and only peeks at the optional `id` field to derive a default filename.

use serde_json::Value;
use tauri::AppHandle;

use crate::api::types::{DialogRequest, FileOpResult};
use crate::runtime::bridge::{run_file_op, OpOutput};
use crate::runtime::codec;
use crate::runtime::dialog::{DialogGateway, NativeDialogGateway};

/// Filename stem for a save dialog: the invoice `id` when it is a string or
/// number, `draft` otherwise.
fn invoice_file_stem(invoice: &Value) -> String {
    match invoice.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => "draft".to_string(),
    }
}

async fn save_invoice_inner(gateway: &dyn DialogGateway, invoice: Value) -> FileOpResult {
    let request = DialogRequest::save("Save Invoice")
        .default_name(format!("invoice-{}.json", invoice_file_stem(&invoice)))
        .json_filters();

    run_file_op(gateway, request, |path| async move {
        codec::write_text(&path, &invoice).await.map(|()| OpOutput::Written)
    })
    .await
}

async fn load_invoice_inner(gateway: &dyn DialogGateway) -> FileOpResult {
    let request = DialogRequest::open("Load Invoice").json_filters();

    run_file_op(gateway, request, |path| async move {
        codec::read_text(&path).await.map(OpOutput::Loaded)
    })
    .await
}

/// Prompt for a destination and write one invoice as formatted JSON.
///
/// # Returns
/// * `Success { location }` - the path the user chose
/// * `Cancelled` - the user dismissed the save dialog
/// * `Failed { kind: Io }` - the chosen path could not be written
#[tauri::command]
#[specta::specta]
pub async fn save_invoice(app: AppHandle, invoice: Value) -> FileOpResult {
    log::info!("save_invoice requested");
    save_invoice_inner(&NativeDialogGateway::new(&app), invoice).await
}

/// Prompt for an invoice file and return its parsed contents.
///
/// # Returns
/// * `Success { data }` - the parsed invoice document
/// * `Cancelled` - the user dismissed the open dialog
/// * `Failed { kind: Io }` - the file could not be read
/// * `Failed { kind: Parse }` - the file is not valid JSON
#[tauri::command]
#[specta::specta]
pub async fn load_invoice(app: AppHandle) -> FileOpResult {
    log::info!("load_invoice requested");
    load_invoice_inner(&NativeDialogGateway::new(&app)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::FailureKind;
    use crate::runtime::dialog::testing::ScriptedDialog;
    use serde_json::json;
    use std::env;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        let dir = env::temp_dir().join(format!("invoices_test_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("failed to create temp dir");
        dir
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = temp_dir();
        let target = dir.join("inv.json");
        let invoice = json!({ "id": "42", "total": 100 });

        let save_gateway = ScriptedDialog::picks(&target);
        let saved = save_invoice_inner(&save_gateway, invoice.clone()).await;
        match saved {
            FileOpResult::Success { location, .. } => {
                assert_eq!(location.unwrap(), target.display().to_string());
            }
            other => panic!("expected success, got {other:?}"),
        }

        // On-disk shape: 2-space indentation, key order as given.
        let text = std::fs::read_to_string(&target).unwrap();
        assert_eq!(text, "{\n  \"id\": \"42\",\n  \"total\": 100\n}");

        let load_gateway = ScriptedDialog::picks(&target);
        let loaded = load_invoice_inner(&load_gateway).await;
        match loaded {
            FileOpResult::Success { data, .. } => assert_eq!(data.unwrap(), invoice),
            other => panic!("expected success, got {other:?}"),
        }

        std::fs::remove_dir_all(&dir).expect("failed to remove temp dir");
    }

    #[tokio::test]
    async fn test_default_name_derived_from_string_id() {
        let gateway = ScriptedDialog::cancels();
        save_invoice_inner(&gateway, json!({ "id": "42" })).await;

        let requests = gateway.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].default_name.as_deref(), Some("invoice-42.json"));
        assert_eq!(requests[0].title, "Save Invoice");
    }

    #[tokio::test]
    async fn test_default_name_accepts_numeric_id() {
        let gateway = ScriptedDialog::cancels();
        save_invoice_inner(&gateway, json!({ "id": 7 })).await;

        let requests = gateway.requests();
        assert_eq!(requests[0].default_name.as_deref(), Some("invoice-7.json"));
    }

    #[tokio::test]
    async fn test_default_name_falls_back_to_draft() {
        let gateway = ScriptedDialog::cancels();
        save_invoice_inner(&gateway, json!({ "total": 100 })).await;

        let requests = gateway.requests();
        assert_eq!(
            requests[0].default_name.as_deref(),
            Some("invoice-draft.json")
        );
    }

    #[tokio::test]
    async fn test_cancel_yields_cancelled_not_failed() {
        let gateway = ScriptedDialog::cancels();
        let result = load_invoice_inner(&gateway).await;
        assert!(matches!(result, FileOpResult::Cancelled));
    }

    #[tokio::test]
    async fn test_load_corrupt_file_yields_parse_failure() {
        let dir = temp_dir();
        let source = dir.join("corrupt.json");
        std::fs::write(&source, "not json").unwrap();

        let gateway = ScriptedDialog::picks(&source);
        let result = load_invoice_inner(&gateway).await;
        assert!(matches!(
            result,
            FileOpResult::Failed {
                kind: FailureKind::Parse,
                ..
            }
        ));

        std::fs::remove_dir_all(&dir).expect("failed to remove temp dir");
    }
}
