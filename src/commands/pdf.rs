//! PDF export command.
//!
//! The buffer is rendered by the frontend and opaque to the bridge; no PDF
//! validation happens here.

use tauri::AppHandle;

use crate::api::types::{DialogRequest, FileOpResult};
use crate::runtime::bridge::{run_file_op, OpOutput};
use crate::runtime::codec;
use crate::runtime::dialog::{DialogGateway, NativeDialogGateway};

async fn export_pdf_inner(
    gateway: &dyn DialogGateway,
    pdf: Vec<u8>,
    file_name: String,
) -> FileOpResult {
    let request = DialogRequest::save("Save PDF")
        .default_name(file_name)
        .pdf_filters();

    run_file_op(gateway, request, |path| async move {
        codec::write_binary(&path, &pdf).await.map(|()| OpOutput::Written)
    })
    .await
}

/// Prompt for a destination and write a caller-supplied PDF buffer.
///
/// # Arguments
/// * `pdf` - the rendered document bytes, written verbatim
/// * `file_name` - suggested filename shown in the save dialog
#[tauri::command]
#[specta::specta]
pub async fn export_pdf(app: AppHandle, pdf: Vec<u8>, file_name: String) -> FileOpResult {
    log::info!("export_pdf requested: suggested_name={file_name}, bytes={}", pdf.len());
    export_pdf_inner(&NativeDialogGateway::new(&app), pdf, file_name).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::FailureKind;
    use crate::runtime::dialog::testing::ScriptedDialog;
    use std::env;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        let dir = env::temp_dir().join(format!("pdf_test_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("failed to create temp dir");
        dir
    }

    #[tokio::test]
    async fn test_export_writes_buffer_verbatim() {
        let dir = temp_dir();
        let target = dir.join("invoice-42.pdf");
        let bytes = vec![0x25, 0x50, 0x44, 0x46, 0x2d, 0x31, 0x2e, 0x34, 0x00];

        let gateway = ScriptedDialog::picks(&target);
        let result =
            export_pdf_inner(&gateway, bytes.clone(), "invoice-42.pdf".to_string()).await;

        assert!(matches!(result, FileOpResult::Success { .. }));
        assert_eq!(std::fs::read(&target).unwrap(), bytes);

        let requests = gateway.requests();
        assert_eq!(requests[0].default_name.as_deref(), Some("invoice-42.pdf"));
        assert_eq!(requests[0].filters[0].label, "PDF Files");

        std::fs::remove_dir_all(&dir).expect("failed to remove temp dir");
    }

    #[tokio::test]
    async fn test_cancel_yields_cancelled() {
        let result =
            export_pdf_inner(&ScriptedDialog::cancels(), vec![0x25], "x.pdf".to_string()).await;
        assert!(matches!(result, FileOpResult::Cancelled));
    }

    #[tokio::test]
    async fn test_unwritable_destination_yields_io_failure() {
        let dir = temp_dir();
        let blocker = dir.join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let target = blocker.join("out.pdf");

        let result =
            export_pdf_inner(&ScriptedDialog::picks(&target), vec![0x25], "out.pdf".to_string())
                .await;
        assert!(matches!(
            result,
            FileOpResult::Failed {
                kind: FailureKind::Io,
                ..
            }
        ));

        std::fs::remove_dir_all(&dir).expect("failed to remove temp dir");
    }
}
