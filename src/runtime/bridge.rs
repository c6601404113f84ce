//! Generic executor for the prompt -> act -> shape command pipeline.
//!
//! Every file operation the bridge exposes is the same three steps: present
//! a chooser, run one codec action against the chosen path, shape the
//! outcome into a [`FileOpResult`]. New operations declare a
//! [`DialogRequest`] and an action; none add control flow here.
//!
//! The executor imposes no locking or queueing: concurrent operations
//! against the same path are last-write-wins.

use std::future::Future;
use std::path::PathBuf;

use serde_json::Value;

use crate::api::types::{DialogRequest, FileOpResult};
use crate::runtime::codec::CodecError;
use crate::runtime::dialog::DialogGateway;

/// What a confirmed operation produced: a write that landed, or a document
/// that was read.
pub enum OpOutput {
    Written,
    Loaded(Value),
}

/// Run one file operation end to end.
///
/// Cancelling the dialog short-circuits to `Cancelled` without invoking the
/// action. A failed action maps to `Failed`; the chosen path is never
/// reported alongside a failure.
pub async fn run_file_op<G, F, Fut>(gateway: &G, request: DialogRequest, action: F) -> FileOpResult
where
    G: DialogGateway + ?Sized,
    F: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = Result<OpOutput, CodecError>>,
{
    let title = request.title.clone();

    let Some(path) = gateway.prompt(request).await else {
        log::debug!("{title}: dialog dismissed by user");
        return FileOpResult::Cancelled;
    };

    match action(path.clone()).await {
        Ok(OpOutput::Written) => {
            log::info!("{title}: wrote {}", path.display());
            FileOpResult::saved(&path)
        }
        Ok(OpOutput::Loaded(data)) => {
            log::info!("{title}: loaded {}", path.display());
            FileOpResult::loaded(data)
        }
        Err(err) => {
            log::warn!("{title}: {err}");
            err.into()
        }
    }
}
