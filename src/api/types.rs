//! Bridge types for commands and events.
//!
//! These types define the stable contract that crosses the webview boundary.
//! Every file operation resolves to a [`FileOpResult`]; no other shape (and
//! never a raw error) is surfaced to the frontend.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use specta::Type;

/// Uniform outcome of every bridge file operation.
///
/// Exactly one variant per result; the frontend must handle all three.
/// `Cancelled` is a normal outcome of any dialog interaction, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum FileOpResult {
    /// The operation completed. Write operations populate `location` with the
    /// path the user chose; read operations populate `data` with the parsed
    /// document.
    Success {
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        location: Option<String>,
    },
    /// The user dismissed the dialog (Cancel button, Escape, window close).
    Cancelled,
    /// The operation failed after the user confirmed a path. `message` is
    /// human-readable; no stack trace or internal path leaks through here.
    Failed { kind: FailureKind, message: String },
}

/// Distinguishes "the disk failed" from "the file is corrupt" so the
/// frontend can word its error surface accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub enum FailureKind {
    Io,
    Parse,
}

impl FileOpResult {
    /// Successful write: report where the data landed.
    pub fn saved(location: &Path) -> Self {
        FileOpResult::Success {
            data: None,
            location: Some(location.display().to_string()),
        }
    }

    /// Successful read: hand the parsed document back.
    pub fn loaded(data: Value) -> Self {
        FileOpResult::Success {
            data: Some(data),
            location: None,
        }
    }
}

/// Whether a dialog lets the user pick an existing file or name a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Open,
    Save,
}

/// A labeled extension group offered by a file chooser, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    pub label: String,
    pub extensions: Vec<String>,
}

/// Everything the dialog gateway needs to present one native chooser.
///
/// Pure value, assembled per call; the gateway holds no state between prompts.
#[derive(Debug, Clone)]
pub struct DialogRequest {
    pub title: String,
    pub default_name: Option<String>,
    pub filters: Vec<ExtensionFilter>,
    pub mode: DialogMode,
}

impl DialogRequest {
    pub fn save(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            default_name: None,
            filters: Vec::new(),
            mode: DialogMode::Save,
        }
    }

    pub fn open(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            default_name: None,
            filters: Vec::new(),
            mode: DialogMode::Open,
        }
    }

    pub fn default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = Some(name.into());
        self
    }

    pub fn filter(mut self, label: &str, extensions: &[&str]) -> Self {
        self.filters.push(ExtensionFilter {
            label: label.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        });
        self
    }

    /// Filter set for the JSON-document operations, most specific first.
    pub fn json_filters(self) -> Self {
        self.filter("JSON Files", &["json"]).filter("All Files", &["*"])
    }

    /// Filter set for the PDF export operation.
    pub fn pdf_filters(self) -> Self {
        self.filter("PDF Files", &["pdf"]).filter("All Files", &["*"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_with_location_serializes_without_data_field() {
        let result = FileOpResult::saved(Path::new("/tmp/inv.json"));
        let encoded = serde_json::to_value(&result).unwrap();
        assert_eq!(
            encoded,
            json!({ "status": "success", "location": "/tmp/inv.json" })
        );
    }

    #[test]
    fn failed_carries_kind_and_message() {
        let result = FileOpResult::Failed {
            kind: FailureKind::Parse,
            message: "file is not valid JSON".to_string(),
        };
        let encoded = serde_json::to_value(&result).unwrap();
        assert_eq!(encoded["status"], "failed");
        assert_eq!(encoded["kind"], "parse");
    }

    #[test]
    fn json_filters_are_ordered_most_specific_first() {
        let request = DialogRequest::open("Load Invoice").json_filters();
        assert_eq!(request.filters[0].label, "JSON Files");
        assert_eq!(request.filters[0].extensions, vec!["json"]);
        assert_eq!(request.filters[1].label, "All Files");
    }
}
