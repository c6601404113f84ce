//! Tauri command handlers organized by domain.
//!
//! Each submodule declares the dialog configuration and codec action for its
//! operations; the shared control flow lives in `runtime::bridge`.

pub mod data;
pub mod invoices;
pub mod pdf;
