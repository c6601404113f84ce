//! Invoice Desk host process.
//!
//! The webview is sandboxed; everything that touches the disk or the native
//! shell lives here and is reachable only through the five commands
//! registered below plus the enumerated menu-intent channels. See
//! `capabilities/default.json` for the static allow-list granted to the
//! webview.

pub mod api;
pub mod commands;
pub mod menu;
pub mod runtime;

use std::sync::Arc;

use tauri::{AppHandle, Manager, RunEvent, WindowEvent};

use crate::runtime::notify::{IntentHub, MenuIntent, WebviewSink};
use crate::runtime::window::{WindowAnchor, MAIN_WINDOW_LABEL};

/// Attach the host window to the anchor and subscribe it to every intent
/// channel. Creates the window first if none exists (macOS reactivation
/// after the last window closed). No-op while a window is already anchored.
fn activate_main_window(app: &AppHandle) -> tauri::Result<()> {
    let anchor = app.state::<Arc<WindowAnchor>>().inner().clone();
    let hub = app.state::<Arc<IntentHub>>().inner().clone();

    if anchor.is_attached() {
        return Ok(());
    }

    let window = match app.get_webview_window(MAIN_WINDOW_LABEL) {
        Some(window) => window,
        None => {
            log::info!("Recreating host window");
            tauri::WebviewWindowBuilder::new(
                app,
                MAIN_WINDOW_LABEL,
                tauri::WebviewUrl::default(),
            )
            .title("Invoice Desk")
            .inner_size(1400.0, 900.0)
            .min_inner_size(1200.0, 800.0)
            .build()?
        }
    };

    let subscriptions = MenuIntent::ALL
        .into_iter()
        .map(|intent| hub.subscribe(intent, Arc::new(WebviewSink::new(window.clone()))))
        .collect();
    anchor.attach(window, subscriptions);
    log::info!("Host window attached");
    Ok(())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let specta_builder =
        tauri_specta::Builder::<tauri::Wry>::new().commands(tauri_specta::collect_commands![
            commands::invoices::save_invoice,
            commands::invoices::load_invoice,
            commands::data::export_all_data,
            commands::data::import_all_data,
            commands::pdf::export_pdf
        ]);

    #[cfg(debug_assertions)]
    specta_builder
        .export(specta_typescript::Typescript::default(), "bindings.ts")
        .expect("failed to export typescript bindings");

    let mut builder = tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_os::init());

    #[cfg(desktop)]
    {
        builder = builder
            .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) {
                    let _ = window.set_focus();
                }
            }))
            .plugin(tauri_plugin_window_state::Builder::default().build());
    }

    builder
        .invoke_handler(specta_builder.invoke_handler())
        .setup(move |app| {
            specta_builder.mount_events(app);

            app.manage(Arc::new(WindowAnchor::new()));
            app.manage(Arc::new(IntentHub::new()));

            let handle = app.handle();
            activate_main_window(handle)?;

            let hub = handle.state::<Arc<IntentHub>>().inner().clone();
            menu::install(handle, hub)?;

            Ok(())
        })
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                let app = window.app_handle();
                let anchor = app.state::<Arc<WindowAnchor>>().inner().clone();
                let hub = app.state::<Arc<IntentHub>>().inner().clone();
                for id in anchor.invalidate(window.label()) {
                    hub.unsubscribe(&id);
                }
                log::info!("Host window '{}' closed", window.label());
            }
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|_app, event| match event {
            // macOS convention: the process stays alive with no windows until
            // an explicit exit, and reactivation brings the window back.
            #[cfg(target_os = "macos")]
            RunEvent::ExitRequested { api, code, .. } if code.is_none() => {
                api.prevent_exit();
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                if let Err(e) = activate_main_window(_app) {
                    log::error!("Failed to recreate host window: {e}");
                }
            }
            RunEvent::Ready => {
                log::info!("Invoice Desk ready");
            }
            _ => {}
        });
}
