//! Application menu wiring.
//!
//! The menu is the host-initiated side of the bridge: every File item except
//! Exit broadcasts a [`MenuIntent`] through the hub, one-way, and the UI
//! decides what to do with it. Menu item ids are the intent channel names so
//! the event handler is a pure lookup.

use std::sync::Arc;

use tauri::menu::{Menu, MenuBuilder, MenuItemBuilder, SubmenuBuilder};
use tauri::{AppHandle, Wry};

use crate::runtime::notify::{IntentHub, MenuIntent};

#[cfg(target_os = "macos")]
use tauri::menu::AboutMetadata;

const EXIT_MENU_ID: &str = "exit";

/// Build the menu, set it on the app, and route clicks into the hub.
pub fn install(app: &AppHandle, hub: Arc<IntentHub>) -> tauri::Result<()> {
    let menu = build(app)?;
    app.set_menu(menu)?;

    app.on_menu_event(move |app, event| {
        let id = event.id().as_ref();
        if id == EXIT_MENU_ID {
            log::info!("Exit selected from menu");
            app.exit(0);
            return;
        }
        match MenuIntent::from_channel(id) {
            Some(intent) => hub.broadcast(intent),
            // Predefined (native role) items resolve without us.
            None => log::debug!("Menu event handled natively: {id}"),
        }
    });

    Ok(())
}

fn build(app: &AppHandle) -> tauri::Result<Menu<Wry>> {
    let new_invoice = MenuItemBuilder::with_id(MenuIntent::NewDocument.channel(), "New Invoice")
        .accelerator("CmdOrCtrl+N")
        .build(app)?;
    let save_invoice = MenuItemBuilder::with_id(MenuIntent::SaveDocument.channel(), "Save Invoice")
        .accelerator("CmdOrCtrl+S")
        .build(app)?;
    let export_pdf = MenuItemBuilder::with_id(MenuIntent::ExportPdf.channel(), "Export PDF")
        .accelerator("CmdOrCtrl+E")
        .build(app)?;
    let import_data =
        MenuItemBuilder::with_id(MenuIntent::ImportData.channel(), "Import Data").build(app)?;
    let export_data =
        MenuItemBuilder::with_id(MenuIntent::ExportData.channel(), "Export Data").build(app)?;
    let exit = MenuItemBuilder::with_id(EXIT_MENU_ID, "Exit")
        .accelerator("CmdOrCtrl+Q")
        .build(app)?;

    let file = SubmenuBuilder::new(app, "File")
        .item(&new_invoice)
        .item(&save_invoice)
        .separator()
        .item(&export_pdf)
        .separator()
        .item(&import_data)
        .item(&export_data)
        .separator()
        .item(&exit)
        .build()?;

    let edit = SubmenuBuilder::new(app, "Edit")
        .undo()
        .redo()
        .separator()
        .cut()
        .copy()
        .paste()
        .select_all()
        .build()?;

    let window = SubmenuBuilder::new(app, "Window")
        .minimize()
        .close_window()
        .build()?;

    let builder = MenuBuilder::new(app);

    #[cfg(target_os = "macos")]
    let builder = {
        let app_menu = SubmenuBuilder::new(app, "Invoice Desk")
            .about(Some(AboutMetadata::default()))
            .separator()
            .services()
            .separator()
            .hide()
            .hide_others()
            .show_all()
            .separator()
            .quit()
            .build()?;
        builder.item(&app_menu)
    };

    builder.item(&file).item(&edit).item(&window).build()
}
