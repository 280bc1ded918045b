// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring egui/eframe to launch the reusable content UI.

use anyhow::{Result, anyhow};
use eframe::egui;
use egui_phosphor::Variant;

use crate::config::AppConfig;
use crate::logic::SystemClipboard;
use crate::mvu::Services;
use crate::ui::ReusableContentApp;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run(config: AppConfig) -> Result<()> {
    let services = Services {
        repository: config.repository()?,
        clipboard: Box::new(SystemClipboard::new()),
    };

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([360.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Reusable Content",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(ReusableContentApp::new(services)))
        }),
    )
    .map_err(|err| anyhow!("UI event loop failed: {err}"))
}
