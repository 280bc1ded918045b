// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for browsing reusable content.
//! Handles the launcher button, dialog chrome, and wiring to background work.

pub mod components;

use std::sync::Arc;

use eframe::egui;

use crate::mvu::{self, AppModel, Command, Msg, Services};
use crate::ui::components::accordion;

/// Stateful egui application hosting the reusable content dialog.
pub struct ReusableContentApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl ReusableContentApp {
    /// Spawn the command workers and queue the initial content load.
    pub fn new(services: Services) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();
        let services = Arc::new(services);

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().clamp(2, 4))
            .unwrap_or(2);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let services = Arc::clone(&services);
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd, &services);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model: AppModel::default(),
            inbox: vec![Msg::LoadRequested],
            cmd_tx,
            msg_rx,
        }
    }

    /// Drain worker replies and apply every queued message to the model.
    fn pump(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // FIFO so user actions apply in the order they happened.
        let msgs = std::mem::take(&mut self.inbox);
        for msg in msgs {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }
    }
}

impl eframe::App for ReusableContentApp {
    // Required by eframe 0.34; rendering stays in `update`, which eframe still calls each frame.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                self.render_launcher(ui);
                ui.heading("Reusable Content");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                    ui.separator();
                    self.render_refresh_button(ui);
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.model.dialog_open() {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "Click {} to browse reusable content.",
                            egui_phosphor::regular::FILE_TEXT
                        ))
                        .color(egui::Color32::from_gray(110)),
                    );
                });
            }
        });

        self.render_dialog(ctx);

        if self.model.pending_commands > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}

impl ReusableContentApp {
    /// Icon button that opens or closes the dialog.
    fn render_launcher(&mut self, ui: &mut egui::Ui) {
        let icon = egui::RichText::new(egui_phosphor::regular::FILE_TEXT).size(20.0);
        if ui
            .add(egui::Button::new(icon).selected(self.model.dialog_open()))
            .on_hover_text("Reusable content")
            .clicked()
        {
            self.inbox.push(Msg::ToggleDialog);
        }
    }

    /// Reload the list; disabled while a fetch is running.
    fn render_refresh_button(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(format!(
            "{} Refresh",
            egui_phosphor::regular::ARROW_CLOCKWISE
        ));
        if ui
            .add_enabled(!self.model.fetch_in_flight, button)
            .on_disabled_hover_text("Loading…")
            .clicked()
        {
            self.inbox.push(Msg::LoadRequested);
        }
    }

    /// Dialog window holding the accordion plus its close button.
    fn render_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.model.dialog.as_ref() else {
            return;
        };

        let mut open = true;
        let mut msgs = Vec::new();
        let mut close_clicked = false;

        egui::Window::new("Reusable Content")
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_width(420.0)
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 48.0))
            .show(ctx, |ui| {
                if !self.model.loaded {
                    ui.horizontal(|ui| {
                        ui.add(egui::Spinner::new().size(14.0));
                        ui.label("Loading…");
                    });
                } else {
                    msgs = accordion::view(ui, dialog);
                }

                ui.add_space(8.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui.button("Close").clicked() {
                        close_clicked = true;
                    }
                });
            });

        self.inbox.extend(msgs.into_iter().map(Msg::Accordion));
        if !open || close_clicked {
            self.inbox.push(Msg::CloseDialog);
        }
        if !self.inbox.is_empty() {
            ctx.request_repaint();
        }
    }

    /// Render loading state and item count.
    fn render_status(&self, ui: &mut egui::Ui) {
        let text = if self.model.fetch_in_flight {
            "Loading content…".to_string()
        } else if self.model.loaded {
            format!("{} item(s) loaded", self.model.items.len())
        } else {
            String::new()
        };

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0))
                    .on_hover_text(format!(
                        "{} task(s) running in background",
                        self.model.pending_commands
                    ));
            }
        });
    }
}
