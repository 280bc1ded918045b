// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Accordion of reusable content, MVU style.
//!
//! The model holds one section per item plus its expanded flag; the view is a
//! pure projection of that state. Every interaction is a message keyed by
//! [`ContentId`], so toggling never needs to re-wire anything.

use std::time::{Duration, Instant};

use eframe::egui;
use egui_phosphor::regular;
use uuid::Uuid;

use crate::logic::CopyOutcome;
use crate::models::{Content, ContentId};
use crate::utils::preview_text;

/// How long the copy confirmation stays visible.
pub const CONFIRMATION_TTL: Duration = Duration::from_millis(2500);

/// Expansion state of one section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionState {
    Collapsed,
    Expanded,
}

impl SectionState {
    fn from_flag(expanded: bool) -> Self {
        if expanded {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }

    fn flipped(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

/// One rendered item: header (title + copy button) and body.
#[derive(Clone, Debug)]
struct Section {
    content: Content,
    preview: String,
    state: SectionState,
}

/// Transient or sticky feedback shown above the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
    pub shown_at: Instant,
}

impl Notice {
    /// Confirmations fade; errors stay until dismissed or replaced.
    pub fn is_visible(&self, now: Instant) -> bool {
        self.is_error || now.saturating_duration_since(self.shown_at) < CONFIRMATION_TTL
    }

    /// Time left before a confirmation expires; `None` for errors.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        if self.is_error {
            return None;
        }
        Some(CONFIRMATION_TTL.saturating_sub(now.saturating_duration_since(self.shown_at)))
    }
}

/// Presentation state for one dialog session.
#[derive(Clone, Debug)]
pub struct AccordionModel {
    session: Uuid,
    sections: Vec<Section>,
    notice: Option<Notice>,
}

/// Messages emitted by the accordion view or returned by copy commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccordionMsg {
    Toggle(ContentId),
    ExpandAll,
    CollapseAll,
    CopyRequested(ContentId),
    CopyFinished {
        session: Uuid,
        id: ContentId,
        outcome: CopyOutcome,
    },
    DismissNotice,
}

/// Side effects requested by the accordion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccordionCommand {
    /// Write `text` to the clipboard; reply with `CopyFinished`.
    Copy {
        session: Uuid,
        id: ContentId,
        text: String,
    },
}

impl AccordionModel {
    /// Build the surface for an ordered list: one section per item, in input
    /// order, each starting in the state its `expand` flag asks for.
    pub fn render(items: &[Content]) -> Self {
        let sections = items
            .iter()
            .map(|content| Section {
                preview: preview_text(content.body()),
                state: SectionState::from_flag(content.expand()),
                content: content.clone(),
            })
            .collect();

        Self {
            session: Uuid::new_v4(),
            sections,
            notice: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Flip one section. Unknown ids are ignored.
    pub fn toggle(&mut self, id: ContentId) {
        match self.section_mut(id) {
            Some(section) => section.state = section.state.flipped(),
            None => tracing::debug!(%id, "toggle for missing section ignored"),
        }
    }

    /// Release every section; later messages become no-ops.
    pub fn teardown(&mut self) {
        tracing::debug!(session = %self.session, sections = self.sections.len(), "accordion torn down");
        self.sections.clear();
        self.notice = None;
    }

    fn section(&self, id: ContentId) -> Option<&Section> {
        self.sections.iter().find(|s| s.content.id() == id)
    }

    fn section_mut(&mut self, id: ContentId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.content.id() == id)
    }

    fn set_all(&mut self, state: SectionState) {
        for section in &mut self.sections {
            section.state = state;
        }
    }

    fn show_notice(&mut self, message: impl Into<String>, is_error: bool) {
        self.notice = Some(Notice {
            message: message.into(),
            is_error,
            shown_at: Instant::now(),
        });
    }
}

#[cfg(test)]
impl AccordionModel {
    pub fn session(&self) -> Uuid {
        self.session
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn ids(&self) -> Vec<ContentId> {
        self.sections.iter().map(|s| s.content.id()).collect()
    }

    /// `None` when no such section exists.
    pub fn state(&self, id: ContentId) -> Option<SectionState> {
        self.section(id).map(|s| s.state)
    }

    pub fn is_expanded(&self, id: ContentId) -> bool {
        self.state(id).is_some_and(SectionState::is_expanded)
    }
}

/// Apply a message to the model, pushing side effects into `cmds`.
pub fn update(model: &mut AccordionModel, msg: AccordionMsg, cmds: &mut Vec<AccordionCommand>) {
    match msg {
        AccordionMsg::Toggle(id) => model.toggle(id),
        AccordionMsg::ExpandAll => model.set_all(SectionState::Expanded),
        AccordionMsg::CollapseAll => model.set_all(SectionState::Collapsed),
        AccordionMsg::CopyRequested(id) => match model.section(id) {
            Some(section) => cmds.push(AccordionCommand::Copy {
                session: model.session,
                id,
                text: section.content.body().to_string(),
            }),
            None => tracing::debug!(%id, "copy for missing section ignored"),
        },
        AccordionMsg::CopyFinished {
            session,
            id,
            outcome,
        } => {
            if session != model.session || model.section(id).is_none() {
                tracing::debug!(%id, %session, "stale copy result ignored");
                return;
            }
            match outcome {
                CopyOutcome::Copied => model.show_notice("Content copied to clipboard!", false),
                CopyOutcome::Failed(err) => {
                    model.show_notice(format!("Failed to copy content: {err}"), true)
                }
            }
        }
        AccordionMsg::DismissNotice => model.notice = None,
    }
}

/// Render the accordion and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &AccordionModel) -> Vec<AccordionMsg> {
    let mut msgs = Vec::new();

    render_notice(ui, model, &mut msgs);

    if model.is_empty() {
        ui.label(
            egui::RichText::new("No reusable content available.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return msgs;
    }

    ui.horizontal(|ui| {
        if ui
            .small_button(format!("{} Expand all", regular::ARROWS_OUT_SIMPLE))
            .clicked()
        {
            msgs.push(AccordionMsg::ExpandAll);
        }
        if ui
            .small_button(format!("{} Collapse all", regular::ARROWS_IN_SIMPLE))
            .clicked()
        {
            msgs.push(AccordionMsg::CollapseAll);
        }
    });
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for section in &model.sections {
                render_section(ui, section, &mut msgs);
                ui.separator();
            }
        });

    msgs
}

/// Header row (caret, title, copy affordance) followed by the body when expanded.
fn render_section(ui: &mut egui::Ui, section: &Section, msgs: &mut Vec<AccordionMsg>) {
    let id = section.content.id();
    let expanded = section.state.is_expanded();

    ui.push_id(id.index(), |ui| {
        ui.horizontal(|ui| {
            let caret = if expanded {
                regular::CARET_DOWN
            } else {
                regular::CARET_RIGHT
            };
            let header = ui.add(
                egui::Button::new(
                    egui::RichText::new(format!("{caret} {}", section.content.title())).strong(),
                )
                .frame(false),
            );
            if header.clicked() {
                msgs.push(AccordionMsg::Toggle(id));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(regular::CLIPBOARD_TEXT)
                    .on_hover_text("Copy to clipboard")
                    .clicked()
                {
                    msgs.push(AccordionMsg::CopyRequested(id));
                }
            });
        });

        if expanded {
            ui.add_space(2.0);
            ui.indent("body", |ui| {
                ui.label(section.preview.as_str());
            });
        }
    });
}

fn render_notice(ui: &mut egui::Ui, model: &AccordionModel, msgs: &mut Vec<AccordionMsg>) {
    let Some(notice) = model.notice() else {
        return;
    };
    let now = Instant::now();
    if !notice.is_visible(now) {
        return;
    }

    let color = if notice.is_error {
        egui::Color32::from_rgb(200, 60, 60)
    } else {
        egui::Color32::from_rgb(40, 140, 70)
    };
    let icon = if notice.is_error {
        regular::WARNING
    } else {
        regular::CHECK_CIRCLE
    };

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("{icon} {}", notice.message)).color(color));
        if notice.is_error
            && ui
                .small_button(regular::X)
                .on_hover_text("Dismiss")
                .clicked()
        {
            msgs.push(AccordionMsg::DismissNotice);
        }
    });
    ui.add_space(4.0);

    // Wake up exactly when the confirmation expires.
    if let Some(remaining) = notice.remaining(now) {
        ui.ctx().request_repaint_after(remaining);
    }
}
