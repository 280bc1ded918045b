// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use std::sync::Arc;

use crate::logic::{Clipboard, ContentRepository, copy_to_clipboard};
use crate::models::Content;
use crate::ui::components::accordion::{
    self, AccordionCommand, AccordionModel, AccordionMsg,
};

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Last loaded content list; replaced wholesale on each fetch.
    pub items: Arc<[Content]>,
    /// Whether at least one fetch has completed.
    pub loaded: bool,
    /// A fetch is queued or running.
    pub fetch_in_flight: bool,
    /// Accordion for the open dialog; `None` while the dialog is closed.
    pub dialog: Option<AccordionModel>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
pub enum Msg {
    /// Start-up hook and manual refresh.
    LoadRequested,
    ContentLoaded(Vec<Content>),
    ToggleDialog,
    CloseDialog,
    Accordion(AccordionMsg),
}

/// Commands represent side-effects executed off the UI thread.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    FetchContent,
    Accordion(AccordionCommand),
}

/// Collaborators needed to execute commands.
pub struct Services {
    pub repository: ContentRepository,
    pub clipboard: Box<dyn Clipboard>,
}

impl AppModel {
    pub fn dialog_open(&self) -> bool {
        self.dialog.is_some()
    }
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::LoadRequested => {
            if model.fetch_in_flight {
                tracing::debug!("fetch already in flight; refresh ignored");
                return;
            }
            model.fetch_in_flight = true;
            cmds.push(Command::FetchContent);
        }
        Msg::ContentLoaded(items) => {
            model.fetch_in_flight = false;
            model.loaded = true;
            model.items = items.into();
            if let Some(dialog) = model.dialog.as_mut() {
                dialog.teardown();
                model.dialog = Some(AccordionModel::render(&model.items));
            }
        }
        Msg::ToggleDialog => {
            if model.dialog_open() {
                close_dialog(model);
            } else {
                model.dialog = Some(AccordionModel::render(&model.items));
            }
        }
        Msg::CloseDialog => close_dialog(model),
        Msg::Accordion(m) => {
            let Some(dialog) = model.dialog.as_mut() else {
                tracing::debug!("accordion message without an open dialog ignored");
                return;
            };
            let mut acc_cmds = Vec::new();
            accordion::update(dialog, m, &mut acc_cmds);
            cmds.extend(acc_cmds.into_iter().map(Command::Accordion));
        }
    }
}

/// Execute a command and return the resulting message.
pub fn run_command(cmd: Command, services: &Services) -> Msg {
    match cmd {
        Command::FetchContent => Msg::ContentLoaded(services.repository.fetch_all()),
        Command::Accordion(AccordionCommand::Copy { session, id, text }) => {
            let outcome = copy_to_clipboard(services.clipboard.as_ref(), &text);
            Msg::Accordion(AccordionMsg::CopyFinished {
                session,
                id,
                outcome,
            })
        }
    }
}

fn close_dialog(model: &mut AppModel) {
    if let Some(mut dialog) = model.dialog.take() {
        dialog.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{
        ContentSource, CopyError, CopyOutcome, FetchError, ListQuery, DEFAULT_LIST_TITLE,
    };
    use crate::models::{ContentId, RawRecord};
    use crate::ui::components::accordion::SectionState;
    use std::sync::Mutex;

    struct ScenarioSource;

    impl ContentSource for ScenarioSource {
        fn query(&self, _query: &ListQuery) -> Result<Vec<RawRecord>, FetchError> {
            Ok(vec![
                RawRecord {
                    title: Some("Email Signature".into()),
                    content: Some("<p>Best,</p>".into()),
                    order: Some(2.0),
                    expand: Some(false),
                },
                RawRecord {
                    title: Some("Disclaimer".into()),
                    content: Some("Confidential.".into()),
                    order: Some(1.0),
                    expand: Some(true),
                },
            ])
        }

        fn describe(&self) -> String {
            "scenario".into()
        }
    }

    struct UnreachableSource;

    impl ContentSource for UnreachableSource {
        fn query(&self, _query: &ListQuery) -> Result<Vec<RawRecord>, FetchError> {
            Err(FetchError::Status {
                url: "http://store.invalid".into(),
                status: 502,
            })
        }

        fn describe(&self) -> String {
            "unreachable".into()
        }
    }

    struct MemoryClipboard {
        deny: bool,
        written: Mutex<Vec<String>>,
    }

    impl Clipboard for MemoryClipboard {
        fn set_text(&self, text: &str) -> Result<(), CopyError> {
            if self.deny {
                return Err(CopyError::Rejected("access denied".into()));
            }
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn services(source: Box<dyn ContentSource>, deny: bool) -> Services {
        Services {
            repository: ContentRepository::new(source, DEFAULT_LIST_TITLE),
            clipboard: Box::new(MemoryClipboard {
                deny,
                written: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Run `msg` and every command it produces to completion.
    fn drive(model: &mut AppModel, msg: Msg, services: &Services) {
        let mut queue = vec![msg];
        while let Some(msg) = queue.pop() {
            let mut cmds = Vec::new();
            update(model, msg, &mut cmds);
            queue.extend(cmds.into_iter().map(|c| run_command(c, services)));
        }
    }

    #[test]
    fn load_then_open_renders_in_order_with_initial_visibility() {
        let services = services(Box::new(ScenarioSource), false);
        let mut model = AppModel::default();

        drive(&mut model, Msg::LoadRequested, &services);
        drive(&mut model, Msg::ToggleDialog, &services);

        assert!(model.loaded);
        assert!(!model.fetch_in_flight);
        let titles: Vec<&str> = model.items.iter().map(Content::title).collect();
        assert_eq!(titles, vec!["Disclaimer", "Email Signature"]);

        let dialog = model.dialog.as_ref().expect("dialog open");
        assert_eq!(dialog.state(ContentId::new(0)), Some(SectionState::Expanded));
        assert_eq!(dialog.state(ContentId::new(1)), Some(SectionState::Collapsed));
    }

    #[test]
    fn failed_load_renders_empty_accordion() {
        let services = services(Box::new(UnreachableSource), false);
        let mut model = AppModel::default();

        drive(&mut model, Msg::LoadRequested, &services);
        drive(&mut model, Msg::ToggleDialog, &services);

        assert!(model.loaded);
        assert!(model.items.is_empty());
        assert!(model.dialog.as_ref().is_some_and(AccordionModel::is_empty));
    }

    #[test]
    fn second_load_while_in_flight_is_ignored() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(&mut model, Msg::LoadRequested, &mut cmds);
        update(&mut model, Msg::LoadRequested, &mut cmds);

        assert_eq!(cmds, vec![Command::FetchContent]);
    }

    #[test]
    fn copy_round_trip_confirms() {
        let services = services(Box::new(ScenarioSource), false);
        let mut model = AppModel::default();
        drive(&mut model, Msg::LoadRequested, &services);
        drive(&mut model, Msg::ToggleDialog, &services);

        drive(
            &mut model,
            Msg::Accordion(AccordionMsg::CopyRequested(ContentId::new(0))),
            &services,
        );

        let notice = model
            .dialog
            .as_ref()
            .and_then(AccordionModel::notice)
            .expect("notice expected");
        assert!(!notice.is_error);
    }

    #[test]
    fn denied_clipboard_surfaces_failure() {
        let services = services(Box::new(ScenarioSource), true);
        let mut model = AppModel::default();
        drive(&mut model, Msg::LoadRequested, &services);
        drive(&mut model, Msg::ToggleDialog, &services);

        let msg = run_command(
            Command::Accordion(AccordionCommand::Copy {
                session: model.dialog.as_ref().unwrap().session(),
                id: ContentId::new(0),
                text: "Confidential.".into(),
            }),
            &services,
        );
        match &msg {
            Msg::Accordion(AccordionMsg::CopyFinished { outcome, .. }) => {
                assert!(matches!(outcome, CopyOutcome::Failed(_)));
            }
            _ => panic!("unexpected message"),
        }
        drive(&mut model, msg, &services);

        let notice = model
            .dialog
            .as_ref()
            .and_then(AccordionModel::notice)
            .expect("notice expected");
        assert!(notice.is_error);
    }

    #[test]
    fn closing_dialog_tears_down_and_drops_late_results() {
        let services = services(Box::new(ScenarioSource), false);
        let mut model = AppModel::default();
        drive(&mut model, Msg::LoadRequested, &services);
        drive(&mut model, Msg::ToggleDialog, &services);
        let session = model.dialog.as_ref().unwrap().session();

        drive(&mut model, Msg::CloseDialog, &services);
        assert!(!model.dialog_open());

        let mut cmds = Vec::new();
        update(
            &mut model,
            Msg::Accordion(AccordionMsg::CopyFinished {
                session,
                id: ContentId::new(0),
                outcome: CopyOutcome::Copied,
            }),
            &mut cmds,
        );
        assert!(cmds.is_empty());
        assert!(!model.dialog_open());
    }

    #[test]
    fn reload_rerenders_open_dialog() {
        let services = services(Box::new(ScenarioSource), false);
        let mut model = AppModel::default();
        drive(&mut model, Msg::LoadRequested, &services);
        drive(&mut model, Msg::ToggleDialog, &services);
        drive(
            &mut model,
            Msg::Accordion(AccordionMsg::Toggle(ContentId::new(1))),
            &services,
        );
        assert!(model.dialog.as_ref().unwrap().is_expanded(ContentId::new(1)));

        drive(&mut model, Msg::LoadRequested, &services);

        let dialog = model.dialog.as_ref().expect("dialog still open");
        assert_eq!(dialog.len(), 2);
        assert!(!dialog.is_expanded(ContentId::new(1)));
    }
}
