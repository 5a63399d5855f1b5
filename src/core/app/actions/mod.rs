mod editor;
mod navigation;
mod panels;

use std::error::Error;

use tokio::sync::mpsc;
use tracing::{debug, error};

use super::ui_state::{UiFocus, WindowControl};
use super::App;
use crate::core::document::{DocId, Section};
use crate::core::terminal_log::LogSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    OpenFile { id: DocId },
    SwitchToFile { id: DocId },
    CloseTab { id: DocId },
    CloseActiveTab,
    CycleTab { step: isize },
    NavigateToSection { section: Section },
    MoveExplorerCursor { delta: isize },
    OpenExplorerSelection,
    FocusNext,
    FocusPrevious,
    SetFocus { focus: UiFocus },
    ScrollEditor { lines: i32 },
    ScrollTerminal { lines: i32 },
    MoveLinkSelection { delta: isize },
    ActivateEditor,
    ActivateLink { index: usize },
    ToggleTheme,
    ToggleTerminal,
    DownloadResume,
    SubmitContact,
    AdvanceFormField,
    CancelFormInput,
    PressWindowControl { control: WindowControl },
    VisibilityChanged { visible: bool },
    Resize { width: u16, height: u16 },
    NewTabShortcut,
    CommandPaletteShortcut,
    Quit,
}

/// Queues actions for the event loop to apply after the current input batch.
#[derive(Clone)]
pub struct AppActionDispatcher {
    tx: mpsc::UnboundedSender<AppAction>,
}

impl AppActionDispatcher {
    pub fn new(tx: mpsc::UnboundedSender<AppAction>) -> Self {
        Self { tx }
    }

    pub fn dispatch(&self, action: AppAction) {
        self.dispatch_many([action]);
    }

    pub fn dispatch_many<I>(&self, actions: I)
    where
        I: IntoIterator<Item = AppAction>,
    {
        for action in actions.into_iter() {
            let _ = self.tx.send(action);
        }
    }
}

pub fn apply_actions(app: &mut App, actions: impl IntoIterator<Item = AppAction>) {
    for action in actions {
        apply_action(app, action);
    }
}

/// Apply one action. Any error is reported in the terminal log and otherwise
/// swallowed; state already changed by the action stays changed.
pub fn apply_action(app: &mut App, action: AppAction) {
    debug!(?action, "apply action");
    let label = format!("{action:?}");
    if let Err(err) = route_action(app, action) {
        error!(action = %label, error = %err, "action failed");
        app.terminal.log(&format!("❌ Error: {err}"));
    }
}

fn route_action(app: &mut App, action: AppAction) -> Result<(), Box<dyn Error>> {
    match action {
        AppAction::OpenFile { .. }
        | AppAction::SwitchToFile { .. }
        | AppAction::CloseTab { .. }
        | AppAction::CloseActiveTab
        | AppAction::CycleTab { .. }
        | AppAction::NavigateToSection { .. }
        | AppAction::MoveExplorerCursor { .. }
        | AppAction::OpenExplorerSelection
        | AppAction::FocusNext
        | AppAction::FocusPrevious
        | AppAction::SetFocus { .. } => navigation::handle_navigation_action(app, action),

        AppAction::ScrollEditor { .. }
        | AppAction::MoveLinkSelection { .. }
        | AppAction::ActivateEditor
        | AppAction::ActivateLink { .. }
        | AppAction::DownloadResume
        | AppAction::SubmitContact
        | AppAction::AdvanceFormField
        | AppAction::CancelFormInput => editor::handle_editor_action(app, action),

        AppAction::ScrollTerminal { .. }
        | AppAction::ToggleTheme
        | AppAction::ToggleTerminal
        | AppAction::PressWindowControl { .. }
        | AppAction::VisibilityChanged { .. }
        | AppAction::Resize { .. }
        | AppAction::NewTabShortcut
        | AppAction::CommandPaletteShortcut
        | AppAction::Quit => panels::handle_panel_action(app, action),
    }
}
