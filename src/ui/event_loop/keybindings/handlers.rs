//! Keybinding handler implementations
//!
//! Handlers either dispatch an [`AppAction`] for the event loop to apply or, for
//! text editing, act on the focused form field directly.

use crate::core::app::{App, AppAction, AppActionDispatcher};
use crate::core::builtin_documents::DocumentKind;
use crate::core::contact::ContactField;
use crate::ui::event_loop::keybindings::registry::{KeyHandler, KeyResult};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use tui_textarea::Input as TAInput;

const PAGE_LINES: i32 = 10;
const FAR: i32 = u16::MAX as i32;

/// Send a keystroke to the focused form field. Returns whether a field had focus.
pub fn handle_text_input(app: &mut App, key: &KeyEvent) -> bool {
    match app.ui.focused_field() {
        Some(field) => {
            app.contact.field_mut(field).input(TAInput::from(*key));
            true
        }
        None => false,
    }
}

// ============================================================================
// Global Handlers
// ============================================================================

/// Handler for Ctrl+C / Ctrl+Q (quit)
pub struct QuitHandler;

impl KeyHandler for QuitHandler {
    fn handle(&self, _app: &mut App, dispatcher: &AppActionDispatcher, _key: &KeyEvent) -> KeyResult {
        dispatcher.dispatch(AppAction::Quit);
        KeyResult::Exit
    }
}

/// Handler bound to one fixed action (shortcut table entries)
pub struct ActionHandler(pub AppAction);

impl KeyHandler for ActionHandler {
    fn handle(&self, _app: &mut App, dispatcher: &AppActionDispatcher, _key: &KeyEvent) -> KeyResult {
        dispatcher.dispatch(self.0.clone());
        KeyResult::Handled
    }
}

// ============================================================================
// Explorer Handlers
// ============================================================================

/// Handler for cursor movement and opening in the file tree
pub struct ExplorerHandler;

impl KeyHandler for ExplorerHandler {
    fn handle(&self, _app: &mut App, dispatcher: &AppActionDispatcher, key: &KeyEvent) -> KeyResult {
        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') => AppAction::MoveExplorerCursor { delta: -1 },
            KeyCode::Down | KeyCode::Char('j') => AppAction::MoveExplorerCursor { delta: 1 },
            KeyCode::Home => AppAction::MoveExplorerCursor {
                delta: -(FAR as isize),
            },
            KeyCode::End => AppAction::MoveExplorerCursor { delta: FAR as isize },
            KeyCode::Enter | KeyCode::Char(' ') => AppAction::OpenExplorerSelection,
            _ => return KeyResult::NotHandled,
        };
        dispatcher.dispatch(action);
        KeyResult::Handled
    }
}

// ============================================================================
// Editor Handlers
// ============================================================================

/// Handler for scrolling the content pane. On the projects pane Up/Down move
/// the link selection instead.
pub struct EditorNavigationHandler;

impl KeyHandler for EditorNavigationHandler {
    fn handle(&self, app: &mut App, dispatcher: &AppActionDispatcher, key: &KeyEvent) -> KeyResult {
        let on_projects =
            app.active_document().map(|doc| doc.kind) == Some(DocumentKind::Projects);
        let action = match key.code {
            KeyCode::Up if on_projects => AppAction::MoveLinkSelection { delta: -1 },
            KeyCode::Down if on_projects => AppAction::MoveLinkSelection { delta: 1 },
            KeyCode::Up => AppAction::ScrollEditor { lines: -1 },
            KeyCode::Down => AppAction::ScrollEditor { lines: 1 },
            KeyCode::PageUp => AppAction::ScrollEditor { lines: -PAGE_LINES },
            KeyCode::PageDown => AppAction::ScrollEditor { lines: PAGE_LINES },
            KeyCode::Home => AppAction::ScrollEditor { lines: -FAR },
            KeyCode::End => AppAction::ScrollEditor { lines: FAR },
            _ => return KeyResult::NotHandled,
        };
        dispatcher.dispatch(action);
        KeyResult::Handled
    }
}

// ============================================================================
// Form Handlers
// ============================================================================

/// Handler for Alt+Enter: newline in the message field
pub struct FormNewlineHandler;

impl KeyHandler for FormNewlineHandler {
    fn handle(&self, app: &mut App, _dispatcher: &AppActionDispatcher, _key: &KeyEvent) -> KeyResult {
        if app.ui.focused_field() != Some(ContactField::Message) {
            return KeyResult::NotHandled;
        }
        app.contact.field_mut(ContactField::Message).insert_newline();
        KeyResult::Handled
    }
}
