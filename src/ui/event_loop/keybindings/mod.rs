//! Focus-aware keybinding system
//!
//! Key events are dispatched according to which part of the workbench has
//! focus; global shortcuts are registered in every context.

pub mod handlers;
pub mod registry;

pub use handlers::handle_text_input;
pub use registry::{KeyContext, KeyResult, ModeAwareRegistry};

use crate::core::app::AppAction;
use crate::core::document::Section;
use handlers::*;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use registry::{KeyHandler, KeyPattern, ModeAwareBuilder};

fn action(action: AppAction) -> impl Fn() -> Box<dyn KeyHandler> {
    move || -> Box<dyn KeyHandler> { Box::new(ActionHandler(action.clone())) }
}

fn quit() -> Box<dyn KeyHandler> {
    Box::new(QuitHandler)
}

/// Build a complete registry with all handlers
pub fn build_mode_aware_registry() -> ModeAwareRegistry {
    let ctrl_shift = KeyModifiers::CONTROL | KeyModifiers::SHIFT;

    let mut builder = ModeAwareBuilder::new()
        .register_global(KeyPattern::ctrl(KeyCode::Char('c')), quit)
        .register_global(KeyPattern::ctrl(KeyCode::Char('q')), quit)
        // Ctrl+` arrives as Ctrl+Space (NUL) on most terminals
        .register_global(
            KeyPattern::ctrl(KeyCode::Char('`')),
            action(AppAction::ToggleTerminal),
        )
        .register_global(
            KeyPattern::ctrl(KeyCode::Char(' ')),
            action(AppAction::ToggleTerminal),
        )
        .register_global(
            KeyPattern::ctrl(KeyCode::Char('w')),
            action(AppAction::CloseActiveTab),
        )
        .register_global(
            KeyPattern::ctrl(KeyCode::Char('t')),
            action(AppAction::NewTabShortcut),
        )
        .register_global(
            KeyPattern::with_modifiers(KeyCode::Char('P'), ctrl_shift),
            action(AppAction::CommandPaletteShortcut),
        )
        .register_global(
            KeyPattern::with_modifiers(KeyCode::Char('p'), ctrl_shift),
            action(AppAction::CommandPaletteShortcut),
        )
        .register_global(
            KeyPattern::alt(KeyCode::Char('t')),
            action(AppAction::ToggleTheme),
        )
        .register_global(
            KeyPattern::ctrl(KeyCode::PageUp),
            action(AppAction::CycleTab { step: -1 }),
        )
        .register_global(
            KeyPattern::ctrl(KeyCode::PageDown),
            action(AppAction::CycleTab { step: 1 }),
        )
        .register_global(
            KeyPattern::with_modifiers(KeyCode::PageUp, KeyModifiers::SHIFT),
            action(AppAction::ScrollTerminal { lines: -5 }),
        )
        .register_global(
            KeyPattern::with_modifiers(KeyCode::PageDown, KeyModifiers::SHIFT),
            action(AppAction::ScrollTerminal { lines: 5 }),
        )
        .register_global(KeyPattern::simple(KeyCode::Tab), action(AppAction::FocusNext))
        .register_global(
            KeyPattern::simple(KeyCode::BackTab),
            action(AppAction::FocusPrevious),
        )
        .register_global(
            KeyPattern::with_modifiers(KeyCode::BackTab, KeyModifiers::SHIFT),
            action(AppAction::FocusPrevious),
        );

    for (idx, section) in Section::ALL.into_iter().enumerate() {
        let digit = char::from(b'1' + idx as u8);
        builder = builder.register_global(
            KeyPattern::alt(KeyCode::Char(digit)),
            action(AppAction::NavigateToSection { section }),
        );
    }

    for code in [
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Char('k'),
        KeyCode::Char('j'),
        KeyCode::Home,
        KeyCode::End,
        KeyCode::Enter,
        KeyCode::Char(' '),
    ] {
        builder = builder.register_for_context(
            KeyContext::Explorer,
            KeyPattern::simple(code),
            Box::new(ExplorerHandler),
        );
    }

    for code in [
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::PageUp,
        KeyCode::PageDown,
        KeyCode::Home,
        KeyCode::End,
    ] {
        builder = builder.register_for_context(
            KeyContext::Editor,
            KeyPattern::simple(code),
            Box::new(EditorNavigationHandler),
        );
    }

    builder
        .register_for_context(
            KeyContext::Editor,
            KeyPattern::simple(KeyCode::Enter),
            Box::new(ActionHandler(AppAction::ActivateEditor)),
        )
        .register_for_context(
            KeyContext::Form,
            KeyPattern::simple(KeyCode::Enter),
            Box::new(ActionHandler(AppAction::AdvanceFormField)),
        )
        .register_for_context(
            KeyContext::Form,
            KeyPattern::alt(KeyCode::Enter),
            Box::new(FormNewlineHandler),
        )
        .register_for_context(
            KeyContext::Form,
            KeyPattern::simple(KeyCode::Esc),
            Box::new(ActionHandler(AppAction::CancelFormInput)),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app::{apply_action, AppActionDispatcher, UiFocus};
    use crate::core::contact::ContactField;
    use crate::utils::test_utils::{create_bootstrapped_app, terminal_messages};
    use ratatui::crossterm::event::KeyEvent;
    use tokio::sync::mpsc;

    fn run_key(
        app: &mut crate::core::app::App,
        registry: &ModeAwareRegistry,
        key: KeyEvent,
    ) -> KeyResult {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = AppActionDispatcher::new(tx);
        let context = KeyContext::from_focus(app.ui.focus);
        let result = if registry.should_handle_as_text_input(&key, &context) {
            handle_text_input(app, &key).into()
        } else {
            registry.handle_key_event(app, &dispatcher, &key, context)
        };
        while let Ok(action) = rx.try_recv() {
            apply_action(app, action);
        }
        result
    }

    #[test]
    fn shortcut_table_is_registered_everywhere() {
        let registry = build_mode_aware_registry();
        let mut app = create_bootstrapped_app();

        for focus in [UiFocus::Explorer, UiFocus::Editor, UiFocus::Form(ContactField::Name)] {
            app.ui.focus = focus;
            let before = app.terminal.finalized_count();
            run_key(
                &mut app,
                &registry,
                KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
            );
            assert_eq!(app.terminal.finalized_count(), before + 1);
            assert_eq!(
                app.terminal.last_message(),
                Some("⌨️ Ctrl+T pressed - New tab shortcut")
            );
        }
    }

    #[test]
    fn ctrl_space_toggles_the_terminal() {
        let registry = build_mode_aware_registry();
        let mut app = create_bootstrapped_app();
        run_key(
            &mut app,
            &registry,
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::CONTROL),
        );
        assert!(app.ui.terminal_minimized);
        assert_eq!(terminal_messages(&app), vec!["📉 Terminal minimized"]);
    }

    #[test]
    fn ctrl_shift_p_logs_the_palette_stub() {
        let registry = build_mode_aware_registry();
        let mut app = create_bootstrapped_app();
        run_key(
            &mut app,
            &registry,
            KeyEvent::new(
                KeyCode::Char('P'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT,
            ),
        );
        assert_eq!(
            app.terminal.last_message(),
            Some("🎛️ Command palette shortcut (Ctrl+Shift+P)")
        );
    }

    #[test]
    fn quit_keys_exit() {
        let registry = build_mode_aware_registry();
        let mut app = create_bootstrapped_app();
        let result = run_key(
            &mut app,
            &registry,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        assert_eq!(result, KeyResult::Exit);
        assert!(app.ui.exit_requested);
    }

    #[test]
    fn alt_digits_select_sections() {
        let registry = build_mode_aware_registry();
        let mut app = create_bootstrapped_app();
        run_key(
            &mut app,
            &registry,
            KeyEvent::new(KeyCode::Char('3'), KeyModifiers::ALT),
        );
        assert_eq!(app.ui.active_section, Section::Contact);
        assert_eq!(app.workbench.active().as_str(), "script.js");
    }

    #[test]
    fn typing_a_contact_message_end_to_end() {
        let registry = build_mode_aware_registry();
        let mut app = create_bootstrapped_app();
        app.navigate_to_section(Section::Contact);
        app.ui.focus = UiFocus::Editor;

        run_key(&mut app, &registry, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.ui.focus, UiFocus::Form(ContactField::Name));

        for text in ["Ada", "ada@example.com", "Hi"] {
            for ch in text.chars() {
                run_key(&mut app, &registry, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
            }
            run_key(&mut app, &registry, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        }

        assert_eq!(
            app.terminal.last_message(),
            Some("📧 Sending message from Ada...")
        );
        assert_eq!(app.ui.focus, UiFocus::Form(ContactField::Message));
    }

    #[test]
    fn tab_cycles_focus() {
        let registry = build_mode_aware_registry();
        let mut app = create_bootstrapped_app();
        assert_eq!(app.ui.focus, UiFocus::Explorer);
        run_key(&mut app, &registry, KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(app.ui.focus, UiFocus::Editor);
        run_key(
            &mut app,
            &registry,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
        );
        assert_eq!(app.ui.focus, UiFocus::Explorer);
    }
}
