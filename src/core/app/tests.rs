use super::*;
use crate::core::builtin_documents::DocumentKind;
use crate::core::contact::ContactField;
use crate::core::theme_mode::{MemoryThemeStore, ThemeMode, ThemeStore};
use crate::utils::test_utils::{
    create_bootstrapped_app, create_test_app, create_test_app_with,
    create_test_app_with_downloads, terminal_messages, WIDE_TERMINAL,
};
use std::error::Error;
use tempfile::TempDir;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

struct BrokenStore;

impl ThemeStore for BrokenStore {
    fn load(&self) -> Option<String> {
        Some("light".to_string())
    }

    fn save(&mut self, _value: &str) -> Result<(), Box<dyn Error>> {
        Err("config directory is read-only".into())
    }
}

#[test]
fn startup_messages_arrive_on_schedule() {
    let mut app = create_bootstrapped_app();
    assert!(terminal_messages(&app).is_empty());

    app.advance_clock(ms(1999));
    assert!(terminal_messages(&app).is_empty());

    app.advance_clock(ms(1));
    assert_eq!(terminal_messages(&app), vec!["🚀 Initializing portfolio..."]);

    app.advance_clock(ms(3000));
    assert_eq!(
        terminal_messages(&app),
        vec![
            "🚀 Initializing portfolio...",
            "📦 Loading components...",
            "✨ All systems ready!",
            "💻 VS Code Portfolio initialized",
            "🎯 Use the sidebar to navigate sections",
            "⌨️ Try Ctrl+` to toggle terminal",
        ]
    );
}

#[test]
fn bootstrap_applies_the_saved_theme_without_logging() {
    let mut app = create_test_app_with(
        Box::new(MemoryThemeStore::with_value("light")),
        ".".into(),
    );
    app.bootstrap(WIDE_TERMINAL);
    assert_eq!(app.theme.mode(), ThemeMode::Light);
    assert!(terminal_messages(&app).is_empty());
}

#[test]
fn typing_animation_types_one_character_per_tick() {
    let mut app = create_bootstrapped_app();

    app.advance_clock(ms(1499));
    assert_eq!(app.typed_text(), "");
    app.advance_clock(ms(1));
    assert_eq!(app.typed_text(), "c");
    app.advance_clock(ms(80));
    assert_eq!(app.typed_text(), "co");

    app.advance_clock(Duration::from_secs(10));
    assert_eq!(app.typed_text(), TYPING_TEXT);
    assert!(app.typing_finished());
}

#[test]
fn skills_appear_one_after_another() {
    let mut app = create_bootstrapped_app();
    let total = app.documents.skills().len();
    assert!(total >= 2);

    app.advance_clock(ms(2099));
    assert!(app.visible_skills().is_empty());
    app.advance_clock(ms(1));
    assert_eq!(app.visible_skills().len(), 1);
    app.advance_clock(ms(100));
    assert_eq!(app.visible_skills().len(), 2);

    app.advance_clock(Duration::from_secs(5));
    assert_eq!(app.visible_skills().len(), total);
}

#[test]
fn narrow_terminal_minimizes_the_panel_once() {
    let mut app = create_test_app();
    app.bootstrap(Size::new(60, 30));

    assert!(app.ui.terminal_minimized);
    assert!(app.ui.compact);
    assert_eq!(terminal_messages(&app), vec!["📉 Terminal minimized"]);

    app.handle_resize(70, 30);
    app.handle_resize(120, 30);
    assert!(app.ui.terminal_minimized);
    assert!(!app.ui.compact);
    assert_eq!(terminal_messages(&app).len(), 1);
}

#[test]
fn compact_threshold_is_inclusive() {
    let mut app = create_bootstrapped_app();
    app.handle_resize(81, 30);
    assert!(!app.ui.terminal_minimized);
    app.handle_resize(80, 30);
    assert!(app.ui.terminal_minimized);
}

#[test]
fn expanded_terminal_is_reminimized_when_narrow() {
    let mut app = create_test_app();
    app.bootstrap(Size::new(60, 30));
    app.toggle_terminal();
    assert!(!app.ui.terminal_minimized);

    app.handle_resize(59, 30);
    assert!(app.ui.terminal_minimized);
    assert_eq!(
        terminal_messages(&app),
        vec![
            "📉 Terminal minimized",
            "📈 Terminal expanded",
            "📉 Terminal minimized"
        ]
    );
}

#[test]
fn sections_open_their_mapped_files() {
    let mut app = create_bootstrapped_app();

    apply_action(
        &mut app,
        AppAction::NavigateToSection {
            section: Section::Resume,
        },
    );

    assert_eq!(app.ui.active_section, Section::Resume);
    assert_eq!(app.workbench.active(), &DocId::from("readme.md"));
    assert_eq!(
        app.active_document().map(|doc| doc.kind),
        Some(DocumentKind::Resume)
    );
    assert_eq!(
        terminal_messages(&app),
        vec![
            "📄 Switched to readme.md (Markdown)",
            "📁 Opened readme.md"
        ]
    );
}

#[test]
fn three_tabs_close_middle_active() {
    let mut app = create_bootstrapped_app();
    apply_actions(
        &mut app,
        [
            AppAction::OpenFile {
                id: "style.css".into(),
            },
            AppAction::OpenFile {
                id: "script.js".into(),
            },
            AppAction::SwitchToFile {
                id: "style.css".into(),
            },
            AppAction::CloseTab {
                id: "style.css".into(),
            },
        ],
    );

    assert_eq!(
        app.workbench.open_documents(),
        &[DocId::from("index.html"), DocId::from("script.js")]
    );
    assert_eq!(app.workbench.active(), &DocId::from("script.js"));
    assert_eq!(app.ui.explorer_cursor, 2);
}

#[test]
fn theme_toggle_persists_and_logs() {
    let mut app = create_bootstrapped_app();

    apply_action(&mut app, AppAction::ToggleTheme);
    assert_eq!(app.theme.mode(), ThemeMode::Light);
    assert_eq!(app.theme.persisted().as_deref(), Some("light"));

    apply_action(&mut app, AppAction::ToggleTheme);
    assert_eq!(app.theme.mode(), ThemeMode::Dark);
    assert_eq!(app.theme.persisted().as_deref(), Some("dark"));
    assert_eq!(
        terminal_messages(&app),
        vec!["🎨 Switched to light theme", "🎨 Switched to dark theme"]
    );
}

#[test]
fn failed_theme_write_goes_through_the_catch_all() {
    let mut app = create_test_app_with(Box::new(BrokenStore), ".".into());
    app.bootstrap(WIDE_TERMINAL);
    assert_eq!(app.theme.mode(), ThemeMode::Light);

    apply_action(&mut app, AppAction::ToggleTheme);

    assert_eq!(app.theme.mode(), ThemeMode::Dark);
    assert_eq!(
        terminal_messages(&app),
        vec!["❌ Error: config directory is read-only"]
    );
}

#[test]
fn resume_download_writes_into_the_download_dir() {
    let dir = TempDir::new().unwrap();
    let mut app = create_test_app_with_downloads(dir.path());
    app.bootstrap(WIDE_TERMINAL);
    app.navigate_to_section(Section::Resume);

    apply_action(&mut app, AppAction::ActivateEditor);

    assert!(dir.path().join("Your_Name_Resume.pdf").exists());
    assert_eq!(
        app.terminal.last_message(),
        Some("💾 File: Your_Name_Resume.pdf")
    );
}

#[test]
fn resume_write_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"").unwrap();
    let mut app = create_test_app_with_downloads(&blocker);
    app.bootstrap(WIDE_TERMINAL);

    apply_action(&mut app, AppAction::DownloadResume);

    let last = app.terminal.last_message().unwrap_or_default().to_string();
    assert!(last.starts_with("❌ Error: "), "unexpected log line: {last}");
    assert!(!app.terminal.contains("Resume downloaded"));
}

#[test]
fn contact_flow_from_keyboard_actions() {
    let mut app = create_bootstrapped_app();
    app.navigate_to_section(Section::Contact);
    apply_action(&mut app, AppAction::ActivateEditor);
    assert_eq!(app.ui.focus, UiFocus::Form(ContactField::Name));

    app.contact.set_value(ContactField::Name, "Grace");
    apply_action(&mut app, AppAction::AdvanceFormField);
    app.contact.set_value(ContactField::Email, "grace@example.com");
    apply_action(&mut app, AppAction::AdvanceFormField);
    app.contact.set_value(ContactField::Message, "Hello there");
    apply_action(&mut app, AppAction::AdvanceFormField);

    assert_eq!(
        app.terminal.last_message(),
        Some("📧 Sending message from Grace...")
    );

    app.advance_clock(ms(1500));
    assert!(app.terminal.contains("✅ Message sent successfully!"));
    assert!(app.terminal.contains("📝 From: grace@example.com"));
    assert_eq!(
        app.terminal.last_message(),
        Some("💬 Message: \"Hello there...\"")
    );
    assert_eq!(app.contact.value(ContactField::Name), "");
}

#[test]
fn bad_email_schedules_nothing() {
    let mut app = create_test_app();
    app.contact.set_value(ContactField::Name, "Grace");
    app.contact.set_value(ContactField::Email, "bad-email");
    app.contact.set_value(ContactField::Message, "Hello");

    apply_action(&mut app, AppAction::SubmitContact);

    assert_eq!(app.scheduler.pending(), 0);
    assert_eq!(
        terminal_messages(&app),
        vec!["❌ Please enter a valid email address"]
    );
}

#[test]
fn escape_cancels_a_pending_send_before_leaving_the_form() {
    let mut app = create_test_app();
    app.ui.focus = UiFocus::Form(ContactField::Message);
    app.contact.set_value(ContactField::Name, "Grace");
    app.contact.set_value(ContactField::Email, "grace@example.com");
    app.contact.set_value(ContactField::Message, "Hello");
    apply_action(&mut app, AppAction::SubmitContact);

    apply_action(&mut app, AppAction::CancelFormInput);
    assert_eq!(app.ui.focus, UiFocus::Form(ContactField::Message));
    assert_eq!(app.terminal.last_message(), Some("⚠️ Message send cancelled"));

    apply_action(&mut app, AppAction::CancelFormInput);
    assert_eq!(app.ui.focus, UiFocus::Editor);

    app.advance_clock(ms(5000));
    assert!(!app.terminal.contains("Message sent"));
}

#[test]
fn placeholder_links_only_report_the_click() {
    let mut app = create_test_app();
    let links = app.documents.project_links();
    let demo = links
        .iter()
        .position(|link| link.kind == crate::core::builtin_documents::LinkKind::Demo)
        .unwrap();

    apply_action(&mut app, AppAction::ActivateLink { index: 0 });
    apply_action(&mut app, AppAction::ActivateLink { index: demo });

    assert_eq!(
        terminal_messages(&app),
        vec![
            "🔗 GitHub link clicked (demo)",
            "🔗 Demo link clicked - would open in new tab",
            "🔗 demo link clicked (demo)",
            "🔗 Demo link clicked - would open in new tab",
        ]
    );
    assert_eq!(app.ui.selected_link, demo);
}

#[test]
fn window_controls_release_after_the_press_delay() {
    let mut app = create_test_app();

    apply_action(
        &mut app,
        AppAction::PressWindowControl {
            control: WindowControl::Minimize,
        },
    );

    assert_eq!(app.ui.pressed_control, Some(WindowControl::Minimize));
    assert_eq!(
        terminal_messages(&app),
        vec!["🟡 Minimize button clicked (demo only)"]
    );
    app.advance_clock(ms(149));
    assert_eq!(app.ui.pressed_control, Some(WindowControl::Minimize));
    app.advance_clock(ms(1));
    assert_eq!(app.ui.pressed_control, None);
}

#[test]
fn visibility_changes_are_logged() {
    let mut app = create_test_app();
    apply_actions(
        &mut app,
        [
            AppAction::VisibilityChanged { visible: false },
            AppAction::VisibilityChanged { visible: true },
        ],
    );
    assert_eq!(
        terminal_messages(&app),
        vec!["👁️ Portfolio minimized", "👁️ Portfolio restored"]
    );
}

#[test]
fn shortcut_stubs_log_their_messages() {
    let mut app = create_test_app();
    apply_actions(
        &mut app,
        [AppAction::NewTabShortcut, AppAction::CommandPaletteShortcut],
    );
    assert_eq!(
        terminal_messages(&app),
        vec![
            "⌨️ Ctrl+T pressed - New tab shortcut",
            "🎛️ Command palette shortcut (Ctrl+Shift+P)"
        ]
    );
}

#[test]
fn focus_ring_skips_explorer_when_compact_and_adds_form_fields() {
    let mut app = create_bootstrapped_app();
    app.navigate_to_section(Section::Contact);
    app.ui.focus = UiFocus::Explorer;

    let mut seen = Vec::new();
    for _ in 0..5 {
        apply_action(&mut app, AppAction::FocusNext);
        seen.push(app.ui.focus);
    }
    assert_eq!(
        seen,
        vec![
            UiFocus::Editor,
            UiFocus::Form(ContactField::Name),
            UiFocus::Form(ContactField::Email),
            UiFocus::Form(ContactField::Message),
            UiFocus::Explorer,
        ]
    );

    app.handle_resize(60, 30);
    assert_eq!(app.ui.focus, UiFocus::Editor);
    apply_action(&mut app, AppAction::FocusPrevious);
    assert_eq!(app.ui.focus, UiFocus::Form(ContactField::Message));
}

#[test]
fn explorer_cursor_is_clamped_and_opens_selection() {
    let mut app = create_bootstrapped_app();
    apply_action(&mut app, AppAction::MoveExplorerCursor { delta: 10 });
    assert_eq!(app.ui.explorer_cursor, 3);
    apply_action(&mut app, AppAction::MoveExplorerCursor { delta: -1 });
    apply_action(&mut app, AppAction::OpenExplorerSelection);
    assert_eq!(app.workbench.active(), &DocId::from("script.js"));

    apply_action(&mut app, AppAction::MoveExplorerCursor { delta: -10 });
    assert_eq!(app.ui.explorer_cursor, 0);
}

#[test]
fn close_active_tab_shortcut_is_silent_with_one_tab() {
    let mut app = create_test_app();
    apply_action(&mut app, AppAction::CloseActiveTab);
    assert!(terminal_messages(&app).is_empty());

    apply_action(&mut app, AppAction::CloseTab {
        id: "index.html".into(),
    });
    assert_eq!(terminal_messages(&app), vec!["❌ Cannot close the last tab"]);
}

#[test]
fn refused_close_leaves_the_view_alone() {
    let mut app = create_test_app();
    app.ui.editor_scroll = 7;
    app.ui.selected_link = 2;
    app.ui.focus = UiFocus::Form(ContactField::Email);

    apply_action(&mut app, AppAction::CloseTab {
        id: "index.html".into(),
    });

    assert_eq!(terminal_messages(&app), vec!["❌ Cannot close the last tab"]);
    assert_eq!(app.ui.editor_scroll, 7);
    assert_eq!(app.ui.selected_link, 2);
    assert_eq!(app.ui.focus, UiFocus::Form(ContactField::Email));
}

#[test]
fn quit_sets_the_exit_flag() {
    let mut app = create_test_app();
    apply_action(&mut app, AppAction::Quit);
    assert!(app.ui.exit_requested);
}
