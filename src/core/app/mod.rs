use std::path::PathBuf;
use std::time::Duration;

use ratatui::prelude::Size;
use tracing::{debug, info};

use crate::core::builtin_documents::{DocumentCatalog, DocumentSpec};
use crate::core::config::Config;
use crate::core::constants::{
    DEFAULT_DOCUMENT, SKILLS_REVEAL_BASE, SKILLS_REVEAL_STEP, TYPING_CHAR_INTERVAL,
    TYPING_START_DELAY, TYPING_TEXT, WINDOW_CONTROL_PRESS,
};
use crate::core::contact::{ContactForm, ContactSubmission};
use crate::core::document::{section_file, DocId, Section};
use crate::core::scheduler::Scheduler;
use crate::core::terminal_log::{LogSink, TerminalLog};
use crate::core::theme_mode::{ThemeController, ThemeStore};
use crate::core::workbench::{TabCloseOutcome, Workbench};

pub mod actions;
pub mod ui_state;

pub use actions::{apply_action, apply_actions, AppAction, AppActionDispatcher};
pub use ui_state::{HitMap, HitTarget, UiFocus, UiState, WindowControl};

/// Messages written by the startup sequence, keyed by delay.
const STARTUP_MESSAGES: &[(Duration, &[&str])] = &[
    (Duration::from_secs(2), &["🚀 Initializing portfolio..."]),
    (Duration::from_secs(3), &["📦 Loading components..."]),
    (Duration::from_secs(4), &["✨ All systems ready!"]),
    (
        Duration::from_secs(5),
        &[
            "💻 VS Code Portfolio initialized",
            "🎯 Use the sidebar to navigate sections",
            "⌨️ Try Ctrl+` to toggle terminal",
        ],
    ),
];

/// One-shot work queued on the app clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduledTask {
    Log(&'static [&'static str]),
    TypeNextChar,
    RevealSkill(usize),
    ReleaseWindowControl(WindowControl),
    DeliverContact {
        id: u64,
        submission: ContactSubmission,
    },
}

/// Runtime settings resolved from the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub compact_width: u16,
    pub download_dir: PathBuf,
}

impl AppSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            compact_width: config.compact_width(),
            download_dir: config.resolved_download_dir(),
        }
    }
}

pub struct App {
    pub workbench: Workbench,
    pub terminal: TerminalLog,
    pub theme: ThemeController,
    pub contact: ContactForm,
    pub scheduler: Scheduler<ScheduledTask>,
    pub documents: DocumentCatalog,
    pub settings: AppSettings,
    pub ui: UiState,
}

impl App {
    pub fn new(
        documents: DocumentCatalog,
        theme_store: Box<dyn ThemeStore>,
        settings: AppSettings,
    ) -> Self {
        let initial = DocId::from(DEFAULT_DOCUMENT);
        let workbench = Workbench::new(documents.ids(), initial);
        Self {
            workbench,
            terminal: TerminalLog::new(),
            theme: ThemeController::new(theme_store),
            contact: ContactForm::new(),
            scheduler: Scheduler::new(),
            documents,
            settings,
            ui: UiState::new(),
        }
    }

    /// Apply the saved theme, queue the startup animations and run the first
    /// layout check for a terminal of `size`.
    pub fn bootstrap(&mut self, size: Size) {
        self.theme.initialize();

        for (delay, messages) in STARTUP_MESSAGES {
            self.scheduler
                .schedule_after(*delay, ScheduledTask::Log(messages));
        }
        self.scheduler
            .schedule_after(TYPING_START_DELAY, ScheduledTask::TypeNextChar);
        for index in 0..self.documents.skills().len() {
            let delay = SKILLS_REVEAL_BASE + SKILLS_REVEAL_STEP * index as u32;
            self.scheduler
                .schedule_after(delay, ScheduledTask::RevealSkill(index));
        }

        info!(
            width = size.width,
            height = size.height,
            tasks = self.scheduler.pending(),
            "bootstrapped workbench"
        );
        self.handle_resize(size.width, size.height);
    }

    /// Move the app clock forward and run whatever became due. Returns whether
    /// any task ran.
    pub fn advance_clock(&mut self, delta: Duration) -> bool {
        let due = self.scheduler.advance_by(delta);
        let ran = !due.is_empty();
        for task in due {
            self.run_task(task);
        }
        ran
    }

    fn run_task(&mut self, task: ScheduledTask) {
        match task {
            ScheduledTask::Log(messages) => {
                for message in messages {
                    self.terminal.log(message);
                }
            }
            ScheduledTask::TypeNextChar => {
                let total = TYPING_TEXT.chars().count();
                if self.ui.typed_chars < total {
                    self.ui.typed_chars += 1;
                }
                if self.ui.typed_chars < total {
                    self.scheduler
                        .schedule_after(TYPING_CHAR_INTERVAL, ScheduledTask::TypeNextChar);
                }
            }
            ScheduledTask::RevealSkill(index) => {
                self.ui.skills_revealed = self.ui.skills_revealed.max(index + 1);
            }
            ScheduledTask::ReleaseWindowControl(control) => {
                if self.ui.pressed_control == Some(control) {
                    self.ui.pressed_control = None;
                }
            }
            ScheduledTask::DeliverContact { id, submission } => {
                self.contact.deliver(id, &submission, &mut self.terminal);
            }
        }
    }

    /// Welcome line as typed so far.
    pub fn typed_text(&self) -> String {
        TYPING_TEXT.chars().take(self.ui.typed_chars).collect()
    }

    pub fn typing_finished(&self) -> bool {
        self.ui.typed_chars >= TYPING_TEXT.chars().count()
    }

    pub fn visible_skills(&self) -> &[String] {
        let skills = self.documents.skills();
        &skills[..self.ui.skills_revealed.min(skills.len())]
    }

    /// Document backing the visible content pane, if any.
    pub fn active_document(&self) -> Option<&DocumentSpec> {
        let pane = self.workbench.views().pane.as_ref()?;
        self.documents.get(pane)
    }

    pub fn toggle_terminal(&mut self) {
        self.ui.terminal_minimized = !self.ui.terminal_minimized;
        debug!(minimized = self.ui.terminal_minimized, "toggled terminal");
        if self.ui.terminal_minimized {
            self.terminal.log("📉 Terminal minimized");
        } else {
            self.terminal.log("📈 Terminal expanded");
        }
    }

    /// Re-evaluate the compact layout. Narrow terminals only ever minimize
    /// the panel; widening again leaves it as it is.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.ui.last_term_size = Size::new(width, height);
        self.ui.compact = width <= self.settings.compact_width;
        if self.ui.compact && !self.ui.terminal_minimized {
            self.toggle_terminal();
        }
        if self.ui.compact && self.ui.focus == UiFocus::Explorer {
            self.ui.focus = UiFocus::Editor;
        }
    }

    pub fn handle_visibility(&mut self, visible: bool) {
        if visible {
            self.terminal.log("👁️ Portfolio restored");
        } else {
            self.terminal.log("👁️ Portfolio minimized");
        }
    }

    pub fn navigate_to_section(&mut self, section: Section) {
        debug!(section = section.id(), "navigate to section");
        self.ui.active_section = section;
        if let Some(file) = section_file(section) {
            self.open_file(file);
        }
    }

    pub fn open_file(&mut self, id: DocId) {
        self.workbench.open_file(id, &mut self.terminal);
        self.after_document_change();
    }

    pub fn switch_to_file(&mut self, id: DocId) {
        self.workbench.switch_to_file(id, &mut self.terminal);
        self.after_document_change();
    }

    pub fn close_tab(&mut self, id: &DocId) {
        if self.workbench.close_tab(id, &mut self.terminal) == TabCloseOutcome::Closed {
            self.after_document_change();
        }
    }

    pub fn close_active_tab(&mut self) {
        if self.workbench.close_active_tab(&mut self.terminal).is_some() {
            self.after_document_change();
        }
    }

    pub fn cycle_tab(&mut self, step: isize) {
        self.workbench.cycle_tab(step, &mut self.terminal);
        self.after_document_change();
    }

    fn after_document_change(&mut self) {
        self.ui.editor_scroll = 0;
        self.ui.selected_link = 0;
        let active = self.workbench.active().clone();
        if let Some(position) = self
            .workbench
            .known_documents()
            .iter()
            .position(|id| id == &active)
        {
            self.ui.explorer_cursor = position;
        }
        if let UiFocus::Form(_) = self.ui.focus {
            self.ui.focus = UiFocus::Editor;
        }
    }

    pub fn press_window_control(&mut self, control: WindowControl) {
        self.ui.pressed_control = Some(control);
        self.scheduler.schedule_after(
            WINDOW_CONTROL_PRESS,
            ScheduledTask::ReleaseWindowControl(control),
        );
        self.terminal.log(control.message());
    }

    /// Follow project link `index`. Placeholder links only report the click.
    pub fn activate_link(&mut self, index: usize) {
        let links = self.documents.project_links();
        let Some(link) = links.get(index) else {
            debug!(index, "ignored click on missing project link");
            return;
        };
        self.ui.selected_link = index;
        if link.is_placeholder() {
            self.terminal
                .log(&format!("🔗 {} link clicked (demo)", link.kind.label()));
            self.terminal.log("🔗 Demo link clicked - would open in new tab");
        } else {
            self.terminal.log(&format!("🔗 Link: {}", link.url));
        }
    }

    pub fn request_exit(&mut self) {
        self.ui.exit_requested = true;
    }
}

#[cfg(test)]
mod tests;
