//! Tab/file state machine.
//!
//! The workbench owns the ordered list of open documents and the single active
//! one, and keeps three mirrored views in step with them: the file tree
//! highlight, the selected tab and the visible content pane. Every transition
//! reports through the [`LogSink`] it is handed.

use crate::core::document::{language_label, DocId};
use crate::core::terminal_log::LogSink;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBar {
    pub line_col: String,
    pub encoding: String,
    pub language: String,
}

impl StatusBar {
    fn for_document(id: &DocId) -> Self {
        Self {
            line_col: "Ln 1, Col 1".to_string(),
            encoding: "UTF-8".to_string(),
            language: language_label(id).to_string(),
        }
    }
}

/// Which view currently shows each highlight. `None` means no view exists for
/// the active id (e.g. after switching to an id with no content pane).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSelection {
    pub tree: Option<DocId>,
    pub tab: Option<DocId>,
    pub pane: Option<DocId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabCloseOutcome {
    /// The tab strip only had one tab; nothing changed.
    Refused,
    Closed,
}

#[derive(Debug, Clone)]
pub struct Workbench {
    open: Vec<DocId>,
    active: DocId,
    /// Documents that have a file tree item and a content pane.
    known: Vec<DocId>,
    views: ViewSelection,
    status: StatusBar,
}

impl Workbench {
    /// Start with `initial` as the only open and active document.
    pub fn new(known: impl IntoIterator<Item = DocId>, initial: DocId) -> Self {
        let known: Vec<DocId> = known.into_iter().collect();
        let mut workbench = Self {
            open: vec![initial.clone()],
            active: initial.clone(),
            known,
            views: ViewSelection::default(),
            status: StatusBar::for_document(&initial),
        };
        workbench.sync_views(&initial);
        workbench
    }

    pub fn open_documents(&self) -> &[DocId] {
        &self.open
    }

    pub fn active(&self) -> &DocId {
        &self.active
    }

    pub fn is_open(&self, id: &DocId) -> bool {
        self.open.contains(id)
    }

    pub fn views(&self) -> &ViewSelection {
        &self.views
    }

    pub fn status(&self) -> &StatusBar {
        &self.status
    }

    pub fn known_documents(&self) -> &[DocId] {
        &self.known
    }

    /// Open `id` (appending a tab if needed) and make it active.
    pub fn open_file(&mut self, id: DocId, log: &mut dyn LogSink) {
        debug!(file = %id, "open file");
        if !self.open.contains(&id) {
            self.open.push(id.clone());
            debug!(file = %id, tabs = self.open.len(), "created tab");
        }
        self.switch_to_file(id.clone(), log);
        log.log(&format!("📁 Opened {id}"));
    }

    /// Make `id` active. The id is not validated: an id without views leaves
    /// every highlight empty and no pane visible.
    pub fn switch_to_file(&mut self, id: DocId, log: &mut dyn LogSink) {
        debug!(file = %id, "switch to file");
        self.sync_views(&id);
        self.active = id;
        self.refresh_status(log);
    }

    /// Close the tab for `id`. The last remaining tab can never be closed.
    pub fn close_tab(&mut self, id: &DocId, log: &mut dyn LogSink) -> TabCloseOutcome {
        if self.open.len() == 1 {
            log.log("❌ Cannot close the last tab");
            return TabCloseOutcome::Refused;
        }

        self.open.retain(|tab| tab != id);
        if self.views.tab.as_ref() == Some(id) {
            self.views.tab = None;
        }
        debug!(file = %id, tabs = self.open.len(), "closed tab");

        if &self.active == id {
            // Fixed tie-break: fall back to the right-most remaining tab.
            if let Some(last) = self.open.last().cloned() {
                self.switch_to_file(last, log);
            }
        }

        log.log(&format!("❌ Closed {id}"));
        TabCloseOutcome::Closed
    }

    /// Keyboard variant of [`Self::close_tab`]: silently ignored with one tab open.
    pub fn close_active_tab(&mut self, log: &mut dyn LogSink) -> Option<TabCloseOutcome> {
        if self.open.len() > 1 {
            let active = self.active.clone();
            Some(self.close_tab(&active, log))
        } else {
            None
        }
    }

    /// Move `step` tabs to the right (negative moves left), wrapping around.
    pub fn cycle_tab(&mut self, step: isize, log: &mut dyn LogSink) {
        if self.open.is_empty() {
            return;
        }
        let current = self
            .open
            .iter()
            .position(|tab| tab == &self.active)
            .unwrap_or(0) as isize;
        let len = self.open.len() as isize;
        let next = (current + step).rem_euclid(len) as usize;
        let target = self.open[next].clone();
        self.switch_to_file(target, log);
    }

    fn sync_views(&mut self, id: &DocId) {
        let has_pane = self.known.contains(id);
        self.views.tree = has_pane.then(|| id.clone());
        self.views.pane = has_pane.then(|| id.clone());
        self.views.tab = self.open.contains(id).then(|| id.clone());
    }

    fn refresh_status(&mut self, log: &mut dyn LogSink) {
        self.status = StatusBar::for_document(&self.active);
        log.log(&format!(
            "📄 Switched to {} ({})",
            self.active, self.status.language
        ));
    }
}
