use std::error::Error;

use super::{App, AppAction};
use crate::core::app::ui_state::UiFocus;
use crate::core::builtin_documents::DocumentKind;
use crate::core::contact::ContactField;

pub(super) fn handle_navigation_action(
    app: &mut App,
    action: AppAction,
) -> Result<(), Box<dyn Error>> {
    match action {
        AppAction::OpenFile { id } => app.open_file(id),
        AppAction::SwitchToFile { id } => app.switch_to_file(id),
        AppAction::CloseTab { id } => app.close_tab(&id),
        AppAction::CloseActiveTab => app.close_active_tab(),
        AppAction::CycleTab { step } => app.cycle_tab(step),
        AppAction::NavigateToSection { section } => app.navigate_to_section(section),
        AppAction::MoveExplorerCursor { delta } => {
            let count = app.workbench.known_documents().len();
            if count > 0 {
                let next = app.ui.explorer_cursor as isize + delta;
                app.ui.explorer_cursor = next.clamp(0, count as isize - 1) as usize;
            }
        }
        AppAction::OpenExplorerSelection => {
            if let Some(id) = app
                .workbench
                .known_documents()
                .get(app.ui.explorer_cursor)
                .cloned()
            {
                app.open_file(id);
            }
        }
        AppAction::FocusNext => app.ui.focus = step_focus(app, 1),
        AppAction::FocusPrevious => app.ui.focus = step_focus(app, -1),
        AppAction::SetFocus { focus } => app.ui.focus = focus,
        _ => unreachable!("non-navigation action routed to navigation handler"),
    }
    Ok(())
}

/// Focus stops available for the current layout and document, in Tab order.
pub(crate) fn focus_ring(app: &App) -> Vec<UiFocus> {
    let mut ring = Vec::with_capacity(5);
    if !app.ui.compact {
        ring.push(UiFocus::Explorer);
    }
    ring.push(UiFocus::Editor);
    if app.active_document().map(|doc| doc.kind) == Some(DocumentKind::Contact) {
        ring.extend(ContactField::ALL.into_iter().map(UiFocus::Form));
    }
    ring
}

fn step_focus(app: &App, step: isize) -> UiFocus {
    let ring = focus_ring(app);
    let current = ring
        .iter()
        .position(|focus| *focus == app.ui.focus)
        .unwrap_or(0) as isize;
    let next = (current + step).rem_euclid(ring.len() as isize) as usize;
    ring[next]
}
