use std::error::Error;

use tracing::debug;

use super::{App, AppAction};
use crate::core::app::ui_state::UiFocus;
use crate::core::app::ScheduledTask;
use crate::core::builtin_documents::DocumentKind;
use crate::core::contact::ContactField;
use crate::core::resume::download_resume;

pub(super) fn handle_editor_action(
    app: &mut App,
    action: AppAction,
) -> Result<(), Box<dyn Error>> {
    match action {
        AppAction::ScrollEditor { lines } => {
            let next = i32::from(app.ui.editor_scroll) + lines;
            app.ui.editor_scroll = next.clamp(0, i32::from(u16::MAX)) as u16;
        }
        AppAction::MoveLinkSelection { delta } => {
            let count = app.documents.project_links().len();
            if count > 0 {
                let next = app.ui.selected_link as isize + delta;
                app.ui.selected_link = next.rem_euclid(count as isize) as usize;
            }
        }
        AppAction::ActivateEditor => activate_editor(app)?,
        AppAction::ActivateLink { index } => app.activate_link(index),
        AppAction::DownloadResume => {
            let dir = app.settings.download_dir.clone();
            download_resume(&dir, &mut app.terminal)?;
        }
        AppAction::SubmitContact => {
            // Validation failures are already reported in the log.
            let _ = app.contact.submit(
                &mut app.scheduler,
                &mut app.terminal,
                |id, submission| ScheduledTask::DeliverContact { id, submission },
            );
        }
        AppAction::AdvanceFormField => match app.ui.focused_field() {
            Some(field) => match field.next() {
                Some(next) => app.ui.focus = UiFocus::Form(next),
                None => handle_editor_action(app, AppAction::SubmitContact)?,
            },
            None => debug!("advance ignored outside the contact form"),
        },
        AppAction::CancelFormInput => {
            if !app.contact.cancel_pending(&mut app.terminal) {
                app.ui.focus = UiFocus::Editor;
            }
        }
        _ => unreachable!("non-editor action routed to editor handler"),
    }
    Ok(())
}

/// Enter on the content pane does whatever the pane's primary control does.
fn activate_editor(app: &mut App) -> Result<(), Box<dyn Error>> {
    let Some(kind) = app.active_document().map(|doc| doc.kind) else {
        return Ok(());
    };
    match kind {
        DocumentKind::Projects => app.activate_link(app.ui.selected_link),
        DocumentKind::Resume => {
            handle_editor_action(app, AppAction::DownloadResume)?;
        }
        DocumentKind::Contact => app.ui.focus = UiFocus::Form(ContactField::Name),
        DocumentKind::About => {}
    }
    Ok(())
}
