//! Mouse events → actions, using the click map recorded by the last frame.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use tracing::debug;

use crate::core::app::{AppAction, HitMap, HitTarget, UiFocus};

const WHEEL_LINES: i32 = 3;

pub fn actions_for_mouse(hit_map: &HitMap, event: &MouseEvent) -> Vec<AppAction> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => hit_map
            .target_at(event.column, event.row)
            .and_then(click_action)
            .into_iter()
            .collect(),
        MouseEventKind::ScrollUp => wheel_action(hit_map, event, -WHEEL_LINES)
            .into_iter()
            .collect(),
        MouseEventKind::ScrollDown => wheel_action(hit_map, event, WHEEL_LINES)
            .into_iter()
            .collect(),
        _ => Vec::new(),
    }
}

fn click_action(target: &HitTarget) -> Option<AppAction> {
    debug!(?target, "click");
    let action = match target {
        HitTarget::WindowControl(control) => AppAction::PressWindowControl { control: *control },
        HitTarget::Activity(section) => AppAction::NavigateToSection { section: *section },
        HitTarget::TreeItem(id) => AppAction::OpenFile { id: id.clone() },
        HitTarget::Tab(id) => AppAction::SwitchToFile { id: id.clone() },
        HitTarget::TabClose(id) => AppAction::CloseTab { id: id.clone() },
        HitTarget::ThemeToggle => AppAction::ToggleTheme,
        HitTarget::TerminalToggle => AppAction::ToggleTerminal,
        HitTarget::ProjectLink(index) => AppAction::ActivateLink { index: *index },
        HitTarget::FormField(field) => AppAction::SetFocus {
            focus: UiFocus::Form(*field),
        },
        HitTarget::SubmitButton => AppAction::SubmitContact,
        HitTarget::DownloadButton => AppAction::DownloadResume,
        HitTarget::EditorBody => AppAction::SetFocus {
            focus: UiFocus::Editor,
        },
        HitTarget::TerminalBody => return None,
    };
    Some(action)
}

/// Scroll whichever pane is under the pointer.
fn wheel_action(hit_map: &HitMap, event: &MouseEvent, lines: i32) -> Option<AppAction> {
    let position = Position::new(event.column, event.row);
    let over = |target: &HitTarget| {
        hit_map
            .area_of(target)
            .is_some_and(|area| area.contains(position))
    };
    if over(&HitTarget::TerminalBody) {
        Some(AppAction::ScrollTerminal { lines })
    } else if over(&HitTarget::EditorBody) {
        Some(AppAction::ScrollEditor { lines })
    } else {
        None
    }
}
