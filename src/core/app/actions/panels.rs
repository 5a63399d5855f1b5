use std::error::Error;

use tracing::info;

use super::{App, AppAction};
use crate::core::terminal_log::LogSink;

pub(super) fn handle_panel_action(
    app: &mut App,
    action: AppAction,
) -> Result<(), Box<dyn Error>> {
    match action {
        AppAction::ScrollTerminal { lines } => {
            // Positive moves toward the newest line, like the editor.
            let amount = lines.unsigned_abs() as usize;
            if lines > 0 {
                app.terminal.scroll_down(amount);
            } else {
                app.terminal.scroll_up(amount);
            }
        }
        AppAction::ToggleTheme => {
            let mode = app.theme.toggle(&mut app.terminal)?;
            info!(theme = %mode, "theme persisted");
        }
        AppAction::ToggleTerminal => app.toggle_terminal(),
        AppAction::PressWindowControl { control } => app.press_window_control(control),
        AppAction::VisibilityChanged { visible } => app.handle_visibility(visible),
        AppAction::Resize { width, height } => app.handle_resize(width, height),
        AppAction::NewTabShortcut => app.terminal.log("⌨️ Ctrl+T pressed - New tab shortcut"),
        AppAction::CommandPaletteShortcut => app
            .terminal
            .log("🎛️ Command palette shortcut (Ctrl+Shift+P)"),
        AppAction::Quit => app.request_exit(),
        _ => unreachable!("non-panel action routed to panel handler"),
    }
    Ok(())
}
