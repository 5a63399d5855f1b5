//! Shared constants used across the application

use std::time::Duration;

/// Document opened and active when the workbench starts.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Prompt shown on the live terminal line.
pub const TERMINAL_PROMPT: &str = "portfolio@vscode:~$";

/// Live cursor glyph drawn after the prompt on the newest terminal line.
pub const TERMINAL_CURSOR: &str = "_";

/// Column count at or below which the layout collapses and the terminal auto-minimizes.
pub const DEFAULT_COMPACT_WIDTH: u16 = 80;

/// Simulated network latency for contact form delivery.
pub const CONTACT_SEND_DELAY: Duration = Duration::from_millis(1500);

/// Number of message characters echoed back after a successful send.
pub const CONTACT_PREVIEW_CHARS: usize = 50;

/// Text typed into the about pane at startup.
pub const TYPING_TEXT: &str = "console.log('Welcome to my portfolio! 👋');";
pub const TYPING_START_DELAY: Duration = Duration::from_millis(1500);
pub const TYPING_CHAR_INTERVAL: Duration = Duration::from_millis(80);

/// Skill `i` becomes visible at `SKILLS_REVEAL_BASE + i * SKILLS_REVEAL_STEP`.
pub const SKILLS_REVEAL_BASE: Duration = Duration::from_millis(2100);
pub const SKILLS_REVEAL_STEP: Duration = Duration::from_millis(100);

/// How long a clicked window-control dot stays in its pressed state.
pub const WINDOW_CONTROL_PRESS: Duration = Duration::from_millis(150);

/// File name used for the placeholder resume download.
pub const RESUME_FILE_NAME: &str = "Your_Name_Resume.pdf";
