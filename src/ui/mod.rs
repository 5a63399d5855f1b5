//! Terminal UI layer for the workbench.
//!
//! The UI module owns rendering, layout, input routing, and loop control for
//! the text user interface.
//!
//! Key submodules include:
//! - [`event_loop`]: the interactive loop that turns key and mouse events into
//!   [`crate::core::app::AppAction`]s and advances the app clock.
//! - [`renderer`], [`layout`], [`editor`], and [`terminal_panel`]: view
//!   composition and frame output.
//! - [`theme`] and [`builtin_themes`]: color/style policy for light and dark mode.
//! - [`highlight`]: the lightweight code colouring used in the editor pane.
//!
//! Ownership boundary: this layer presents and captures interaction state, while
//! [`crate::core`] owns the tab model, terminal log, and scheduled work.

pub mod builtin_themes;
pub mod editor;
pub mod event_loop;
pub mod highlight;
pub mod layout;
pub mod renderer;
pub mod terminal_panel;
pub mod theme;
