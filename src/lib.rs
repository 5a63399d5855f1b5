//! Codefolio is a developer portfolio dressed up as a code editor, running
//! full-screen in the terminal.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns runtime state: the open-tab model, the terminal log, the
//!   virtual clock that drives animations, the contact form, and configuration.
//! - [`ui`] renders the workbench and runs the interactive event loop that
//!   drives user input and display updates.
//! - [`cli`] parses arguments and handles the non-interactive subcommands.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
