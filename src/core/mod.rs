pub mod app;
pub mod builtin_documents;
pub mod config;
pub mod constants;
pub mod contact;
pub mod document;
pub mod resume;
pub mod scheduler;
pub mod terminal_log;
pub mod theme_mode;
pub mod workbench;
