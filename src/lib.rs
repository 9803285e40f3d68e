//! Edit Log - coalescing history of text edit actions
//!
//! This crate records the edit actions an editor performs on a text buffer,
//! merging keystroke-level edits, and reconciles that history with text
//! modified outside the editor.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod history;
pub mod tracing;

// Re-export commonly used types
pub use config::LoggerConfig;
pub use history::{ActionLogger, Change, ChangeType, EditAction, EditorId, LogItem, Selection};
