//! Edit history log for a single text buffer.
//!
//! The log records what an editor did to a buffer so the history can be
//! replayed, undone, and reconciled against the text persisted on disk.
//!
//! # Architecture
//!
//! - [`Change`] / [`ChangeType`]: a single insertion or deletion
//! - [`Selection`]: caret or range before and after an edit
//! - [`EditorIdentify`] / [`EditorId`]: which editor produced an action
//! - [`EditAction`]: one logical edit (selections plus ordered changes)
//! - [`LogItem`]: a timestamped, committed action
//! - [`ActionLogger`]: the coalescing log plus integrity/gap/reversal helpers
//! - [`patch`]: diff, apply and reverse over change lists
//!
//! # Example
//!
//! ```
//! use edit_log::history::{ActionLogger, Change, EditAction, EditorId, Selection};
//!
//! let editor = EditorId::new("main");
//! let mut logger = ActionLogger::new();
//! logger.clear("");
//!
//! // Typing "a" then "b" coalesces into one entry
//! for (pos, ch) in ["a", "b"].into_iter().enumerate() {
//!     logger
//!         .add(EditAction::new(
//!             editor.clone(),
//!             Selection::collapsed(pos),
//!             Selection::collapsed(pos + 1),
//!             vec![Change::added(pos, ch)],
//!         ))
//!         .unwrap();
//! }
//! assert_eq!(logger.len(), 1);
//!
//! let replayed = ActionLogger::replay(logger.text_content(), logger.log_items()).unwrap();
//! assert_eq!(replayed, "ab");
//! ```

mod action;
mod change;
mod error;
mod identity;
mod log_item;
mod logger;
pub mod patch;
mod selection;

// Re-export main types
pub use action::EditAction;
pub use change::{Change, ChangeType};
pub use error::{ActionLogError, Result};
pub use identity::{EditorId, EditorIdentify};
pub use log_item::LogItem;
pub use logger::ActionLogger;
pub use selection::Selection;
