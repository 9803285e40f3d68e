//! Timestamped log entries.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::action::EditAction;
use super::identity::EditorId;

/// A committed edit action with the time it was committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogItem<I = EditorId> {
    /// Milliseconds since the Unix epoch
    pub creation_time: u64,
    pub text_edit_action: EditAction<I>,
}

impl<I> LogItem<I> {
    pub fn new(creation_time: u64, text_edit_action: EditAction<I>) -> Self {
        Self {
            creation_time,
            text_edit_action,
        }
    }
}

/// Current time in milliseconds since the Unix epoch
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
