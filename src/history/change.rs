//! Atomic text changes recorded by the edit log.

use serde::{Deserialize, Serialize};

/// Whether a change inserted or deleted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Added,
    Removed,
}

impl ChangeType {
    /// The opposite change type
    pub fn inverse(self) -> Self {
        match self {
            ChangeType::Added => ChangeType::Removed,
            ChangeType::Removed => ChangeType::Added,
        }
    }
}

/// A single insertion or deletion of text at a character position.
///
/// Positions are counted in `char`s. For `Removed`, the position is the
/// offset of the deleted text before deletion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    pub position: usize,
    pub change_type: ChangeType,
    pub text: String,
}

impl Change {
    pub fn new(position: usize, change_type: ChangeType, text: impl Into<String>) -> Self {
        Self {
            position,
            change_type,
            text: text.into(),
        }
    }

    /// Create an insertion
    pub fn added(position: usize, text: impl Into<String>) -> Self {
        Self::new(position, ChangeType::Added, text)
    }

    /// Create a deletion
    pub fn removed(position: usize, text: impl Into<String>) -> Self {
        Self::new(position, ChangeType::Removed, text)
    }

    /// The change that undoes this one (same position and text, opposite type)
    pub fn inverse(&self) -> Self {
        Self {
            position: self.position,
            change_type: self.change_type.inverse(),
            text: self.text.clone(),
        }
    }

    /// Length of the affected text in chars
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// True when the text is one or more `\n` and nothing else.
    pub fn is_newlines(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|ch| ch == '\n')
    }
}
