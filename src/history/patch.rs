//! Diff, patch and reverse over change lists.
//!
//! Change positions are sequential: each change is positioned against the
//! text as it stands after every earlier change in the same list has been
//! applied. `diff` produces lists in that form, `apply` consumes them, and
//! `reverse` turns a list into the one that undoes it.

use similar::{ChangeTag, TextDiff};

use super::change::{Change, ChangeType};
use super::error::{ActionLogError, Result};

/// Compute the character-level edit script turning `original` into `modified`.
///
/// Adjacent deletions and insertions are grouped into single changes.
/// Returns an empty list when the texts are equal.
pub fn diff(original: &str, modified: &str) -> Vec<Change> {
    let text_diff = TextDiff::from_chars(original, modified);

    let mut changes: Vec<Change> = Vec::new();
    let mut position = 0;

    for change in text_diff.iter_all_changes() {
        let value = change.value();
        let len = value.chars().count();

        let change_type = match change.tag() {
            ChangeTag::Equal => {
                position += len;
                continue;
            }
            ChangeTag::Delete => ChangeType::Removed,
            ChangeTag::Insert => ChangeType::Added,
        };

        match changes.last_mut() {
            Some(last) if last.change_type == change_type && extends(last, position) => {
                last.text.push_str(value);
            }
            _ => changes.push(Change::new(position, change_type, value)),
        }

        if change_type == ChangeType::Added {
            position += len;
        }
    }

    changes
}

/// Whether a change of the same type at `position` continues `last`
fn extends(last: &Change, position: usize) -> bool {
    match last.change_type {
        ChangeType::Added => last.position + last.char_len() == position,
        ChangeType::Removed => last.position == position,
    }
}

/// Apply `changes` to `text` in order.
///
/// Fails if a change lies past the end of the text, or if a removal does
/// not match the text at its position.
pub fn apply(text: &str, changes: &[Change]) -> Result<String> {
    let mut chars: Vec<char> = text.chars().collect();

    for change in changes {
        if change.position > chars.len() {
            return Err(ActionLogError::PositionOutOfBounds {
                position: change.position,
                len: chars.len(),
            });
        }

        match change.change_type {
            ChangeType::Added => {
                chars.splice(change.position..change.position, change.text.chars());
            }
            ChangeType::Removed => {
                let end = change.position + change.char_len();
                let found: String = chars[change.position..end.min(chars.len())]
                    .iter()
                    .collect();
                if found != change.text {
                    return Err(ActionLogError::TextMismatch {
                        position: change.position,
                        expected: change.text.clone(),
                        found,
                    });
                }
                chars.drain(change.position..end);
            }
        }
    }

    Ok(chars.into_iter().collect())
}

/// The change list that undoes `changes`: reversed order, each change inverted.
pub fn reverse(changes: &[Change]) -> Vec<Change> {
    changes.iter().rev().map(Change::inverse).collect()
}
