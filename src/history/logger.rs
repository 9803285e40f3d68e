//! The edit action log.
//!
//! [`ActionLogger`] keeps an ordered list of [`LogItem`]s on top of a baseline
//! text. Keystroke-level edits from the same editor are coalesced into the
//! most recent entry so typing a word, or holding Delete/Backspace, produces
//! one entry instead of one per character.
//!
//! The associated functions cover reconciliation with text persisted
//! elsewhere: replaying a log over its baseline, synthesizing the "gap"
//! action that explains any difference, and reversing an action.

use super::action::EditAction;
use super::change::{Change, ChangeType};
use super::error::{ActionLogError, Result};
use super::identity::{EditorId, EditorIdentify};
use super::log_item::{now_millis, LogItem};
use super::patch;
use super::selection::Selection;
use crate::config::LoggerConfig;

/// How an incoming action was folded into the previous entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Coalesce {
    /// Insertion directly after the previous insertion
    Insert,
    /// Deletion at the same offset ("Delete" key)
    ForwardDelete,
    /// Deletion directly before the previous deletion ("Backspace" key)
    Backspace,
}

/// Ordered, coalescing log of edit actions against a baseline text.
#[derive(Debug, Clone)]
pub struct ActionLogger<I = EditorId> {
    text_content: String,
    text_edit_action_log_items: Vec<LogItem<I>>,
    coalesce: bool,
}

impl<I: EditorIdentify> Default for ActionLogger<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: EditorIdentify> ActionLogger<I> {
    /// Create an empty logger with an empty baseline
    pub fn new() -> Self {
        Self::with_config(&LoggerConfig::default())
    }

    pub fn with_config(config: &LoggerConfig) -> Self {
        Self {
            text_content: String::new(),
            text_edit_action_log_items: Vec::new(),
            coalesce: config.coalesce,
        }
    }

    /// Reset the baseline text and drop every logged item
    pub fn clear(&mut self, text_content: impl Into<String>) {
        self.text_content = text_content.into();
        self.text_edit_action_log_items.clear();
    }

    /// Baseline text the log was started from
    pub fn text_content(&self) -> &str {
        &self.text_content
    }

    pub fn log_items(&self) -> &[LogItem<I>] {
        &self.text_edit_action_log_items
    }

    pub fn len(&self) -> usize {
        self.text_edit_action_log_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text_edit_action_log_items.is_empty()
    }

    pub fn last_action(&self) -> Option<&EditAction<I>> {
        self.text_edit_action_log_items
            .last()
            .map(|item| &item.text_edit_action)
    }

    /// Commit an action, either as a new entry or merged into the last one.
    ///
    /// The log grows by one entry, or stays the same length when the last
    /// entry is replaced by a merged one. Fails with `InvalidArgument` if the
    /// action carries no changes.
    pub fn add(&mut self, action: EditAction<I>) -> Result<()> {
        if action.text_changes.is_empty() {
            return Err(ActionLogError::InvalidArgument(
                "the text edit action must carry at least one change".to_string(),
            ));
        }

        let merged = match self.last_action() {
            Some(last) if self.coalesce => Self::try_merge(last, &action),
            _ => None,
        };

        match merged {
            Some((kind, combined)) => {
                let item = Self::build_text_edit_action_log_item(combined)?;
                // Logged items are immutable: replace the last entry wholesale
                self.text_edit_action_log_items.pop();
                self.text_edit_action_log_items.push(item);
                tracing::debug!(?kind, len = self.len(), "merged edit action into last entry");
            }
            None => {
                let item = Self::build_text_edit_action_log_item(action)?;
                self.text_edit_action_log_items.push(item);
                tracing::debug!(len = self.len(), "appended edit action");
            }
        }

        Ok(())
    }

    /// Build the merged action for `action` on top of `last`, if the two
    /// form one continuous keystroke-level edit.
    fn try_merge(
        last: &EditAction<I>,
        action: &EditAction<I>,
    ) -> Option<(Coalesce, EditAction<I>)> {
        if action.text_changes.len() > 1 {
            tracing::trace!("not merging: action has multiple changes");
            return None;
        }
        if !action.selection_after.is_collapsed() {
            tracing::trace!("not merging: selection after edit is not collapsed");
            return None;
        }
        if !action.editor_identify.equals(&last.editor_identify) {
            tracing::trace!("not merging: different editor");
            return None;
        }

        let last_change = last.last_change()?;
        let current_change = action.text_changes.first()?;

        // Merged newline changes cannot be reliably redone
        if current_change.is_newlines() || last_change.is_newlines() {
            tracing::trace!("not merging: newline-only change");
            return None;
        }

        let (kind, combined_change) = match (last_change.change_type, current_change.change_type) {
            (ChangeType::Added, ChangeType::Added) => {
                if current_change.position != last_change.position + last_change.char_len() {
                    return None;
                }
                let text = format!("{}{}", last_change.text, current_change.text);
                (Coalesce::Insert, Change::added(last_change.position, text))
            }
            (ChangeType::Removed, ChangeType::Removed) => {
                if current_change.position == last_change.position {
                    let text = format!("{}{}", last_change.text, current_change.text);
                    (Coalesce::ForwardDelete, Change::removed(last_change.position, text))
                } else if last_change.position.checked_sub(current_change.char_len())
                    == Some(current_change.position)
                {
                    let text = format!("{}{}", current_change.text, last_change.text);
                    (Coalesce::Backspace, Change::removed(current_change.position, text))
                } else {
                    return None;
                }
            }
            (ChangeType::Added, ChangeType::Removed) | (ChangeType::Removed, ChangeType::Added) => {
                return None;
            }
        };

        let mut text_changes = last.text_changes[..last.text_changes.len() - 1].to_vec();
        text_changes.push(combined_change);

        let combined = EditAction::new(
            action.editor_identify.clone(),
            last.selection_before,
            action.selection_after,
            text_changes,
        );
        Some((kind, combined))
    }

    /// Replay this logger's items over its baseline and, if the result
    /// differs from `persisted_text`, add the gap action followed by its
    /// reversal.
    ///
    /// Both go through [`add`](Self::add), so the gap may merge into the last
    /// entry when `gap_editor` matches that entry's editor. Afterwards the
    /// log replays through the persisted version and back to the version the
    /// editor's own history was built on. Returns the gap action, or `None`
    /// when the log was already consistent.
    pub fn reconcile(
        &mut self,
        persisted_text: &str,
        gap_editor: I,
    ) -> Result<Option<EditAction<I>>> {
        let Some(gap) = Self::check_text_edit_action_log_integrity(
            &self.text_content,
            &self.text_edit_action_log_items,
            persisted_text,
            gap_editor,
        )?
        else {
            return Ok(None);
        };

        let reversal = Self::reverse_text_edit_action(&gap);
        self.add(gap.clone())?;
        self.add(reversal)?;

        tracing::info!(
            changes = gap.text_changes.len(),
            len = self.len(),
            "reconciled edit log with externally modified text"
        );
        Ok(Some(gap))
    }

    /// Apply every item's changes to `text_before`, in log order
    pub fn replay(text_before: &str, log_items: &[LogItem<I>]) -> Result<String> {
        log_items.iter().try_fold(text_before.to_string(), |text, item| {
            patch::apply(&text, &item.text_edit_action.text_changes)
        })
    }

    /// Check that replaying `log_items` over `text_before` yields `text_after`.
    ///
    /// Returns the gap action accounting for any difference, or `None` if
    /// the texts match.
    pub fn check_text_edit_action_log_integrity(
        text_before: &str,
        log_items: &[LogItem<I>],
        text_after: &str,
        gap_editor_identify: I,
    ) -> Result<Option<EditAction<I>>> {
        let computed = Self::replay(text_before, log_items)?;
        Ok(Self::get_text_edit_action_by_modified_text(
            &computed,
            text_after,
            gap_editor_identify,
        ))
    }

    /// The action transforming `original` into `modified`, or `None` if they
    /// are equal.
    ///
    /// The selection before is a caret at the first change; the selection
    /// after is a caret where the last change leaves it (at a deletion, or
    /// after an insertion).
    pub fn get_text_edit_action_by_modified_text(
        original: &str,
        modified: &str,
        editor_identify: I,
    ) -> Option<EditAction<I>> {
        if original == modified {
            return None;
        }

        let text_changes = patch::diff(original, modified);
        let first = text_changes.first()?;
        let last = text_changes.last()?;

        let selection_before = Selection::collapsed(first.position);
        let selection_after = Selection::collapsed(match last.change_type {
            ChangeType::Removed => last.position,
            ChangeType::Added => last.position + last.char_len(),
        });

        Some(EditAction::new(
            editor_identify,
            selection_before,
            selection_after,
            text_changes,
        ))
    }

    /// Wrap an action in a log item stamped with the current time
    pub fn build_text_edit_action_log_item(action: EditAction<I>) -> Result<LogItem<I>> {
        if action.text_changes.is_empty() {
            return Err(ActionLogError::InvalidArgument(
                "cannot log a text edit action without changes".to_string(),
            ));
        }
        Ok(LogItem::new(now_millis(), action))
    }

    /// The action that undoes `action`
    pub fn reverse_text_edit_action(action: &EditAction<I>) -> EditAction<I> {
        action.reversed()
    }
}
