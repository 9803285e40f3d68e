//! Edit actions: the unit stored by the edit log.

use serde::{Deserialize, Serialize};

use super::change::Change;
use super::identity::{EditorId, EditorIdentify};
use super::patch;
use super::selection::Selection;

/// One logical editing operation.
///
/// Actions are never mutated once logged; coalescing builds a new action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditAction<I = EditorId> {
    /// Editor instance that produced the action
    pub editor_identify: I,
    /// Selection before the edit
    pub selection_before: Selection,
    /// Selection after the edit
    pub selection_after: Selection,
    /// Ordered changes, sequentially positioned
    pub text_changes: Vec<Change>,
}

impl<I: EditorIdentify> EditAction<I> {
    pub fn new(
        editor_identify: I,
        selection_before: Selection,
        selection_after: Selection,
        text_changes: Vec<Change>,
    ) -> Self {
        Self {
            editor_identify,
            selection_before,
            selection_after,
            text_changes,
        }
    }

    /// The action that undoes this one: selections swapped, changes reversed.
    pub fn reversed(&self) -> Self {
        Self {
            editor_identify: self.editor_identify.clone(),
            selection_before: self.selection_after,
            selection_after: self.selection_before,
            text_changes: patch::reverse(&self.text_changes),
        }
    }

    pub fn last_change(&self) -> Option<&Change> {
        self.text_changes.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_swaps_selections() {
        let action = EditAction::new(
            EditorId::new("foo"),
            Selection::collapsed(0),
            Selection::collapsed(2),
            vec![Change::added(0, "ab")],
        );
        let rev = action.reversed();
        assert_eq!(rev.selection_before, Selection::collapsed(2));
        assert_eq!(rev.selection_after, Selection::collapsed(0));
        assert_eq!(rev.text_changes, vec![Change::removed(0, "ab")]);
        assert_eq!(rev.editor_identify, action.editor_identify);
        assert_eq!(rev.reversed(), action);
    }

    #[test]
    fn test_action_serializes_camel_case() {
        let action = EditAction::new(
            EditorId::new("foo"),
            Selection::collapsed(0),
            Selection::collapsed(1),
            vec![Change::added(0, "a")],
        );
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["editorIdentify"], "foo");
        assert_eq!(json["selectionAfter"]["end"], 1);
        assert_eq!(json["textChanges"][0]["changeType"], "added");

        let back: EditAction = serde_json::from_value(json).unwrap();
        assert_eq!(back, action);
    }
}
