//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use edit_log::history::{patch, ActionLogger, Change, EditAction, EditorId, Selection};

pub fn editor(name: &str) -> EditorId {
    EditorId::new(name)
}

/// A single keystroke inserting `text` at `pos`, caret ending after it
pub fn insert(editor_name: &str, pos: usize, text: &str) -> EditAction {
    let end = pos + text.chars().count();
    EditAction::new(
        editor(editor_name),
        Selection::collapsed(pos),
        Selection::collapsed(end),
        vec![Change::added(pos, text)],
    )
}

/// "Delete" key at `pos` removing `text`, caret stays put
pub fn delete_forward(editor_name: &str, pos: usize, text: &str) -> EditAction {
    EditAction::new(
        editor(editor_name),
        Selection::collapsed(pos),
        Selection::collapsed(pos),
        vec![Change::removed(pos, text)],
    )
}

/// "Backspace" removing `text` that ends at `caret`
pub fn backspace(editor_name: &str, caret: usize, text: &str) -> EditAction {
    let pos = caret - text.chars().count();
    EditAction::new(
        editor(editor_name),
        Selection::collapsed(caret),
        Selection::collapsed(pos),
        vec![Change::removed(pos, text)],
    )
}

/// Apply each action's changes directly, without going through a logger
pub fn apply_all(text: &str, actions: &[EditAction]) -> String {
    actions.iter().fold(text.to_string(), |acc, action| {
        patch::apply(&acc, &action.text_changes).unwrap()
    })
}

/// A logger primed with `baseline` and the given actions
pub fn logger_with(baseline: &str, actions: &[EditAction]) -> ActionLogger {
    let mut logger = ActionLogger::new();
    logger.clear(baseline);
    for action in actions {
        logger.add(action.clone()).unwrap();
    }
    logger
}

/// Replay the logger's items over its baseline
pub fn replay(logger: &ActionLogger) -> String {
    ActionLogger::replay(logger.text_content(), logger.log_items()).unwrap()
}
