//! Selection ranges attached to logged edit actions.

use serde::{Deserialize, Serialize};

/// A caret or range in the text, as char offsets with `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection spanning the two offsets, in either order
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Create a collapsed selection (caret with no range)
    pub fn collapsed(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Check if selection is a bare caret (start == end)
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}
