//! Editor identity: which editor instance produced an action.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Capability implemented by whatever identity type a host editor uses.
///
/// The logger only ever asks "is this the same editor as the previous
/// action?", so equality is the whole contract.
pub trait EditorIdentify: fmt::Debug + Clone {
    fn equals(&self, other: &Self) -> bool;
}

/// Name-based editor identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorId(pub String);

impl EditorId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The empty identity, used for actions not produced by any editor
    /// (e.g. gap actions synthesized during reconciliation).
    pub fn gap() -> Self {
        Self(String::new())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl EditorIdentify for EditorId {
    fn equals(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl fmt::Display for EditorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EditorId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
