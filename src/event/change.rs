use std::fmt;

use serde::{Deserialize, Serialize};

use crate::collection::TypedCollection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    Add,
    Remove,
    Sort,
}

impl ChangeKind {
    /// Namespaced event name, e.g. `change.add`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Add => "change.add",
            ChangeKind::Remove => "change.remove",
            ChangeKind::Sort => "change.sort",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One published notification.
///
/// `items` holds the added or removed elements in the order they were added
/// or removed; it is empty for `Sort`. `source` is the collection that fired,
/// already in its post-change state.
pub struct Change<'a, T> {
    pub kind: ChangeKind,
    pub items: &'a [T],
    pub source: &'a TypedCollection<T>,
}

impl<T> Change<'_, T> {
    pub fn namespace(&self) -> &'static str {
        self.kind.as_str()
    }
}

impl<T: fmt::Debug> fmt::Debug for Change<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Change")
            .field("kind", &self.kind)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
