use serde::{Deserialize, Serialize};

use crate::event::{Change, ChangeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub kind: ChangeKind,
    /// Items added or removed; 0 for sorts.
    pub count: usize,
    /// Collection length once the change was applied.
    pub length_after: usize,
}

impl<T> From<&Change<'_, T>> for ChangeRecord {
    fn from(change: &Change<'_, T>) -> Self {
        Self {
            kind: change.kind,
            count: change.items.len(),
            length_after: change.source.len(),
        }
    }
}
