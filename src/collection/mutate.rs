use std::cmp::Ordering;
use std::slice;

use super::range::resolve_splice;
use super::{check_all, TypedCollection};
use crate::element::Element;
use crate::error::Result;
use crate::event::ChangeKind;

impl<T: Element> TypedCollection<T> {
    /// Append `items` in order and return the new length.
    /// One mismatching item rejects the whole call. An empty `items` publishes
    /// nothing.
    pub fn push(&mut self, items: Vec<T>) -> Result<usize> {
        check_all(&self.element_type, &items)?;
        if items.is_empty() {
            return Ok(self.len());
        }

        let start = self.elements.len();
        self.elements.extend(items);
        self.publish(ChangeKind::Add, &self.elements[start..]);

        Ok(self.len())
    }

    /// Prepend `items`, keeping their order, and return the new length.
    /// An empty `items` publishes nothing.
    pub fn unshift(&mut self, items: Vec<T>) -> Result<usize> {
        check_all(&self.element_type, &items)?;
        if items.is_empty() {
            return Ok(self.len());
        }

        let count = items.len();
        self.elements.splice(0..0, items);
        self.publish(ChangeKind::Add, &self.elements[..count]);

        Ok(self.len())
    }

    pub fn pop(&mut self) -> Option<T> {
        let item = self.elements.pop()?;
        self.publish(ChangeKind::Remove, slice::from_ref(&item));
        Some(item)
    }

    pub fn shift(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let item = self.elements.remove(0);
        self.publish(ChangeKind::Remove, slice::from_ref(&item));
        Some(item)
    }

    /// Remove `remove_count` elements at `index`, then insert `items` there.
    ///
    /// `index` is resolved like a `slice` offset and `remove_count` is clamped
    /// to what is available. Returns the removed elements as a new collection
    /// (empty when nothing was removed). Publishes `change.add` before
    /// `change.remove`, each only when non-empty.
    pub fn splice(&mut self, index: isize, remove_count: usize, items: Vec<T>) -> Result<Self> {
        check_all(&self.element_type, &items)?;

        let range = resolve_splice(index, remove_count, self.elements.len());
        let start = range.start;
        let added = items.len();
        let removed: Vec<T> = self.elements.splice(range, items).collect();

        if added > 0 {
            self.publish(ChangeKind::Add, &self.elements[start..start + added]);
        }
        if !removed.is_empty() {
            self.publish(ChangeKind::Remove, &removed);
        }

        Ok(self.sibling(removed))
    }

    /// Sort with `options.sort` if configured, else by `Ord`.
    /// Publishes `change.sort` even when the order did not change.
    pub fn sort(&mut self) -> &mut Self
    where
        T: Ord,
    {
        if !self.sort_configured() {
            self.sort_by(Ord::cmp);
        }
        self
    }

    /// Sort with `options.sort`. Needs no `Ord`.
    ///
    /// Returns `false`, without sorting or publishing, when no comparator is
    /// configured.
    pub fn sort_configured(&mut self) -> bool {
        match self.options.sort.clone() {
            Some(compare) => {
                self.sort_by(|a, b| compare(a, b));
                true
            }
            None => false,
        }
    }

    pub fn sort_by<F>(&mut self, compare: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.elements.sort_by(compare);
        self.publish(ChangeKind::Sort, &[]);
        self
    }

    /// Sort with `options.sort`, falling back to `fallback` when none is set.
    /// For element types without a natural order.
    pub fn sort_or_by<F>(&mut self, fallback: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if !self.sort_configured() {
            self.sort_by(fallback);
        }
        self
    }

    pub fn reverse(&mut self) -> &mut Self {
        self.elements.reverse();
        self.publish(ChangeKind::Sort, &[]);
        self
    }
}
