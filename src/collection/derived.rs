use std::borrow::Cow;

use super::range::resolve_window;
use super::TypedCollection;
use crate::element::Element;
use crate::error::{CollectionError, Result};
use crate::options::Options;

/// Something `concat` can read a sequence out of.
///
/// Returning `None` marks a value that is not a sequence; `concat` rejects it
/// with `InvalidArgument`.
pub trait AsSequence<T: Clone> {
    fn as_sequence(&self) -> Option<Cow<'_, [T]>>;
}

impl<T: Clone> AsSequence<T> for Vec<T> {
    fn as_sequence(&self) -> Option<Cow<'_, [T]>> {
        Some(Cow::Borrowed(self.as_slice()))
    }
}

impl<T: Clone> AsSequence<T> for &[T] {
    fn as_sequence(&self) -> Option<Cow<'_, [T]>> {
        Some(Cow::Borrowed(*self))
    }
}

impl<T: Clone, const N: usize> AsSequence<T> for [T; N] {
    fn as_sequence(&self) -> Option<Cow<'_, [T]>> {
        Some(Cow::Borrowed(self.as_slice()))
    }
}

impl<T: Element> AsSequence<T> for TypedCollection<T> {
    fn as_sequence(&self) -> Option<Cow<'_, [T]>> {
        Some(Cow::Borrowed(self.as_slice()))
    }
}

impl<T: Element> TypedCollection<T> {
    /// Elements for which `predicate(element, index, self)` holds.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        let kept = self
            .elements
            .iter()
            .enumerate()
            .filter(|(i, item)| predicate(*item, *i, self))
            .map(|(_, item)| item.clone())
            .collect();
        self.sibling(kept)
    }

    /// Transform every element, keeping length and order.
    ///
    /// The result inherits this collection's options, including its element
    /// type. A transform that changes the element type fails with
    /// `TypeMismatch`; use `map_into` with matching options instead.
    pub fn map<F>(&self, transform: F) -> Result<Self>
    where
        F: FnMut(&T, usize, &Self) -> T,
    {
        self.map_into(self.derived_options(), transform)
    }

    pub fn map_into<U, F>(&self, options: Options<U>, mut transform: F) -> Result<TypedCollection<U>>
    where
        U: Element,
        F: FnMut(&T, usize, &Self) -> U,
    {
        let mapped = self
            .elements
            .iter()
            .enumerate()
            .map(|(i, item)| transform(item, i, self))
            .collect();
        TypedCollection::new(mapped, options)
    }

    /// Contiguous copy of `begin..end`. Negative offsets count from the tail,
    /// `None` for `end` runs through the tail.
    pub fn slice(&self, begin: Option<isize>, end: Option<isize>) -> Self {
        let window = resolve_window(begin, end, self.elements.len());
        self.sibling(self.elements[window].to_vec())
    }

    /// This collection's elements followed by each argument's, in order.
    pub fn concat(&self, others: &[&dyn AsSequence<T>]) -> Result<Self> {
        let mut joined = self.elements.clone();
        for (position, other) in others.iter().enumerate() {
            let sequence = other
                .as_sequence()
                .ok_or(CollectionError::InvalidArgument { position })?;
            joined.extend_from_slice(&sequence);
        }
        Self::new(joined, self.derived_options())
    }
}
