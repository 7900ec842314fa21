use super::TypedCollection;
use crate::element::Element;
use crate::error::{CollectionError, Result};

// Callbacks get `(element, index, source)`, folds `(acc, element, index, source)`.
impl<T: Element> TypedCollection<T> {
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.elements.iter().enumerate().all(|(i, item)| predicate(item, i, self))
    }

    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.elements.iter().enumerate().any(|(i, item)| predicate(item, i, self))
    }

    pub fn find<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.find_index(|item, i, source| predicate(item, i, source))
            .map(|i| &self.elements[i])
    }

    pub fn find_index<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.elements.iter().enumerate().position(|(i, item)| predicate(item, i, self))
    }

    pub fn for_each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&T, usize, &Self),
    {
        for (i, item) in self.elements.iter().enumerate() {
            f(item, i, self);
        }
        self
    }

    /// First position at or after `from` (default 0) equal to `item`.
    ///
    /// Compares with `PartialEq`, not by reference. For identity, hold `Rc`s
    /// and use `find_index` with `Rc::ptr_eq`.
    pub fn index_of(&self, item: &T, from: Option<usize>) -> Option<usize>
    where
        T: PartialEq,
    {
        let from = from.unwrap_or(0);
        self.elements
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, candidate)| *candidate == item)
            .map(|(i, _)| i)
    }

    /// Last position at or before `from` (default: the last index) equal to `item`.
    /// Compares with `PartialEq`, like `index_of`.
    pub fn last_index_of(&self, item: &T, from: Option<usize>) -> Option<usize>
    where
        T: PartialEq,
    {
        let last = self.elements.len().checked_sub(1)?;
        let from = from.map_or(last, |f| f.min(last));
        (0..=from).rev().find(|&i| self.elements[i] == *item)
    }

    pub fn item(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Fold left to right, seeded with the first element.
    pub fn reduce<F>(&self, mut f: F) -> Result<T>
    where
        F: FnMut(T, &T, usize, &Self) -> T,
    {
        let (first, rest) = self
            .elements
            .split_first()
            .ok_or(CollectionError::EmptyCollection)?;
        Ok(rest
            .iter()
            .enumerate()
            .fold(first.clone(), |acc, (i, item)| f(acc, item, i + 1, self)))
    }

    /// Fold right to left, seeded with the last element.
    pub fn reduce_right<F>(&self, mut f: F) -> Result<T>
    where
        F: FnMut(T, &T, usize, &Self) -> T,
    {
        let (last, rest) = self
            .elements
            .split_last()
            .ok_or(CollectionError::EmptyCollection)?;
        Ok(rest
            .iter()
            .enumerate()
            .rev()
            .fold(last.clone(), |acc, (i, item)| f(acc, item, i, self)))
    }

    pub fn fold<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &T, usize, &Self) -> A,
    {
        self.elements
            .iter()
            .enumerate()
            .fold(init, |acc, (i, item)| f(acc, item, i, self))
    }

    pub fn fold_right<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &T, usize, &Self) -> A,
    {
        self.elements
            .iter()
            .enumerate()
            .rev()
            .fold(init, |acc, (i, item)| f(acc, item, i, self))
    }

    /// Independent copy of the elements.
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }
}
