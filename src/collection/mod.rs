//! The typed, observable list container.
//!
//! # TYPE INVARIANT
//! Every stored element reports the collection's `TypeTag`. The check runs on
//! the way in (construction, push, unshift, splice, concat, map) and never
//! after the fact.
//!
//! # CONCURRENCY
//! Not safe for unsynchronized concurrent mutation. Subscribers are `Rc`-held,
//! so the type is `!Send` and `!Sync`.

mod derived;
mod mutate;
pub(crate) mod range;
mod scan;

pub use derived::AsSequence;

use std::fmt;

use tracing::debug;

use crate::element::{Element, TypeTag};
use crate::error::{CollectionError, Result};
use crate::event::{Change, ChangeKind, ChangePublisher};
use crate::options::Options;

pub struct TypedCollection<T> {
    elements: Vec<T>,
    element_type: TypeTag,
    options: Options<T>,
    publisher: ChangePublisher<T>,
}

impl<T: Element> TypedCollection<T> {
    /// Build a collection from seed elements and options.
    ///
    /// The element type is `options.element_type` when set, otherwise the tag
    /// of the first seed element. Fails with `Configuration` if neither is
    /// available, and with `TypeMismatch` on the first seed element that does
    /// not match.
    pub fn new(elements: Vec<T>, mut options: Options<T>) -> Result<Self> {
        let element_type = match (&options.element_type, elements.first()) {
            (Some(tag), _) => tag.clone(),
            (None, Some(first)) => first.type_tag(),
            (None, None) => return Err(CollectionError::Configuration),
        };

        check_all(&element_type, &elements)?;
        options.element_type = Some(element_type.clone());

        debug!(element_type = %element_type, len = elements.len(), "collection created");

        Ok(Self {
            elements,
            element_type,
            options,
            publisher: ChangePublisher::new(),
        })
    }

    pub fn from_elements(elements: Vec<T>) -> Result<Self> {
        Self::new(elements, Options::default())
    }

    /// Empty collection; `options` must name the element type.
    pub fn with_options(options: Options<T>) -> Result<Self> {
        Self::new(Vec::new(), options)
    }

    /// `Ok(true)` iff every candidate matches this collection's type.
    ///
    /// With `strict` the first mismatch is an error instead of `Ok(false)`.
    /// Checking stops at the first mismatch either way.
    pub fn accept(&self, candidates: &[T], strict: bool) -> Result<bool> {
        if strict {
            check_all(&self.element_type, candidates)?;
            return Ok(true);
        }
        Ok(candidates.iter().all(|c| c.type_tag() == self.element_type))
    }

    pub fn element_type(&self) -> &TypeTag {
        &self.element_type
    }

    pub fn options(&self) -> &Options<T> {
        &self.options
    }

    /// Changes reach collections derived afterwards, never earlier ones.
    /// `element_type` is pinned to this collection's type whenever options
    /// are copied, so overwriting it here has no effect.
    pub fn options_mut(&mut self) -> &mut Options<T> {
        &mut self.options
    }

    /// Shallow copy of the options handed to derived collections.
    fn derived_options(&self) -> Options<T> {
        let mut options = self.options.clone();
        options.element_type = Some(self.element_type.clone());
        options
    }

    /// Sibling over `elements`, sharing nothing but a copy of the options.
    /// `elements` must already be members of this collection.
    fn sibling(&self, elements: Vec<T>) -> Self {
        Self {
            elements,
            element_type: self.element_type.clone(),
            options: self.derived_options(),
            publisher: ChangePublisher::new(),
        }
    }

    fn publish(&self, kind: ChangeKind, items: &[T]) {
        self.publisher.emit(&Change {
            kind,
            items,
            source: self,
        });
    }
}

impl<T> TypedCollection<T> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The size is read only. Always fails and never changes the collection.
    pub fn set_len(&mut self, _len: usize) -> Result<()> {
        Err(CollectionError::ImmutableProperty { property: "length" })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn events(&self) -> &ChangePublisher<T> {
        &self.publisher
    }
}

fn check_all<T: Element>(expected: &TypeTag, items: &[T]) -> Result<()> {
    for (position, item) in items.iter().enumerate() {
        let found = item.type_tag();
        if found != *expected {
            debug!(expected = %expected, found = %found, position, "element rejected");
            return Err(CollectionError::TypeMismatch {
                expected: expected.clone(),
                found,
                position,
            });
        }
    }
    Ok(())
}

impl<'a, T> IntoIterator for &'a TypedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for TypedCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedCollection")
            .field("element_type", &self.element_type)
            .field("elements", &self.elements)
            .field("subscribers", &self.publisher.subscriber_count())
            .finish()
    }
}
