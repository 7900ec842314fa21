use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::element::TypeTag;

pub type Comparator<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// Configuration carried by a collection.
///
/// Cloning is shallow: the comparator is shared, the struct is not. Derived
/// collections receive a clone, so changing their options afterwards never
/// reaches the source.
pub struct Options<T> {
    /// Explicit element type. Inferred from the first seed element when unset.
    pub element_type: Option<TypeTag>,
    /// Comparator used by `sort` when none is passed.
    pub sort: Option<Comparator<T>>,
}

impl<T> Options<T> {
    pub fn new() -> Self {
        Self {
            element_type: None,
            sort: None,
        }
    }

    pub fn element_type(mut self, tag: impl Into<TypeTag>) -> Self {
        self.element_type = Some(tag.into());
        self
    }

    pub fn sort_by<F>(mut self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        self.sort = Some(Rc::new(compare));
        self
    }
}

impl<T> Default for Options<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Not derived: a derive would require `T: Clone` / `T: Debug`.
impl<T> Clone for Options<T> {
    fn clone(&self) -> Self {
        Self {
            element_type: self.element_type.clone(),
            sort: self.sort.clone(),
        }
    }
}

impl<T> fmt::Debug for Options<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("element_type", &self.element_type)
            .field("sort", &self.sort.as_ref().map(|_| "<comparator>"))
            .finish()
    }
}
