use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Nominal element-type descriptor.
///
/// Two tags are the same type iff their names are equal. Tags are carried by
/// value, so a collection never depends on where its tag came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTag(Cow<'static, str>);

impl TypeTag {
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Tag named after a Rust type.
    pub fn of<T: ?Sized>() -> Self {
        Self(Cow::Borrowed(std::any::type_name::<T>()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<String> for TypeTag {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl From<&'static str> for TypeTag {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything that can live in a `TypedCollection`.
///
/// `type_tag` is the runtime membership check. Values of one Rust type may
/// report different tags (e.g. the variants of a dynamic value enum), which is
/// how heterogeneous input gets rejected.
pub trait Element: Clone {
    fn type_tag(&self) -> TypeTag;
}

macro_rules! scalar_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                fn type_tag(&self) -> TypeTag {
                    TypeTag::of::<$ty>()
                }
            }
        )*
    };
}

scalar_element!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String);

impl Element for &'static str {
    fn type_tag(&self) -> TypeTag {
        TypeTag::of::<&str>()
    }
}

impl<T: Element> Element for Rc<T> {
    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }
}

impl<T: Element> Element for Box<T> {
    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_tags_are_nominal() {
        assert_eq!(3_i32.type_tag(), TypeTag::new("i32"));
        assert_ne!(3_i32.type_tag(), 3_i64.type_tag());
        assert_eq!(String::from("a").type_tag(), TypeTag::of::<String>());
    }

    #[test]
    fn test_wrappers_forward_tag() {
        assert_eq!(Rc::new(1_u8).type_tag(), 1_u8.type_tag());
        assert_eq!(Box::new('x').type_tag(), 'x'.type_tag());
    }

    #[test]
    fn test_owned_and_borrowed_tags_compare_equal() {
        assert_eq!(TypeTag::from(String::from("Point")), TypeTag::new("Point"));
    }
}
