use thiserror::Error;

use crate::element::TypeTag;

pub type Result<T> = std::result::Result<T, CollectionError>;

/// Every failure a collection operation can report.
///
/// Errors are returned before any structural change is applied, so a failed
/// call always leaves the collection exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// Neither an explicit `type` option nor a seed element was given.
    #[error("no type given")]
    Configuration,

    #[error("invalid type: expected `{expected}`, found `{found}` at position {position}")]
    TypeMismatch {
        expected: TypeTag,
        found: TypeTag,
        position: usize,
    },

    /// A `concat` argument could not be turned into a sequence.
    #[error("invalid argument at position {position}: not a sequence")]
    InvalidArgument { position: usize },

    #[error("read only: `{property}`")]
    ImmutableProperty { property: &'static str },

    #[error("reduce of empty collection with no initial value")]
    EmptyCollection,
}

impl CollectionError {
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, CollectionError::TypeMismatch { .. })
    }
}
