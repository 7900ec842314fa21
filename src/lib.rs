pub mod collection;
pub mod element;
pub mod error;
pub mod event;
pub mod options;
pub mod telemetry;

pub use collection::{AsSequence, TypedCollection};
pub use element::{Element, TypeTag};
pub use error::{CollectionError, Result};
pub use event::{Change, ChangeKind, ChangePublisher, SubscriptionId};
pub use options::Options;
