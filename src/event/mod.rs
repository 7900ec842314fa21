//! Change notifications.
//!
//! # DELIVERY INVARIANT
//! Publication is synchronous: every matching subscriber has run, in
//! subscription order, before the mutating call that triggered it returns.
//! Errors are never delivered through this channel.

pub mod change;
pub mod publisher;

pub use change::*;
pub use publisher::*;
