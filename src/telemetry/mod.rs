//! Change telemetry.
//!
//! # SAFETY INVARIANT
//! Telemetry is a READ-ONLY side-effect layer. The collection never reads it;
//! it exists for observability and verification only.
//!
//! # PRIVACY INVARIANT
//! Records carry kinds, counts and lengths. Never element content.

pub mod metrics;
pub mod record;
pub mod recorder;
