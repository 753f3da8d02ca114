//! Production cuts: realms, regions and the engine applying them.
//!
//! # Responsibility
//! - Translate a realm name into per-species range thresholds.
//! - Apply global thresholds and the sensitive-region overrides.
//!
//! # Invariants
//! - Thresholds are non-negative lengths in canonical units.
//! - Realm selection is all-or-nothing.

pub mod engine;
pub mod realm;
pub mod region;
