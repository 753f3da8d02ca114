//! Domain model for species and the processes attached to them.
//!
//! # Responsibility
//! - Define the species record that owns a process pipeline.
//! - Define the process record and its kind taxonomy.
//!
//! # Invariants
//! - Process matching is done by `ProcessKind`, never by display name.
//! - Species identity never changes after catalog construction.

pub mod particle;
pub mod process;
