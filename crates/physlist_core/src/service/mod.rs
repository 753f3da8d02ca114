//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate physics groups into one process-list construction.

pub mod process_builder;
