//! Core domain logic for the physics-list builder.
//! This crate owns process attachment order, production cuts and the
//! step-limit command grammar.

pub mod catalog;
pub mod command;
pub mod config;
pub mod cuts;
pub mod logging;
pub mod model;
pub mod physics;
pub mod pipeline;
pub mod service;
pub mod units;

pub use catalog::ParticleCatalog;
pub use command::{parse_step_limit, CommandParseError, StepLimitCommand};
pub use config::{
    ConfigError, NuclearDeexcitationParams, PhysicsConfig, RunEnvironment, StepLimitTable,
};
pub use cuts::engine::{CutConfigError, CutConfigurationEngine, CutResult, ProductionCutsTable};
pub use cuts::realm::{CutValue, Realm, RealmCuts};
pub use cuts::region::{
    InMemoryRegionStore, ProductionCuts, Region, RegionStore, SENSITIVE_REGION,
};
pub use logging::{init_logging, init_stderr_logging, logging_status};
pub use model::particle::{ParticleFamily, ParticleSpecies, SpeciesDefinition};
pub use model::process::{
    InteractionProcess, ProcessHandle, ProcessId, ProcessKind, ProcessParams,
};
pub use physics::em::EmPhysicsVariant;
pub use physics::optical::ScintillationVariant;
pub use pipeline::{ProcessPipeline, ProcessSlot, SlotOrder};
pub use service::process_builder::{BuildReport, ProcessBuilder};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
