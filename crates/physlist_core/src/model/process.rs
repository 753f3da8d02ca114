//! Interaction process model.
//!
//! # Responsibility
//! - Define the process record attached to species pipelines.
//! - Give every instance a stable identity so shared attachments are traceable.
//!
//! # Invariants
//! - `kind` is the only field used to match processes (never `name`).
//! - Processes are immutable once wrapped in a `ProcessHandle`; sharing an
//!   instance across species means cloning the handle, not the record.

use crate::config::NuclearDeexcitationParams;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Stable identity of one process instance.
pub type ProcessId = Uuid;

/// Shared handle to an attached process instance.
pub type ProcessHandle = Arc<InteractionProcess>;

/// Closed set of process kinds known to the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessKind {
    Transportation,
    Electromagnetic,
    Extra,
    Decay,
    RadioactiveDecay,
    StepLimiter,
    Scintillation,
    Absorption,
    Boundary,
    Rayleigh,
    WavelengthShifting,
    Cerenkov,
    ParallelWorldScoring,
}

impl ProcessKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transportation => "transportation",
            Self::Electromagnetic => "electromagnetic",
            Self::Extra => "extra",
            Self::Decay => "decay",
            Self::RadioactiveDecay => "radioactive_decay",
            Self::StepLimiter => "step_limiter",
            Self::Scintillation => "scintillation",
            Self::Absorption => "absorption",
            Self::Boundary => "boundary",
            Self::Rayleigh => "rayleigh",
            Self::WavelengthShifting => "wavelength_shifting",
            Self::Cerenkov => "cerenkov",
            Self::ParallelWorldScoring => "parallel_world_scoring",
        }
    }

    /// Decay-family kinds, i.e. processes that end a particle's life at rest.
    pub fn is_decay_family(self) -> bool {
        matches!(self, Self::Decay | Self::RadioactiveDecay)
    }
}

/// Scintillation light-yield parameters of one scintillation instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScintillationParams {
    /// Yield relative to the material's reference yield.
    pub yield_factor: f64,
    /// Fraction of the fast component; `None` keeps the material default.
    pub excitation_ratio: Option<f64>,
    pub track_secondaries_first: bool,
}

/// Kind-specific numeric parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProcessParams {
    None,
    Scintillation(ScintillationParams),
    ParallelWorld { world_name: String },
    /// Name of the electromagnetic model set driving this process.
    EmModel { model: String },
    Deexcitation(NuclearDeexcitationParams),
}

/// A named behavior instance attachable to pipeline slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionProcess {
    pub id: ProcessId,
    pub name: String,
    pub kind: ProcessKind,
    pub verbose_level: u8,
    pub params: ProcessParams,
}

impl InteractionProcess {
    /// Creates a process with a fresh identity and no parameters.
    pub fn new(kind: ProcessKind, name: impl Into<String>, verbose_level: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            verbose_level,
            params: ProcessParams::None,
        }
    }

    pub fn with_params(mut self, params: ProcessParams) -> Self {
        self.params = params;
        self
    }

    /// Wraps the record into a shareable handle.
    pub fn into_handle(self) -> ProcessHandle {
        Arc::new(self)
    }

    pub fn scintillation_params(&self) -> Option<&ScintillationParams> {
        match &self.params {
            ProcessParams::Scintillation(params) => Some(params),
            _ => None,
        }
    }
}
