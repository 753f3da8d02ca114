//! Explicit physics-list configuration.
//!
//! # Responsibility
//! - Carry every knob the builder and the cut engine read, passed by
//!   reference at construction time instead of through process-wide state.
//! - Load from JSON with every field optional.
//!
//! # Invariants
//! - `default_cut_value` is a non-negative length in canonical units.
//! - Step limits stored in `StepLimitTable` are non-negative.

use crate::command::StepLimitCommand;
use crate::units::MM;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Global default production cut (0.1 mm).
pub const DEFAULT_CUT_VALUE: f64 = 0.1 * MM;

/// Step limits keyed by particle name, then volume name (canonical length).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepLimitTable {
    entries: BTreeMap<String, BTreeMap<String, f64>>,
}

impl StepLimitTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, particle: impl Into<String>, volume: impl Into<String>, limit: f64) {
        self.entries
            .entry(particle.into())
            .or_default()
            .insert(volume.into(), limit);
    }

    /// Records one parsed `<particle> <volume> <value> <unit>` command.
    pub fn apply_command(&mut self, command: &StepLimitCommand) {
        self.set(
            command.particle.clone(),
            command.volume.clone(),
            command.step_size,
        );
    }

    /// Whether `particle` has any positive limit in any volume.
    pub fn limits_steps_for(&self, particle: &str) -> bool {
        self.entries
            .get(particle)
            .is_some_and(|volumes| volumes.values().any(|limit| *limit > 0.0))
    }

    pub fn limit(&self, particle: &str, volume: &str) -> Option<f64> {
        self.entries.get(particle)?.get(volume).copied()
    }

    /// Tightest positive limit any particle requested inside `volume`.
    pub fn max_step_for_volume(&self, volume: &str) -> Option<f64> {
        self.entries
            .values()
            .filter_map(|volumes| volumes.get(volume).copied())
            .filter(|limit| *limit > 0.0)
            .reduce(f64::min)
    }

    /// Every `(particle, volume, limit)` entry, sorted by particle then volume.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.entries.iter().flat_map(|(particle, volumes)| {
            volumes
                .iter()
                .map(move |(volume, limit)| (particle.as_str(), volume.as_str(), *limit))
        })
    }

    pub fn particles(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Nuclear de-excitation switches forwarded to radioactive decay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NuclearDeexcitationParams {
    pub correlated_gamma: bool,
    pub two_j_max: u32,
    pub store_ic_level_data: bool,
}

impl NuclearDeexcitationParams {
    /// Enables gamma angular correlations up to `max_two_j`; 0 disables.
    pub fn set_use_angular_correlation(&mut self, max_two_j: u32) {
        self.correlated_gamma = max_two_j != 0;
        self.two_j_max = max_two_j;
    }

    pub fn set_store_ic_level_data(&mut self, store: bool) {
        self.store_ic_level_data = store;
    }
}

/// Configuration read by the process builder and the cut engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Verbosity stamped on every constructed process.
    pub verbose_level: u8,
    /// Global default production cut (canonical length).
    pub default_cut_value: f64,
    pub use_low_energy: bool,
    /// 0 selects the default low-energy variant, 1-6 the alternates.
    pub low_energy_option: i32,
    pub construct_optical: bool,
    pub optical_only: bool,
    /// Realm applied after construction, when set.
    pub realm: Option<String>,
    pub step_limits: StepLimitTable,
    pub nuclear_deexcitation: NuclearDeexcitationParams,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            verbose_level: 0,
            default_cut_value: DEFAULT_CUT_VALUE,
            use_low_energy: true,
            low_energy_option: 0,
            construct_optical: false,
            optical_only: false,
            realm: None,
            step_limits: StepLimitTable::new(),
            nuclear_deexcitation: NuclearDeexcitationParams::default(),
        }
    }
}

impl PhysicsConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_cut_value.is_nan() || self.default_cut_value < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "default_cut_value must be non-negative, got {}",
                self.default_cut_value
            )));
        }
        for (particle, volume, limit) in self.step_limits.iter() {
            if !limit.is_finite() || limit < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "step limit for `{particle}` in `{volume}` must be non-negative, got {limit}"
                )));
            }
        }
        Ok(())
    }
}

/// Environment facts supplied by the run manager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunEnvironment {
    pub parallel_world_count: usize,
}

/// Configuration loading errors.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read configuration: {err}"),
            Self::Json(err) => write!(f, "failed to parse configuration: {err}"),
            Self::Invalid(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
