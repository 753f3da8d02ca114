//! Particle species model.
//!
//! # Responsibility
//! - Describe one species of the particle taxonomy and its process pipeline.
//! - Answer per-process-kind applicability queries.
//!
//! # Invariants
//! - `name` is unique within a catalog and never changes after construction.
//! - Identity fields (name, family, PDG code, mass, charge, short-lived flag)
//!   are immutable; only lifetime and stability may be overridden.
//! - A negative `pdg_lifetime` means the species never decays on its own.

use crate::model::process::ProcessKind;
use crate::pipeline::ProcessPipeline;
use serde::{Deserialize, Serialize};

/// Taxonomic family a species was constructed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleFamily {
    Boson,
    Lepton,
    Meson,
    Baryon,
    Ion,
    ShortLived,
}

impl ParticleFamily {
    /// All families in construction order.
    pub const ALL: [ParticleFamily; 6] = [
        ParticleFamily::Boson,
        ParticleFamily::Lepton,
        ParticleFamily::Meson,
        ParticleFamily::Baryon,
        ParticleFamily::Ion,
        ParticleFamily::ShortLived,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boson => "boson",
            Self::Lepton => "lepton",
            Self::Meson => "meson",
            Self::Baryon => "baryon",
            Self::Ion => "ion",
            Self::ShortLived => "short_lived",
        }
    }
}

/// Species name of the optical photon.
pub const OPTICAL_PHOTON: &str = "opticalphoton";
/// Species name of the generic heavy ion.
pub const GENERIC_ION: &str = "GenericIon";
/// Species name of the alpha particle.
pub const ALPHA: &str = "alpha";
/// Species name of the tritium nucleus.
pub const TRITON: &str = "triton";
/// Charged geantino, a transport-only test particle.
pub const CHARGED_GEANTINO: &str = "chargedgeantino";

/// Static identity of a species, as handed to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesDefinition {
    pub name: &'static str,
    pub family: ParticleFamily,
    pub pdg_encoding: i32,
    /// Rest mass (MeV).
    pub mass: f64,
    /// Charge in units of the elementary charge.
    pub charge: f64,
    /// Mean lifetime (ns), negative when stable.
    pub pdg_lifetime: f64,
    pub short_lived: bool,
}

/// One species registered in the catalog, owning its process pipeline.
#[derive(Debug, Clone)]
pub struct ParticleSpecies {
    name: String,
    family: ParticleFamily,
    pdg_encoding: i32,
    mass: f64,
    charge: f64,
    short_lived: bool,
    pdg_lifetime: f64,
    pdg_stable: bool,
    pipeline: ProcessPipeline,
}

impl ParticleSpecies {
    /// Creates a species with an empty pipeline.
    ///
    /// Stability is derived from the lifetime: negative lifetimes are stable.
    pub fn new(definition: &SpeciesDefinition) -> Self {
        Self {
            name: definition.name.to_string(),
            family: definition.family,
            pdg_encoding: definition.pdg_encoding,
            mass: definition.mass,
            charge: definition.charge,
            short_lived: definition.short_lived,
            pdg_lifetime: definition.pdg_lifetime,
            pdg_stable: definition.pdg_lifetime < 0.0,
            pipeline: ProcessPipeline::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> ParticleFamily {
        self.family
    }

    pub fn pdg_encoding(&self) -> i32 {
        self.pdg_encoding
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn is_short_lived(&self) -> bool {
        self.short_lived
    }

    pub fn pdg_lifetime(&self) -> f64 {
        self.pdg_lifetime
    }

    pub fn is_stable(&self) -> bool {
        self.pdg_stable
    }

    pub fn set_pdg_lifetime(&mut self, lifetime: f64) {
        self.pdg_lifetime = lifetime;
    }

    pub fn set_stable(&mut self, stable: bool) {
        self.pdg_stable = stable;
    }

    pub fn pipeline(&self) -> &ProcessPipeline {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut ProcessPipeline {
        &mut self.pipeline
    }

    pub fn is_generic_ion(&self) -> bool {
        self.name == GENERIC_ION
    }

    pub fn is_alpha(&self) -> bool {
        self.name == ALPHA
    }

    pub fn is_optical_photon(&self) -> bool {
        self.name == OPTICAL_PHOTON
    }

    /// Whether a process of `kind` may be attached to this species.
    ///
    /// Electromagnetic and extra processes are dispatched by name tables in
    /// the physics groups, so they report `true` here.
    pub fn is_applicable(&self, kind: ProcessKind) -> bool {
        match kind {
            ProcessKind::Transportation
            | ProcessKind::StepLimiter
            | ProcessKind::Electromagnetic
            | ProcessKind::Extra => true,
            ProcessKind::ParallelWorldScoring => !self.short_lived,
            ProcessKind::Scintillation => !self.is_optical_photon() && !self.short_lived,
            ProcessKind::Cerenkov => {
                self.charge != 0.0
                    && self.mass != 0.0
                    && self.name != CHARGED_GEANTINO
                    && !self.short_lived
            }
            ProcessKind::Decay => self.pdg_lifetime >= 0.0 && self.mass > 0.0,
            ProcessKind::RadioactiveDecay => self.is_generic_ion(),
            ProcessKind::Absorption
            | ProcessKind::Boundary
            | ProcessKind::Rayleigh
            | ProcessKind::WavelengthShifting => self.is_optical_photon(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ParticleFamily, ParticleSpecies, SpeciesDefinition};
    use crate::model::process::ProcessKind;

    fn species(name: &'static str, charge: f64, mass: f64, lifetime: f64) -> ParticleSpecies {
        ParticleSpecies::new(&SpeciesDefinition {
            name,
            family: ParticleFamily::Lepton,
            pdg_encoding: 0,
            mass,
            charge,
            pdg_lifetime: lifetime,
            short_lived: false,
        })
    }

    #[test]
    fn stability_follows_lifetime_sign() {
        assert!(species("e-", -1.0, 0.511, -1.0).is_stable());
        assert!(!species("mu-", -1.0, 105.66, 2196.98).is_stable());
    }

    #[test]
    fn cerenkov_requires_charge_and_mass() {
        assert!(species("e-", -1.0, 0.511, -1.0).is_applicable(ProcessKind::Cerenkov));
        assert!(!species("neutron", 0.0, 939.6, 8.8e11).is_applicable(ProcessKind::Cerenkov));
        assert!(!species("chargedgeantino", 1.0, 0.0, -1.0).is_applicable(ProcessKind::Cerenkov));
    }

    #[test]
    fn optical_photon_is_excluded_from_scintillation() {
        let photon = species("opticalphoton", 0.0, 0.0, -1.0);
        assert!(!photon.is_applicable(ProcessKind::Scintillation));
        assert!(photon.is_applicable(ProcessKind::Boundary));
        assert!(!species("e-", -1.0, 0.511, -1.0).is_applicable(ProcessKind::Boundary));
    }

    #[test]
    fn decay_requires_non_negative_lifetime() {
        assert!(!species("e-", -1.0, 0.511, -1.0).is_applicable(ProcessKind::Decay));
        assert!(species("mu-", -1.0, 105.66, 2196.98).is_applicable(ProcessKind::Decay));
    }
}
