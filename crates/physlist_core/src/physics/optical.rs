//! Optical photon and Cerenkov groups.
//!
//! # Responsibility
//! - Dispatch one of three scintillation instances per applicable species.
//! - Attach the optical-photon boundary family and Cerenkov emission.
//!
//! # Invariants
//! - Each scintillation variant is constructed once per build and shared by
//!   every species of its group.
//! - A species never carries more than one scintillation variant.
//!
//! Relative light yields in liquid argon: electrons and gammas are the
//! reference, alphas scintillate at 0.875 of it and nuclear recoils at 0.375.
//! The fast-component ratio is 1.0 for alphas and 0.75 for nuclear recoils;
//! electrons keep the material's own ratio.

use crate::catalog::ParticleCatalog;
use crate::model::particle::ParticleSpecies;
use crate::model::process::{
    InteractionProcess, ProcessHandle, ProcessKind, ProcessParams, ScintillationParams,
};
use crate::pipeline::{ProcessSlot, SlotOrder};

/// Scintillation group a species belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScintillationVariant {
    Default,
    Alpha,
    HeavyIon,
}

impl ScintillationVariant {
    pub fn for_species(species: &ParticleSpecies) -> Self {
        if species.is_generic_ion() {
            Self::HeavyIon
        } else if species.is_alpha() {
            Self::Alpha
        } else {
            Self::Default
        }
    }

    pub fn params(self) -> ScintillationParams {
        let (yield_factor, excitation_ratio) = match self {
            Self::Default => (1.0, None),
            Self::Alpha => (0.875, Some(1.0)),
            Self::HeavyIon => (0.375, Some(0.75)),
        };
        ScintillationParams {
            yield_factor,
            excitation_ratio,
            track_secondaries_first: true,
        }
    }

    fn process(self, verbose_level: u8) -> ProcessHandle {
        InteractionProcess::new(ProcessKind::Scintillation, "Scintillation", verbose_level)
            .with_params(ProcessParams::Scintillation(self.params()))
            .into_handle()
    }
}

/// Attaches scintillation to every applicable species and the four optical
/// processes to the optical photon.
pub fn construct_optical(catalog: &mut ParticleCatalog, verbose_level: u8) {
    let default_scint = ScintillationVariant::Default.process(verbose_level);
    let alpha_scint = ScintillationVariant::Alpha.process(verbose_level);
    let ion_scint = ScintillationVariant::HeavyIon.process(verbose_level);

    let optical_photon_processes: Vec<ProcessHandle> = [
        (ProcessKind::Absorption, "OpAbsorption"),
        (ProcessKind::Boundary, "OpBoundary"),
        (ProcessKind::Rayleigh, "OpRayleigh"),
        (ProcessKind::WavelengthShifting, "OpWLS"),
    ]
    .into_iter()
    .map(|(kind, name)| InteractionProcess::new(kind, name, verbose_level).into_handle())
    .collect();

    for species in catalog.iter_mut() {
        if species.is_applicable(ProcessKind::Scintillation) {
            let scint = match ScintillationVariant::for_species(species) {
                ScintillationVariant::HeavyIon => &ion_scint,
                ScintillationVariant::Alpha => &alpha_scint,
                ScintillationVariant::Default => &default_scint,
            };
            let pipeline = species.pipeline_mut();
            pipeline.attach(ProcessSlot::AtRest, scint, SlotOrder::Last);
            pipeline.attach(ProcessSlot::PostStep, scint, SlotOrder::Last);
        }

        if species.is_optical_photon() {
            for process in &optical_photon_processes {
                species.pipeline_mut().attach_discrete(process);
            }
        }
    }
}

/// Attaches one shared Cerenkov process wherever it applies.
pub fn construct_cerenkov(catalog: &mut ParticleCatalog, verbose_level: u8) -> usize {
    let cerenkov =
        InteractionProcess::new(ProcessKind::Cerenkov, "Cerenkov", verbose_level).into_handle();
    let mut attached = 0;
    for species in catalog.iter_mut() {
        if species.is_applicable(ProcessKind::Cerenkov) {
            species
                .pipeline_mut()
                .attach(ProcessSlot::PostStep, &cerenkov, SlotOrder::DEFAULT);
            attached += 1;
        }
    }
    attached
}
