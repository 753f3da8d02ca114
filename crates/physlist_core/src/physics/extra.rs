//! Extra electromagnetic-nuclear group: synchrotron radiation, gamma-nuclear
//! and muon-nuclear interactions.

use crate::catalog::ParticleCatalog;
use crate::model::process::{InteractionProcess, ProcessKind};

/// Switches of the extra group. The builder turns every one on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraPhysicsSwitches {
    pub synchrotron: bool,
    pub gamma_nuclear: bool,
    pub muon_nuclear: bool,
}

impl ExtraPhysicsSwitches {
    pub fn all_on() -> Self {
        Self {
            synchrotron: true,
            gamma_nuclear: true,
            muon_nuclear: true,
        }
    }
}

/// Attaches the enabled extra processes as discrete processes.
pub fn construct_extra(
    catalog: &mut ParticleCatalog,
    switches: ExtraPhysicsSwitches,
    verbose_level: u8,
) -> usize {
    let mut attached = 0;
    for species in catalog.iter_mut() {
        let name = match species.name() {
            "e-" | "e+" if switches.synchrotron => "SynRad",
            "gamma" if switches.gamma_nuclear => "photonNuclear",
            "mu-" | "mu+" if switches.muon_nuclear => "muonNuclear",
            _ => continue,
        };
        let process =
            InteractionProcess::new(ProcessKind::Extra, name, verbose_level).into_handle();
        species.pipeline_mut().attach_discrete(&process);
        attached += 1;
    }
    attached
}
