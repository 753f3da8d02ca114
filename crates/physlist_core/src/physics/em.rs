//! Electromagnetic physics variants.
//!
//! # Responsibility
//! - Resolve the `(use_low_energy, low_energy_option)` pair to one variant.
//! - Attach the variant's processes to every species it covers.
//!
//! # Invariants
//! - Exactly one variant is constructed per process-list build.
//! - Unknown options resolve to `Livermore` and are only logged at trace level.

use crate::catalog::ParticleCatalog;
use crate::model::particle::{ParticleFamily, ParticleSpecies, CHARGED_GEANTINO};
use crate::model::process::{InteractionProcess, ProcessHandle, ProcessKind, ProcessParams};
use crate::pipeline::{ProcessSlot, SlotOrder, ORDER_DEFAULT};
use log::trace;
use serde::{Deserialize, Serialize};

/// Electromagnetic model set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmPhysicsVariant {
    Standard,
    Option1,
    Option2,
    Option3,
    Option4,
    Penelope,
    LivermorePolarized,
    Livermore,
}

impl EmPhysicsVariant {
    /// Selects the variant for one configuration.
    ///
    /// With `use_low_energy == false` the option is ignored.
    pub fn select(use_low_energy: bool, low_energy_option: i32) -> Self {
        if !use_low_energy {
            trace!("event=em_variant_selected module=physics variant=standard");
            return Self::Standard;
        }
        let variant = match low_energy_option {
            1 => Self::Option1,
            2 => Self::Option2,
            3 => Self::Option3,
            4 => Self::Option4,
            5 => Self::Penelope,
            6 => Self::LivermorePolarized,
            0 => Self::Livermore,
            other => {
                trace!(
                    "event=em_option_fallback module=physics option={} variant=livermore",
                    other
                );
                Self::Livermore
            }
        };
        trace!(
            "event=em_variant_selected module=physics variant={}",
            variant.label()
        );
        variant
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Option1 => "StandardOption1",
            Self::Option2 => "StandardOption2",
            Self::Option3 => "StandardOption3",
            Self::Option4 => "StandardOption4",
            Self::Penelope => "Penelope",
            Self::LivermorePolarized => "LivermorePolarized",
            Self::Livermore => "Livermore",
        }
    }

    /// Precision variants add gamma Rayleigh scattering.
    pub fn has_gamma_rayleigh(self) -> bool {
        matches!(
            self,
            Self::Option3
                | Self::Option4
                | Self::Penelope
                | Self::LivermorePolarized
                | Self::Livermore
        )
    }
}

/// Processes of one species group with `(along_step, post_step, at_rest)` orders.
type EmEntry = (&'static str, Option<u32>, Option<u32>, Option<u32>);

const GAMMA: &[EmEntry] = &[
    ("phot", None, Some(ORDER_DEFAULT), None),
    ("compt", None, Some(ORDER_DEFAULT), None),
    ("conv", None, Some(ORDER_DEFAULT), None),
];
const ELECTRON: &[EmEntry] = &[
    ("msc", Some(1), Some(1), None),
    ("eIoni", Some(2), Some(2), None),
    ("eBrem", None, Some(3), None),
];
const POSITRON: &[EmEntry] = &[
    ("msc", Some(1), Some(1), None),
    ("eIoni", Some(2), Some(2), None),
    ("eBrem", None, Some(3), None),
    ("annihil", None, Some(5), Some(5)),
];
const MUON: &[EmEntry] = &[
    ("msc", Some(1), Some(1), None),
    ("muIoni", Some(2), Some(2), None),
    ("muBrems", None, Some(3), None),
    ("muPairProd", None, Some(4), None),
];
const HADRON: &[EmEntry] = &[
    ("msc", Some(1), Some(1), None),
    ("hIoni", Some(2), Some(2), None),
];
const ION: &[EmEntry] = &[
    ("msc", Some(1), Some(1), None),
    ("ionIoni", Some(2), Some(2), None),
];

fn entries_for(species: &ParticleSpecies) -> &'static [EmEntry] {
    match species.name() {
        "gamma" => GAMMA,
        "e-" => ELECTRON,
        "e+" => POSITRON,
        "mu-" | "mu+" => MUON,
        _ if species.is_short_lived() => &[],
        _ if species.family() == ParticleFamily::Ion => ION,
        name if species.charge() != 0.0 && species.mass() > 0.0 && name != CHARGED_GEANTINO => {
            HADRON
        }
        _ => &[],
    }
}

fn em_process(name: &str, variant: EmPhysicsVariant, verbose_level: u8) -> ProcessHandle {
    InteractionProcess::new(ProcessKind::Electromagnetic, name, verbose_level)
        .with_params(ProcessParams::EmModel {
            model: variant.label().to_string(),
        })
        .into_handle()
}

/// Attaches `variant` to every covered species. Returns the attachment count.
pub fn construct_em(
    catalog: &mut ParticleCatalog,
    variant: EmPhysicsVariant,
    verbose_level: u8,
) -> usize {
    let mut attached = 0;
    for species in catalog.iter_mut() {
        let entries = entries_for(species);
        let is_gamma = species.name() == "gamma";
        let pipeline = species.pipeline_mut();
        for (name, along, post, at_rest) in entries {
            let process = em_process(name, variant, verbose_level);
            if let Some(position) = at_rest {
                pipeline.attach(ProcessSlot::AtRest, &process, SlotOrder::Position(*position));
            }
            if let Some(position) = along {
                pipeline.attach(ProcessSlot::AlongStep, &process, SlotOrder::Position(*position));
            }
            if let Some(position) = post {
                pipeline.attach(ProcessSlot::PostStep, &process, SlotOrder::Position(*position));
            }
            attached += 1;
        }
        if is_gamma && variant.has_gamma_rayleigh() {
            pipeline.attach_discrete(&em_process("Rayl", variant, verbose_level));
            attached += 1;
        }
    }
    attached
}

#[cfg(test)]
mod tests {
    use super::{construct_em, EmPhysicsVariant};
    use crate::catalog::ParticleCatalog;
    use crate::model::process::ProcessKind;
    use crate::pipeline::ProcessSlot;

    #[test]
    fn standard_ignores_option() {
        for option in 0..=7 {
            assert_eq!(EmPhysicsVariant::select(false, option), EmPhysicsVariant::Standard);
        }
    }

    #[test]
    fn options_map_to_enumerated_variants() {
        assert_eq!(EmPhysicsVariant::select(true, 0), EmPhysicsVariant::Livermore);
        assert_eq!(EmPhysicsVariant::select(true, 1), EmPhysicsVariant::Option1);
        assert_eq!(EmPhysicsVariant::select(true, 4), EmPhysicsVariant::Option4);
        assert_eq!(EmPhysicsVariant::select(true, 5), EmPhysicsVariant::Penelope);
        assert_eq!(EmPhysicsVariant::select(true, 6), EmPhysicsVariant::LivermorePolarized);
    }

    #[test]
    fn unknown_option_falls_back_to_livermore() {
        assert_eq!(EmPhysicsVariant::select(true, 42), EmPhysicsVariant::Livermore);
        assert_eq!(EmPhysicsVariant::select(true, -3), EmPhysicsVariant::Livermore);
    }

    #[test]
    fn livermore_adds_gamma_rayleigh_and_standard_does_not() {
        let mut low_energy = ParticleCatalog::standard();
        construct_em(&mut low_energy, EmPhysicsVariant::Livermore, 0);
        let gamma = low_energy.find("gamma").expect("gamma");
        assert!(gamma.pipeline().names(ProcessSlot::PostStep).contains(&"Rayl"));

        let mut standard = ParticleCatalog::standard();
        construct_em(&mut standard, EmPhysicsVariant::Standard, 0);
        let gamma = standard.find("gamma").expect("gamma");
        assert!(!gamma.pipeline().names(ProcessSlot::PostStep).contains(&"Rayl"));
    }

    #[test]
    fn neutral_and_short_lived_species_get_no_em_processes() {
        let mut catalog = ParticleCatalog::standard();
        construct_em(&mut catalog, EmPhysicsVariant::Standard, 0);
        for name in ["neutron", "nu_e", "delta++", "chargedgeantino", "opticalphoton"] {
            let species = catalog.find(name).expect("species exists");
            assert_eq!(
                species.pipeline().count_kind(ProcessSlot::PostStep, ProcessKind::Electromagnetic),
                0,
                "{name} should carry no EM process"
            );
        }
    }

    #[test]
    fn positron_annihilates_at_rest() {
        let mut catalog = ParticleCatalog::standard();
        construct_em(&mut catalog, EmPhysicsVariant::Option4, 0);
        let positron = catalog.find("e+").expect("e+");
        assert_eq!(positron.pipeline().names(ProcessSlot::AtRest), vec!["annihil"]);
        assert_eq!(
            positron.pipeline().names(ProcessSlot::AlongStep),
            vec!["msc", "eIoni"]
        );
    }
}
