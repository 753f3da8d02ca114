//! Tritium decay override.
//!
//! # Responsibility
//! - Give the triton its measured mean lifetime and mark it unstable.
//! - Swap any generic decay process for radioactive decay.
//!
//! # Invariants
//! - Runs after the general decay pass, so the generic decay process to be
//!   removed already exists when it applies.
//! - A missing triton, or a triton without a generic decay process, is a
//!   no-op for that part, never an error.

use crate::catalog::ParticleCatalog;
use crate::config::NuclearDeexcitationParams;
use crate::model::particle::TRITON;
use crate::model::process::ProcessKind;
use crate::physics::decay::radioactive_decay_process;
use crate::pipeline::{ProcessSlot, SlotOrder};
use crate::units::SECOND;
use log::trace;

/// Tritium half-life in years (NuDat 2.5).
pub const TRITIUM_HALF_LIFE_YEARS: f64 = 12.32;

/// Ordering of the radioactive-decay process attached to the triton.
pub const TRITIUM_DECAY_ORDER: u32 = 1000;

/// Mean lifetime derived from the half-life, in canonical time units.
pub fn tritium_mean_lifetime() -> f64 {
    TRITIUM_HALF_LIFE_YEARS * std::f64::consts::LN_2 * 365.0 * 86400.0 * SECOND
}

/// Applies the override. Returns `false` when no triton is registered.
pub fn apply_tritium_override(
    catalog: &mut ParticleCatalog,
    deexcitation: NuclearDeexcitationParams,
    verbose_level: u8,
) -> bool {
    let Some(triton) = catalog.find_mut(TRITON) else {
        trace!("event=tritium_override module=physics status=skipped reason=not_registered");
        return false;
    };

    triton.set_pdg_lifetime(tritium_mean_lifetime());
    triton.set_stable(false);

    let pipeline = triton.pipeline_mut();
    let generic_decay = pipeline
        .find_first(ProcessSlot::AtRest, ProcessKind::Decay)
        .map(|process| process.id);
    if let Some(id) = generic_decay {
        pipeline.remove_process(id);
    }

    let process = radioactive_decay_process(deexcitation, verbose_level);
    pipeline.attach_rest_discrete(&process, SlotOrder::Position(TRITIUM_DECAY_ORDER));

    trace!(
        "event=tritium_override module=physics status=ok removed_generic_decay={}",
        generic_decay.is_some()
    );
    true
}

#[cfg(test)]
mod tests {
    use super::{apply_tritium_override, tritium_mean_lifetime};
    use crate::catalog::ParticleCatalog;
    use crate::config::NuclearDeexcitationParams;
    use crate::model::particle::{ParticleFamily, SpeciesDefinition};
    use crate::model::process::ProcessKind;
    use crate::physics::decay::construct_decay;
    use crate::pipeline::ProcessSlot;
    use crate::units::SECOND;

    fn decaying_triton_catalog() -> ParticleCatalog {
        let mut catalog = ParticleCatalog::new();
        catalog.register(&SpeciesDefinition {
            name: "triton",
            family: ParticleFamily::Ion,
            pdg_encoding: 1_000_010_030,
            mass: 2808.921,
            charge: 1.0,
            pdg_lifetime: 1.0,
            short_lived: false,
        });
        catalog
    }

    #[test]
    fn lifetime_matches_half_life_in_seconds() {
        let seconds = tritium_mean_lifetime() / SECOND;
        let expected = 12.32 * 2.0_f64.ln() * 365.0 * 86400.0;
        assert!((seconds - expected).abs() < 1e-3);
    }

    #[test]
    fn replaces_generic_decay_with_radioactive_decay() {
        let mut catalog = decaying_triton_catalog();
        construct_decay(&mut catalog, 0);
        assert_eq!(
            catalog
                .find("triton")
                .expect("triton")
                .pipeline()
                .count_kind(ProcessSlot::AtRest, ProcessKind::Decay),
            1
        );

        assert!(apply_tritium_override(&mut catalog, NuclearDeexcitationParams::default(), 0));

        let triton = catalog.find("triton").expect("triton");
        assert_eq!(
            triton.pipeline().kinds(ProcessSlot::AtRest),
            vec![ProcessKind::RadioactiveDecay]
        );
        assert_eq!(
            triton.pipeline().kinds(ProcessSlot::PostStep),
            vec![ProcessKind::RadioactiveDecay]
        );
        assert!(!triton.is_stable());
    }

    #[test]
    fn missing_triton_is_a_no_op() {
        let mut catalog = ParticleCatalog::new();
        assert!(!apply_tritium_override(&mut catalog, NuclearDeexcitationParams::default(), 0));
    }
}
