//! Decay and radioactive-decay groups.

use crate::catalog::ParticleCatalog;
use crate::config::NuclearDeexcitationParams;
use crate::model::process::{InteractionProcess, ProcessHandle, ProcessKind, ProcessParams};
use crate::pipeline::SlotOrder;
use log::trace;

/// Builds a radioactive-decay instance carrying the de-excitation switches.
pub fn radioactive_decay_process(
    deexcitation: NuclearDeexcitationParams,
    verbose_level: u8,
) -> ProcessHandle {
    InteractionProcess::new(ProcessKind::RadioactiveDecay, "RadioactiveDecay", verbose_level)
        .with_params(ProcessParams::Deexcitation(deexcitation))
        .into_handle()
}

/// Attaches one shared generic decay process to every decaying species.
pub fn construct_decay(catalog: &mut ParticleCatalog, verbose_level: u8) -> usize {
    let decay = InteractionProcess::new(ProcessKind::Decay, "Decay", verbose_level).into_handle();
    let mut attached = 0;
    for species in catalog.iter_mut() {
        if species.is_applicable(ProcessKind::Decay) {
            species
                .pipeline_mut()
                .attach_rest_discrete(&decay, SlotOrder::DEFAULT);
            attached += 1;
        }
    }
    trace!("event=decay_constructed module=physics species={}", attached);
    attached
}

/// Attaches radioactive decay to the generic ion.
pub fn construct_radioactive_decay(
    catalog: &mut ParticleCatalog,
    deexcitation: NuclearDeexcitationParams,
    verbose_level: u8,
) -> usize {
    let process = radioactive_decay_process(deexcitation, verbose_level);
    let mut attached = 0;
    for species in catalog.iter_mut() {
        if species.is_applicable(ProcessKind::RadioactiveDecay) {
            species
                .pipeline_mut()
                .attach_rest_discrete(&process, SlotOrder::DEFAULT);
            attached += 1;
        }
    }
    trace!(
        "event=radioactive_decay module=physics species={} gamma_corr={} two_j_max={} ic_data={}",
        attached,
        deexcitation.correlated_gamma,
        deexcitation.two_j_max,
        deexcitation.store_ic_level_data
    );
    attached
}

#[cfg(test)]
mod tests {
    use super::{construct_decay, construct_radioactive_decay};
    use crate::catalog::ParticleCatalog;
    use crate::config::NuclearDeexcitationParams;
    use crate::model::process::{ProcessKind, ProcessParams};
    use crate::pipeline::ProcessSlot;

    #[test]
    fn decay_skips_stable_species() {
        let mut catalog = ParticleCatalog::standard();
        construct_decay(&mut catalog, 0);
        let muon = catalog.find("mu+").expect("mu+");
        assert_eq!(muon.pipeline().count_kind(ProcessSlot::AtRest, ProcessKind::Decay), 1);
        assert_eq!(muon.pipeline().count_kind(ProcessSlot::PostStep, ProcessKind::Decay), 1);
        let electron = catalog.find("e-").expect("e-");
        assert!(electron.pipeline().is_empty());
    }

    #[test]
    fn radioactive_decay_only_on_generic_ion() {
        let mut catalog = ParticleCatalog::standard();
        let mut deexcitation = NuclearDeexcitationParams::default();
        deexcitation.set_store_ic_level_data(true);
        let attached = construct_radioactive_decay(&mut catalog, deexcitation, 0);
        assert_eq!(attached, 1);

        let ion = catalog.find("GenericIon").expect("GenericIon");
        let process = ion
            .pipeline()
            .find_first(ProcessSlot::AtRest, ProcessKind::RadioactiveDecay)
            .expect("radioactive decay attached");
        assert_eq!(process.params, ProcessParams::Deexcitation(deexcitation));
    }
}
