//! Transportation, step limiting and parallel-world scoring.
//!
//! # Invariants
//! - Transportation is attached before anything else, at position 0.
//! - Parallel-world scoring is only attached once transportation is present.

use crate::catalog::ParticleCatalog;
use crate::config::StepLimitTable;
use crate::model::process::{InteractionProcess, ProcessKind, ProcessParams};
use crate::pipeline::{ProcessSlot, SlotOrder};
use log::trace;

/// Parallel world the scoring process samples.
pub const PARALLEL_WORLD_NAME: &str = "ParallelSamplingWorld";

/// Attaches transportation to every species, plus a step limiter where the
/// step-limit table requests one.
///
/// Returns the names of step-limited species.
pub fn add_transportation(
    catalog: &mut ParticleCatalog,
    step_limits: &StepLimitTable,
    verbose_level: u8,
) -> Vec<String> {
    let transportation =
        InteractionProcess::new(ProcessKind::Transportation, "Transportation", verbose_level)
            .into_handle();
    let mut limited = Vec::new();

    for species in catalog.iter_mut() {
        let pipeline = species.pipeline_mut();
        pipeline.attach(ProcessSlot::AlongStep, &transportation, SlotOrder::Position(0));
        pipeline.attach(ProcessSlot::PostStep, &transportation, SlotOrder::Position(0));

        if step_limits.limits_steps_for(species.name()) {
            let limiter =
                InteractionProcess::new(ProcessKind::StepLimiter, "StepLimiter", verbose_level)
                    .into_handle();
            species
                .pipeline_mut()
                .attach(ProcessSlot::PostStep, &limiter, SlotOrder::Last);
            trace!(
                "event=step_limit_attached module=physics particle={}",
                species.name()
            );
            limited.push(species.name().to_string());
        }
    }
    limited
}

/// Attaches one shared scoring process to every long-lived species.
///
/// Returns how many species received it.
pub fn add_parallel_world_scoring(catalog: &mut ParticleCatalog, verbose_level: u8) -> usize {
    let scoring = InteractionProcess::new(
        ProcessKind::ParallelWorldScoring,
        "ParallelWorldScoringProc",
        verbose_level,
    )
    .with_params(ProcessParams::ParallelWorld {
        world_name: PARALLEL_WORLD_NAME.to_string(),
    })
    .into_handle();

    let mut attached = 0;
    for species in catalog.iter_mut() {
        if !species.is_applicable(ProcessKind::ParallelWorldScoring) {
            continue;
        }
        let pipeline = species.pipeline_mut();
        pipeline.attach(ProcessSlot::AtRest, &scoring, SlotOrder::Last);
        pipeline.attach(ProcessSlot::AlongStep, &scoring, SlotOrder::Position(1));
        pipeline.attach(ProcessSlot::PostStep, &scoring, SlotOrder::Last);
        attached += 1;
    }
    attached
}

#[cfg(test)]
mod tests {
    use super::{add_parallel_world_scoring, add_transportation};
    use crate::catalog::ParticleCatalog;
    use crate::config::StepLimitTable;
    use crate::model::process::ProcessKind;
    use crate::pipeline::ProcessSlot;
    use crate::units::MM;

    #[test]
    fn transportation_shares_one_instance() {
        let mut catalog = ParticleCatalog::standard();
        add_transportation(&mut catalog, &StepLimitTable::new(), 0);
        let electron = catalog.find("e-").expect("e-");
        let proton = catalog.find("proton").expect("proton");
        let a = electron
            .pipeline()
            .find_first(ProcessSlot::AlongStep, ProcessKind::Transportation)
            .expect("e- transport");
        let b = proton
            .pipeline()
            .find_first(ProcessSlot::AlongStep, ProcessKind::Transportation)
            .expect("proton transport");
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn step_limiter_only_for_listed_species() {
        let mut limits = StepLimitTable::new();
        limits.set("e-", "LAr", 3.0 * MM);
        let mut catalog = ParticleCatalog::standard();
        let limited = add_transportation(&mut catalog, &limits, 0);

        assert_eq!(limited, vec!["e-".to_string()]);
        let electron = catalog.find("e-").expect("e-");
        assert_eq!(
            electron.pipeline().kinds(ProcessSlot::PostStep),
            vec![ProcessKind::Transportation, ProcessKind::StepLimiter]
        );
        let positron = catalog.find("e+").expect("e+");
        assert_eq!(
            positron
                .pipeline()
                .count_kind(ProcessSlot::PostStep, ProcessKind::StepLimiter),
            0
        );
    }

    #[test]
    fn scoring_sits_right_after_transportation() {
        let mut catalog = ParticleCatalog::standard();
        add_transportation(&mut catalog, &StepLimitTable::new(), 0);
        add_parallel_world_scoring(&mut catalog, 0);

        let muon = catalog.find("mu-").expect("mu-");
        assert_eq!(
            muon.pipeline().kinds(ProcessSlot::AlongStep),
            vec![ProcessKind::Transportation, ProcessKind::ParallelWorldScoring]
        );
        let rho = catalog.find("rho0").expect("rho0");
        assert_eq!(
            rho.pipeline()
                .count_kind(ProcessSlot::AlongStep, ProcessKind::ParallelWorldScoring),
            0
        );
    }
}
