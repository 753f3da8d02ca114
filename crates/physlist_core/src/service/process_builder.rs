//! Process-list construction use case.
//!
//! # Responsibility
//! - Run every physics group against the catalog in the fixed macro-order.
//! - Report what was constructed so callers can dump the physics list.
//!
//! # Invariants
//! - Transportation is attached first; parallel-world scoring second.
//! - Optical-only mode attaches optical and Cerenkov processes and nothing
//!   else after transportation.
//! - The tritium override runs after the decay groups.
//! - `attach_all` consumes the builder; one builder constructs one list.

use crate::catalog::ParticleCatalog;
use crate::config::{PhysicsConfig, RunEnvironment};
use crate::physics::decay::{construct_decay, construct_radioactive_decay};
use crate::physics::em::{construct_em, EmPhysicsVariant};
use crate::physics::extra::{construct_extra, ExtraPhysicsSwitches};
use crate::physics::optical::{construct_cerenkov, construct_optical};
use crate::physics::transport::{add_parallel_world_scoring, add_transportation};
use crate::physics::tritium::apply_tritium_override;
use log::{info, trace};

/// Summary of one process-list construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildReport {
    /// `None` in optical-only mode.
    pub em_variant: Option<EmPhysicsVariant>,
    pub optical_active: bool,
    pub optical_only: bool,
    pub parallel_world_scoring: bool,
    pub step_limited: Vec<String>,
    pub tritium_overridden: bool,
}

impl BuildReport {
    /// Human-readable physics-list dump, one entry per line.
    pub fn summary_lines(&self) -> Vec<String> {
        let em = match self.em_variant {
            Some(variant) => variant.label(),
            None => "none (optical only)",
        };
        let optical = if self.optical_active {
            "registered"
        } else {
            "inactive"
        };
        vec![
            format!("Electromagnetic physics: {em}"),
            format!("Optical photon physics: {optical}"),
            format!(
                "Parallel world scoring: {}",
                if self.parallel_world_scoring { "on" } else { "off" }
            ),
            format!("Step-limited species: [{}]", self.step_limited.join(", ")),
            format!(
                "Tritium decay override: {}",
                if self.tritium_overridden { "applied" } else { "skipped" }
            ),
        ]
    }
}

/// Attaches processes to every species of a catalog.
pub struct ProcessBuilder<'cfg> {
    config: &'cfg PhysicsConfig,
    environment: RunEnvironment,
}

impl<'cfg> ProcessBuilder<'cfg> {
    pub fn new(config: &'cfg PhysicsConfig, environment: RunEnvironment) -> Self {
        Self {
            config,
            environment,
        }
    }

    /// Constructs the full process list.
    ///
    /// # Contract
    /// - Must run once per catalog; a second run double-attaches.
    pub fn attach_all(self, catalog: &mut ParticleCatalog) -> BuildReport {
        let verbose = self.config.verbose_level;
        let mut report = BuildReport {
            step_limited: add_transportation(catalog, &self.config.step_limits, verbose),
            ..BuildReport::default()
        };

        if self.environment.parallel_world_count > 0 {
            add_parallel_world_scoring(catalog, verbose);
            report.parallel_world_scoring = true;
        }

        if self.config.optical_only {
            trace!("event=optical_construct module=builder mode=optical_only");
            construct_optical(catalog, verbose);
            construct_cerenkov(catalog, verbose);
            report.optical_active = true;
            report.optical_only = true;
            log_report(&report);
            return report;
        }

        let variant =
            EmPhysicsVariant::select(self.config.use_low_energy, self.config.low_energy_option);
        construct_em(catalog, variant, verbose);
        report.em_variant = Some(variant);

        construct_extra(catalog, ExtraPhysicsSwitches::all_on(), verbose);

        if self.config.construct_optical {
            trace!("event=optical_construct module=builder mode=full");
            construct_optical(catalog, verbose);
            construct_cerenkov(catalog, verbose);
            report.optical_active = true;
        } else {
            info!("event=optical_inactive module=builder");
        }

        let deexcitation = self.config.nuclear_deexcitation;
        construct_decay(catalog, verbose);
        construct_radioactive_decay(catalog, deexcitation, verbose);

        report.tritium_overridden = apply_tritium_override(catalog, deexcitation, verbose);

        log_report(&report);
        report
    }
}

fn log_report(report: &BuildReport) {
    for line in report.summary_lines() {
        info!("event=physics_list module=builder {line}");
    }
}
