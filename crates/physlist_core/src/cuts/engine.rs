//! Production-cut configuration engine.
//!
//! # Responsibility
//! - Hold the active realm thresholds and push them into the threshold table.
//! - Override thresholds in the sensitive region when the geometry has one.
//!
//! # Invariants
//! - A rejected realm name leaves every threshold untouched.
//! - `apply` always rewrites all six global thresholds and, when the
//!   sensitive region exists, all six of its thresholds.
//! - Hadron and ion thresholds inside the sensitive region always equal the
//!   global default cut.

use crate::config::PhysicsConfig;
use crate::cuts::realm::{Realm, RealmCuts};
use crate::cuts::region::{ProductionCuts, RegionStore, SENSITIVE_REGION};
use crate::units::{EV, GEV};
use log::{error, info, trace};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lower edge of the production energy table.
pub const PRODUCTION_ENERGY_MIN: f64 = 250.0 * EV;
/// Upper edge of the production energy table.
pub const PRODUCTION_ENERGY_MAX: f64 = 100.0 * GEV;

pub const GAMMA: &str = "gamma";
pub const ELECTRON: &str = "e-";
pub const POSITRON: &str = "e+";
pub const PROTON: &str = "proton";
pub const ALPHA: &str = "alpha";
pub const GENERIC_ION: &str = "GenericIon";

/// Species that carry production thresholds, in dump order.
pub const CUT_SPECIES: [&str; 6] = [GAMMA, ELECTRON, POSITRON, PROTON, ALPHA, GENERIC_ION];

pub type CutResult<T> = Result<T, CutConfigError>;

/// Cut configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CutConfigError {
    InvalidRealm(String),
}

impl Display for CutConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRealm(name) => {
                let known: Vec<&str> = Realm::ALL.iter().map(|realm| realm.as_str()).collect();
                write!(
                    f,
                    "invalid energy cut realm `{name}`; expected one of {}",
                    known.join("|")
                )
            }
        }
    }
}

impl Error for CutConfigError {}

/// Global threshold table consumed by secondary-production logic.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionCutsTable {
    cuts: BTreeMap<String, f64>,
    energy_range: (f64, f64),
}

impl Default for ProductionCutsTable {
    fn default() -> Self {
        Self {
            cuts: BTreeMap::new(),
            energy_range: (PRODUCTION_ENERGY_MIN, PRODUCTION_ENERGY_MAX),
        }
    }
}

impl ProductionCutsTable {
    pub fn set_cut_value(&mut self, value: f64, species: &str) {
        self.cuts.insert(species.to_string(), value);
    }

    pub fn cut_value(&self, species: &str) -> Option<f64> {
        self.cuts.get(species).copied()
    }

    pub fn set_energy_range(&mut self, low: f64, high: f64) {
        self.energy_range = (low, high);
    }

    /// `(low, high)` production energy bounds.
    pub fn energy_range(&self) -> (f64, f64) {
        self.energy_range
    }
}

/// Maps realms to thresholds and applies them.
#[derive(Debug, Clone)]
pub struct CutConfigurationEngine {
    default_cut: f64,
    active: RealmCuts,
    realm: Option<Realm>,
    table: ProductionCutsTable,
}

impl CutConfigurationEngine {
    /// Creates the engine and applies the built-in thresholds.
    pub fn new<R: RegionStore + ?Sized>(config: &PhysicsConfig, regions: &mut R) -> Self {
        let mut engine = Self {
            default_cut: config.default_cut_value,
            active: RealmCuts::built_in(),
            realm: None,
            table: ProductionCutsTable::default(),
        };
        engine.apply(regions);
        engine
    }

    /// Selects a realm by name and applies it.
    ///
    /// # Errors
    /// - `InvalidRealm` for unknown names; prior thresholds stay in force.
    pub fn apply_realm<R: RegionStore + ?Sized>(
        &mut self,
        name: &str,
        regions: &mut R,
    ) -> CutResult<Realm> {
        let realm: Realm = name.parse().map_err(|_| {
            error!("event=realm_rejected module=cuts realm={name:?}");
            CutConfigError::InvalidRealm(name.to_string())
        })?;

        info!("event=realm_applied module=cuts realm={realm}");
        self.realm = Some(realm);
        self.active = realm.cuts();
        self.apply(regions);
        self.log_summary();
        Ok(realm)
    }

    /// Pushes the active thresholds into the global table and, when the
    /// geometry has more than one region, into the sensitive region.
    pub fn apply<R: RegionStore + ?Sized>(&mut self, regions: &mut R) {
        let default_cut = self.default_cut;
        let cuts = self.active;

        self.table
            .set_energy_range(PRODUCTION_ENERGY_MIN, PRODUCTION_ENERGY_MAX);
        self.table.set_cut_value(cuts.gamma.resolve(default_cut), GAMMA);
        self.table.set_cut_value(cuts.electron.resolve(default_cut), ELECTRON);
        self.table.set_cut_value(cuts.positron.resolve(default_cut), POSITRON);
        self.table.set_cut_value(cuts.proton.resolve(default_cut), PROTON);
        self.table.set_cut_value(cuts.alpha.resolve(default_cut), ALPHA);
        self.table
            .set_cut_value(cuts.generic_ion.resolve(default_cut), GENERIC_ION);

        if regions.region_count() > 1 {
            if let Some(region) = regions.region_mut(SENSITIVE_REGION) {
                trace!("event=region_cuts module=cuts region={SENSITIVE_REGION}");
                let overrides = region
                    .production_cuts
                    .get_or_insert_with(ProductionCuts::new);
                overrides.set_production_cut(cuts.sensitive_gamma.resolve(default_cut), GAMMA);
                overrides
                    .set_production_cut(cuts.sensitive_electron.resolve(default_cut), ELECTRON);
                overrides
                    .set_production_cut(cuts.sensitive_positron.resolve(default_cut), POSITRON);
                overrides.set_production_cut(default_cut, PROTON);
                overrides.set_production_cut(default_cut, ALPHA);
                overrides.set_production_cut(default_cut, GENERIC_ION);
            }
        }
        trace!("event=production_cuts_set module=cuts");
    }

    pub fn active_realm(&self) -> Option<Realm> {
        self.realm
    }

    pub fn default_cut(&self) -> f64 {
        self.default_cut
    }

    pub fn table(&self) -> &ProductionCutsTable {
        &self.table
    }

    /// Threshold dump, one species per line, in millimetres.
    pub fn summary_lines(&self) -> Vec<String> {
        let realm = self.realm.map_or("built-in", Realm::as_str);
        let mut lines = vec![format!("Realm: {realm}")];
        for species in CUT_SPECIES {
            let value = self.table.cut_value(species).unwrap_or(self.default_cut);
            lines.push(format!("{species:<10} {value} mm"));
        }
        lines
    }

    /// Logs `summary_lines` at summary level.
    pub fn log_summary(&self) {
        for line in self.summary_lines() {
            info!("event=cut_summary module=cuts {line}");
        }
    }
}
