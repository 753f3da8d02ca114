//! Named threshold profiles.
//!
//! # Invariants
//! - Realm names are case-sensitive: `BBdecay`, `DarkMatter`, `CosmicRays`.
//! - Every explicit threshold is a non-negative length; 0 means "produce all
//!   secondaries" and is distinct from `CutValue::Default`.

use crate::units::{CM, MM};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One threshold entry of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutValue {
    /// Explicit range threshold in canonical length.
    Length(f64),
    /// Whatever the global default cut is configured to.
    Default,
}

impl CutValue {
    pub fn resolve(self, default_cut: f64) -> f64 {
        match self {
            Self::Length(value) => value,
            Self::Default => default_cut,
        }
    }
}

/// Full set of per-species thresholds a profile defines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealmCuts {
    pub gamma: CutValue,
    pub electron: CutValue,
    pub positron: CutValue,
    pub proton: CutValue,
    pub alpha: CutValue,
    pub generic_ion: CutValue,
    pub sensitive_gamma: CutValue,
    pub sensitive_electron: CutValue,
    pub sensitive_positron: CutValue,
}

impl RealmCuts {
    /// Thresholds in force before any realm is chosen: tuned to roughly
    /// 100 keV in natural germanium, hadron and ion thresholds at zero.
    pub fn built_in() -> Self {
        let em = CutValue::Length(0.1 * MM);
        let zero = CutValue::Length(0.0);
        Self {
            gamma: em,
            electron: em,
            positron: em,
            proton: zero,
            alpha: zero,
            generic_ion: zero,
            sensitive_gamma: em,
            sensitive_electron: em,
            sensitive_positron: em,
        }
    }

    /// Profile where the sensitive region mirrors the main thresholds and
    /// hadrons and ions use the global default.
    fn uniform(gamma: f64, electron: f64, positron: f64) -> Self {
        Self {
            gamma: CutValue::Length(gamma),
            electron: CutValue::Length(electron),
            positron: CutValue::Length(positron),
            proton: CutValue::Default,
            alpha: CutValue::Default,
            generic_ion: CutValue::Default,
            sensitive_gamma: CutValue::Length(gamma),
            sensitive_electron: CutValue::Length(electron),
            sensitive_positron: CutValue::Length(positron),
        }
    }
}

/// Recognized threshold profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Realm {
    BBdecay,
    DarkMatter,
    CosmicRays,
}

impl Realm {
    pub const ALL: [Realm; 3] = [Self::BBdecay, Self::DarkMatter, Self::CosmicRays];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BBdecay => "BBdecay",
            Self::DarkMatter => "DarkMatter",
            Self::CosmicRays => "CosmicRays",
        }
    }

    pub fn cuts(self) -> RealmCuts {
        match self {
            Self::BBdecay => RealmCuts::uniform(0.1 * MM, 0.1 * MM, 0.1 * MM),
            // ~1 keV for gamma, e- and e+ in natural germanium.
            Self::DarkMatter => RealmCuts::uniform(0.005 * MM, 0.0005 * MM, 0.0005 * MM),
            Self::CosmicRays => RealmCuts {
                gamma: CutValue::Length(5.0 * CM),
                electron: CutValue::Length(1.0 * CM),
                positron: CutValue::Length(1.0 * CM),
                proton: CutValue::Length(5.0 * MM),
                alpha: CutValue::Length(5.0 * MM),
                generic_ion: CutValue::Length(5.0 * MM),
                sensitive_gamma: CutValue::Length(30.0 * MM),
                sensitive_electron: CutValue::Length(0.04 * MM),
                sensitive_positron: CutValue::Length(0.04 * MM),
            },
        }
    }
}

impl Display for Realm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for names outside the recognized realm set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRealm(pub String);

impl FromStr for Realm {
    type Err = UnknownRealm;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Realm::ALL
            .into_iter()
            .find(|realm| realm.as_str() == value)
            .ok_or_else(|| UnknownRealm(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{CutValue, Realm, RealmCuts};
    use crate::units::MM;

    #[test]
    fn parses_known_names_only() {
        assert_eq!("BBdecay".parse::<Realm>(), Ok(Realm::BBdecay));
        assert_eq!("CosmicRays".parse::<Realm>(), Ok(Realm::CosmicRays));
        assert!("bbdecay".parse::<Realm>().is_err());
        assert!("".parse::<Realm>().is_err());
    }

    #[test]
    fn default_sentinel_differs_from_zero() {
        assert_eq!(CutValue::Default.resolve(0.7), 0.7);
        assert_eq!(CutValue::Length(0.0).resolve(0.7), 0.0);
    }

    #[test]
    fn built_in_profile_has_zero_hadron_thresholds() {
        let cuts = RealmCuts::built_in();
        assert_eq!(cuts.gamma, CutValue::Length(0.1 * MM));
        assert_eq!(cuts.proton, CutValue::Length(0.0));
    }

    #[test]
    fn dark_matter_mirrors_main_values_in_sensitive_region() {
        let cuts = Realm::DarkMatter.cuts();
        assert_eq!(cuts.sensitive_gamma, cuts.gamma);
        assert_eq!(cuts.sensitive_electron, CutValue::Length(0.0005 * MM));
        assert_eq!(cuts.alpha, CutValue::Default);
    }
}
