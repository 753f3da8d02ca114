//! Unit system shared by thresholds, step limits and lifetimes.
//!
//! # Invariants
//! - Canonical length unit is the millimetre (`MM == 1.0`).
//! - Canonical energy unit is the MeV, canonical time unit the nanosecond.
//! - Multiplying a number by a unit constant yields a canonical quantity.

pub const MM: f64 = 1.0;
pub const NM: f64 = 1e-6 * MM;
pub const UM: f64 = 1e-3 * MM;
pub const CM: f64 = 10.0 * MM;
pub const M: f64 = 1000.0 * MM;
pub const KM: f64 = 1000.0 * M;

pub const MEV: f64 = 1.0;
pub const EV: f64 = 1e-6 * MEV;
pub const KEV: f64 = 1e-3 * MEV;
pub const GEV: f64 = 1e3 * MEV;
pub const TEV: f64 = 1e6 * MEV;

pub const NS: f64 = 1.0;
pub const US: f64 = 1e3 * NS;
pub const MS: f64 = 1e6 * NS;
pub const SECOND: f64 = 1e9 * NS;

/// Physical dimension a unit symbol belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    Length,
    Energy,
    Time,
}

const UNIT_TABLE: &[(&str, UnitCategory, f64)] = &[
    ("nm", UnitCategory::Length, NM),
    ("um", UnitCategory::Length, UM),
    ("mm", UnitCategory::Length, MM),
    ("cm", UnitCategory::Length, CM),
    ("m", UnitCategory::Length, M),
    ("km", UnitCategory::Length, KM),
    ("eV", UnitCategory::Energy, EV),
    ("keV", UnitCategory::Energy, KEV),
    ("MeV", UnitCategory::Energy, MEV),
    ("GeV", UnitCategory::Energy, GEV),
    ("TeV", UnitCategory::Energy, TEV),
    ("ns", UnitCategory::Time, NS),
    ("us", UnitCategory::Time, US),
    ("ms", UnitCategory::Time, MS),
    ("s", UnitCategory::Time, SECOND),
];

/// Long unit names accepted in macros, mapped to their symbol.
const UNIT_ALIASES: &[(&str, &str)] = &[
    ("nanometer", "nm"),
    ("micrometer", "um"),
    ("millimeter", "mm"),
    ("centimeter", "cm"),
    ("meter", "m"),
    ("kilometer", "km"),
    ("electronvolt", "eV"),
    ("kiloelectronvolt", "keV"),
    ("megaelectronvolt", "MeV"),
    ("gigaelectronvolt", "GeV"),
    ("teraelectronvolt", "TeV"),
    ("nanosecond", "ns"),
    ("microsecond", "us"),
    ("millisecond", "ms"),
    ("second", "s"),
];

/// Looks up a unit symbol or long name, returning its category and
/// canonical scale.
///
/// Symbols are case-sensitive (`mm` and `MeV`, never `MM` or `mev`).
pub fn lookup_unit(symbol: &str) -> Option<(UnitCategory, f64)> {
    let symbol = UNIT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == symbol)
        .map_or(symbol, |(_, target)| *target);
    UNIT_TABLE
        .iter()
        .find(|(name, _, _)| *name == symbol)
        .map(|(_, category, scale)| (*category, *scale))
}

/// Returns the canonical scale of a length unit symbol.
pub fn length_unit(symbol: &str) -> Option<f64> {
    match lookup_unit(symbol) {
        Some((UnitCategory::Length, scale)) => Some(scale),
        _ => None,
    }
}

/// Symbols accepted for one category, in table order.
pub fn symbols_for(category: UnitCategory) -> Vec<&'static str> {
    UNIT_TABLE
        .iter()
        .filter(|(_, c, _)| *c == category)
        .map(|(name, _, _)| *name)
        .collect()
}
