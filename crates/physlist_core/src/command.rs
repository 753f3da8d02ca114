//! Parsing helpers for the textual configuration surface.
//!
//! # Responsibility
//! - Split step-limit commands of the shape `<particle> <volume> <value> <unit>`.
//! - Scale the numeric value by its unit into canonical length.
//!
//! # Invariants
//! - Fields are whitespace separated and strictly positional.
//! - Only length units are accepted for step limits.
//! - Parsed step sizes are finite and non-negative.

use crate::units::{length_unit, symbols_for, UnitCategory};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static STEP_LIMIT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\S+)\s+(\S+)\s+(\S+)\s+(\S+)\s*$").expect("step limit pattern is valid")
});

/// Parsed step-limit command.
#[derive(Debug, Clone, PartialEq)]
pub struct StepLimitCommand {
    pub particle: String,
    pub volume: String,
    /// Limit in canonical length units.
    pub step_size: f64,
}

/// Parses `<particle> <volume> <value> <unit>`.
///
/// # Errors
/// - `FieldCount` when the string does not have exactly four fields.
/// - `InvalidNumber` when the value is not a finite number.
/// - `NegativeValue` when the value is below zero.
/// - `UnknownUnit` when the unit is not a length unit.
pub fn parse_step_limit(raw: &str) -> Result<StepLimitCommand, CommandParseError> {
    let captures = STEP_LIMIT_PATTERN
        .captures(raw)
        .ok_or_else(|| CommandParseError::FieldCount(raw.split_whitespace().count()))?;

    let value_text = &captures[3];
    let value: f64 = value_text
        .parse()
        .map_err(|_| CommandParseError::InvalidNumber(value_text.to_string()))?;
    if !value.is_finite() {
        return Err(CommandParseError::InvalidNumber(value_text.to_string()));
    }
    if value < 0.0 {
        return Err(CommandParseError::NegativeValue(value));
    }

    let unit = &captures[4];
    let scale = length_unit(unit).ok_or_else(|| CommandParseError::UnknownUnit(unit.to_string()))?;

    Ok(StepLimitCommand {
        particle: captures[1].to_string(),
        volume: captures[2].to_string(),
        step_size: value * scale,
    })
}

/// Particle field of a step-limit command.
pub fn particle_name(raw: &str) -> Result<String, CommandParseError> {
    parse_step_limit(raw).map(|command| command.particle)
}

/// Volume field of a step-limit command.
pub fn volume_name(raw: &str) -> Result<String, CommandParseError> {
    parse_step_limit(raw).map(|command| command.volume)
}

/// Unit-scaled step size of a step-limit command.
pub fn step_size(raw: &str) -> Result<f64, CommandParseError> {
    parse_step_limit(raw).map(|command| command.step_size)
}

/// Step-limit command parse errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandParseError {
    FieldCount(usize),
    InvalidNumber(String),
    NegativeValue(f64),
    UnknownUnit(String),
}

impl Display for CommandParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldCount(count) => write!(
                f,
                "expected `<particle> <volume> <value> <unit>`, got {count} fields"
            ),
            Self::InvalidNumber(value) => write!(f, "step value is not a number: {value}"),
            Self::NegativeValue(value) => write!(f, "step value must be non-negative: {value}"),
            Self::UnknownUnit(unit) => write!(
                f,
                "unknown length unit `{unit}`; expected one of {}",
                symbols_for(UnitCategory::Length).join("|")
            ),
        }
    }
}

impl Error for CommandParseError {}

#[cfg(test)]
mod tests {
    use super::{parse_step_limit, particle_name, step_size, volume_name, CommandParseError};
    use crate::units::{CM, MM};

    #[test]
    fn parses_electron_limit_in_liquid_argon() {
        let command = parse_step_limit("e- LAr 3 mm").expect("valid command");
        assert_eq!(command.particle, "e-");
        assert_eq!(command.volume, "LAr");
        assert_eq!(command.step_size, 3.0 * MM);
    }

    #[test]
    fn field_helpers_extract_each_part() {
        assert_eq!(particle_name("mu+ Shield 1.5 cm").expect("particle"), "mu+");
        assert_eq!(volume_name("mu+ Shield 1.5 cm").expect("volume"), "Shield");
        assert_eq!(step_size("mu+ Shield 1.5 cm").expect("step"), 1.5 * CM);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let command = parse_step_limit("  gamma\tWorld   2e-1 m \n").expect("valid command");
        assert_eq!(command.step_size, 200.0 * MM);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = parse_step_limit("e- LAr 3").expect_err("missing unit must fail");
        assert_eq!(err, CommandParseError::FieldCount(3));
    }

    #[test]
    fn rejects_non_length_unit() {
        let err = parse_step_limit("e- LAr 3 keV").expect_err("energy unit must fail");
        assert_eq!(err, CommandParseError::UnknownUnit("keV".to_string()));
        assert!(err.to_string().contains("mm"));
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(matches!(
            parse_step_limit("e- LAr three mm"),
            Err(CommandParseError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_step_limit("e- LAr -1 mm"),
            Err(CommandParseError::NegativeValue(_))
        ));
        assert!(matches!(
            parse_step_limit("e- LAr inf mm"),
            Err(CommandParseError::InvalidNumber(_))
        ));
    }
}
