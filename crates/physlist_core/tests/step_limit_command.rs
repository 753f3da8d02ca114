use physlist_core::units::{CM, MM, UM};
use physlist_core::{parse_step_limit, CommandParseError, PhysicsConfig, StepLimitTable};

#[test]
fn electron_in_liquid_argon_parses_to_three_millimetres() {
    let command = parse_step_limit("e- LAr 3 mm").expect("valid command");
    assert_eq!(command.particle, "e-");
    assert_eq!(command.volume, "LAr");
    assert_eq!(command.step_size, 3.0 * MM);
}

#[test]
fn unit_scales_value_into_canonical_length() {
    assert_eq!(
        parse_step_limit("proton Detector 2 cm")
            .expect("valid command")
            .step_size,
        2.0 * CM
    );
    assert_eq!(
        parse_step_limit("alpha Source 50 um")
            .expect("valid command")
            .step_size,
        50.0 * UM
    );
}

#[test]
fn malformed_commands_are_rejected() {
    assert_eq!(
        parse_step_limit("e- LAr 3").expect_err("three fields"),
        CommandParseError::FieldCount(3)
    );
    assert_eq!(
        parse_step_limit("e- LAr three mm").expect_err("non-numeric value"),
        CommandParseError::InvalidNumber("three".to_string())
    );
    assert_eq!(
        parse_step_limit("e- LAr 3 MeV").expect_err("energy unit"),
        CommandParseError::UnknownUnit("MeV".to_string())
    );
    assert!(matches!(
        parse_step_limit("e- LAr -1 mm").expect_err("negative value"),
        CommandParseError::NegativeValue(_)
    ));
}

#[test]
fn commands_fill_the_step_limit_table() {
    let mut table = StepLimitTable::new();
    for raw in ["e- LAr 3 mm", "mu- LAr 1 mm", "e- Shield 0 mm"] {
        table.apply_command(&parse_step_limit(raw).expect("valid command"));
    }

    assert!(table.limits_steps_for("e-"));
    assert!(table.limits_steps_for("mu-"));
    assert!(!table.limits_steps_for("e+"));
    assert_eq!(table.limit("e-", "LAr"), Some(3.0 * MM));
    assert_eq!(table.max_step_for_volume("LAr"), Some(1.0 * MM));
    assert_eq!(table.max_step_for_volume("Shield"), None);

    let config = PhysicsConfig {
        step_limits: table,
        ..PhysicsConfig::default()
    };
    assert_eq!(config.step_limits.particles().collect::<Vec<_>>(), vec!["e-", "mu-"]);
}

#[test]
fn long_unit_names_are_accepted() {
    let command = parse_step_limit("e- LAr 3 millimeter").expect("valid command");
    assert_eq!(command.step_size, 3.0 * MM);
    assert_eq!(
        parse_step_limit("mu- Shield 2 centimeter")
            .expect("valid command")
            .step_size,
        2.0 * CM
    );
}
