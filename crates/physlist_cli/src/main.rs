//! Physics-list dump entry point.
//!
//! # Responsibility
//! - Load an optional JSON configuration, build the process list and apply
//!   production cuts.
//! - Print every species' pipeline followed by the threshold table.
//!
//! Usage:
//! `physlist_cli [config.json] [--realm=NAME] [--parallel-worlds=N] ["--step-limit=e- LAr 3 mm"]`

use log::error;
use physlist_core::{
    init_stderr_logging, parse_step_limit, CutConfigurationEngine, InMemoryRegionStore,
    ParticleCatalog, PhysicsConfig, ProcessBuilder, RunEnvironment, SENSITIVE_REGION,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Default)]
struct CliArgs {
    config_path: Option<PathBuf>,
    realm: Option<String>,
    parallel_worlds: usize,
    step_limits: Vec<String>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    for arg in args {
        if let Some(val) = arg.strip_prefix("--realm=") {
            parsed.realm = Some(val.to_string());
        } else if let Some(val) = arg.strip_prefix("--parallel-worlds=") {
            parsed.parallel_worlds = val
                .parse()
                .map_err(|_| format!("invalid --parallel-worlds value `{val}`"))?;
        } else if let Some(val) = arg.strip_prefix("--step-limit=") {
            parsed.step_limits.push(val.to_string());
        } else if arg.starts_with("--") {
            return Err(format!("unknown option `{arg}`"));
        } else {
            parsed.config_path = Some(PathBuf::from(arg));
        }
    }
    Ok(parsed)
}

fn run(args: CliArgs) -> Result<(), String> {
    let mut config = match &args.config_path {
        Some(path) => PhysicsConfig::from_json_file(path).map_err(|err| err.to_string())?,
        None => PhysicsConfig::default(),
    };

    let level = if config.verbose_level > 1 { "trace" } else { "info" };
    init_stderr_logging(level)?;

    for raw in &args.step_limits {
        let command = parse_step_limit(raw).map_err(|err| err.to_string())?;
        config.step_limits.apply_command(&command);
    }
    if args.realm.is_some() {
        config.realm = args.realm;
    }

    let mut catalog = ParticleCatalog::standard();
    let environment = RunEnvironment {
        parallel_world_count: args.parallel_worlds,
    };
    let report = ProcessBuilder::new(&config, environment).attach_all(&mut catalog);

    let mut regions = InMemoryRegionStore::with_world();
    regions.add_region(SENSITIVE_REGION);
    let mut cuts = CutConfigurationEngine::new(&config, &mut regions);
    if let Some(realm) = &config.realm {
        cuts.apply_realm(realm, &mut regions)
            .map_err(|err| err.to_string())?;
    }

    for species in catalog.iter() {
        println!("== {} ==", species.name());
        print!("{}", species.pipeline().describe());
    }
    println!();
    for line in report.summary_lines() {
        println!("{line}");
    }
    for line in cuts.summary_lines() {
        println!("{line}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let outcome = parse_args(std::env::args().skip(1)).and_then(run);
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_failed module=cli error={message:?}");
            eprintln!("physlist_cli: {message}");
            ExitCode::FAILURE
        }
    }
}
