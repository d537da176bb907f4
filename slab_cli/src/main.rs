//! # Slabcheck CLI
//!
//! Runs the slab check from the command line. Configuration is layered:
//! reference defaults, then an optional JSON config file, then flags.
//!
//! ```text
//! slab_cli                          # reference slab
//! slab_cli --thrust 5 --stations 50
//! slab_cli run --config slab.json --json
//! slab_cli init slab.json           # write the reference config as a template
//! ```
//!
//! Exit status is 0 when the slab is safe, 2 when it needs a redesign and 1
//! on any error.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::{debug, error};

use slab_core::report::{render_detailed, render_summary};
use slab_core::{analyze, load_config, save_config, CalcError, CalcResult, SlabConfig, SlabResult};

/// Bending stress, mass and factor of safety for a tapered cantilever slab
#[derive(Parser, Debug)]
#[command(name = "slab_cli")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,

    /// Increase log output (-v info, -vv debug); SLAB_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a slab (default)
    Run(RunArgs),

    /// Write the reference configuration to a JSON file
    Init {
        /// Destination file
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
struct RunArgs {
    /// JSON config file; missing fields take reference values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Thrust at the free end (N)
    #[arg(long)]
    thrust: Option<f64>,

    /// Material density (kg/m^3)
    #[arg(long)]
    density: Option<f64>,

    /// Slab length (m)
    #[arg(long)]
    length: Option<f64>,

    /// Yield strength (Pa)
    #[arg(long = "yield-stress")]
    yield_stress: Option<f64>,

    /// Number of stations, both ends included
    #[arg(long)]
    stations: Option<usize>,

    /// Print the full result (including diagram series) as JSON
    #[arg(long)]
    json: bool,

    /// Print inputs and a per-station table before the summary
    #[arg(long, conflicts_with = "json")]
    detailed: bool,
}

impl RunArgs {
    /// Defaults, then config file, then flags.
    fn resolve(&self) -> CalcResult<SlabConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SlabConfig::default(),
        };

        if let Some(thrust) = self.thrust {
            config.thrust_n = thrust;
        }
        if let Some(density) = self.density {
            config.density_kg_m3 = density;
        }
        if let Some(length) = self.length {
            config.geometry.length_m = length;
        }
        if let Some(yield_stress) = self.yield_stress {
            config.yield_stress_pa = yield_stress;
        }
        if let Some(stations) = self.stations {
            config.stations = stations;
        }

        debug!("Resolved config: {:?}", config);
        Ok(config)
    }
}

fn init_logger(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("SLAB_LOG", default_level))
        .format_timestamp(None)
        .init();
}

/// 0 when safe, 2 when a redesign is required
fn exit_status(result: &SlabResult) -> u8 {
    if result.passes() {
        0
    } else {
        2
    }
}

fn run(args: &RunArgs) -> CalcResult<SlabResult> {
    let config = args.resolve()?;
    let result = analyze(&config)?;

    if args.json {
        let json = serde_json::to_string_pretty(&result).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;
        println!("{}", json);
    } else if args.detailed {
        print!("{}", render_detailed(&result));
    } else {
        print!("{}", render_summary(&result));
    }

    Ok(result)
}

fn init_config(path: &Path, force: bool) -> CalcResult<()> {
    if path.exists() && !force {
        return Err(CalcError::file_error(
            "create",
            path.display().to_string(),
            "file already exists (use --force to overwrite)",
        ));
    }
    save_config(&SlabConfig::default(), path)?;
    println!("Wrote reference configuration to {}", path.display());
    Ok(())
}

fn report_error(err: &CalcError, as_json: bool) {
    error!("{} ({})", err, err.error_code());
    eprintln!("Error: {}", err);
    if as_json {
        if let Ok(json) = serde_json::to_string_pretty(err) {
            eprintln!("{}", json);
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Some(Commands::Init { path, force }) => match init_config(&path, force) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                report_error(&e, false);
                ExitCode::FAILURE
            }
        },
        Some(Commands::Run(args)) => finish(&args),
        None => finish(&cli.run),
    }
}

fn finish(args: &RunArgs) -> ExitCode {
    match run(args) {
        Ok(result) => ExitCode::from(exit_status(&result)),
        Err(e) => {
            report_error(&e, args.json);
            ExitCode::FAILURE
        }
    }
}
