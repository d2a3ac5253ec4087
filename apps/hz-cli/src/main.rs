use clap::{Parser, Subcommand};
use hz_core::units::{in_btu_hr, in_feet, in_fps, in_gpm, in_temp_f};
use hz_project::{load_yaml, system_inputs};
use hz_report::SystemTrace;
use hz_system::{SizedSystem, ZoneOutcome, ZoneResult, size_system};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] hz_project::ProjectError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "hz-cli")]
#[command(about = "Hydrozone CLI - hydronic circulator sizing tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// Size every system in a project and print a summary table
    Size {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// Emit the full per-zone derivation trace as JSON
    Report {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Output JSON file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Size { project_path } => cmd_size(&project_path),
        Commands::Report {
            project_path,
            output,
        } => cmd_report(&project_path, output.as_deref()),
    }
}

fn cmd_validate(project_path: &Path) -> CliResult<()> {
    println!("Validating project: {}", project_path.display());
    load_yaml(project_path)?;
    println!("✓ Project is valid");
    Ok(())
}

fn cmd_size(project_path: &Path) -> CliResult<()> {
    let project = load_yaml(project_path)?;
    let inputs = system_inputs(&project).map_err(hz_project::ProjectError::from)?;

    for input in &inputs {
        let sized = size_system(input);
        print_system_summary(&sized);
    }
    Ok(())
}

fn cmd_report(project_path: &Path, output: Option<&Path>) -> CliResult<()> {
    let project = load_yaml(project_path)?;
    let inputs = system_inputs(&project).map_err(hz_project::ProjectError::from)?;

    let traces: Vec<SystemTrace> = inputs
        .iter()
        .map(|input| SystemTrace::from_sized(&size_system(input)))
        .collect();
    let json = serde_json::to_string_pretty(&traces)?;

    if let Some(path) = output {
        std::fs::write(path, json)?;
        println!(
            "✓ Wrote trace for {} system(s) to {}",
            traces.len(),
            path.display()
        );
    } else {
        println!("{}", json);
    }
    Ok(())
}

fn print_system_summary(sized: &SizedSystem) {
    println!(
        "System: {} ({}, supply {:.1} °F)",
        sized.name,
        sized.fluid.label(),
        in_temp_f(sized.supply_temperature)
    );
    println!(
        "  {:<16} {:>8} {:>7} {:>9} {:<10} flags",
        "zone", "gpm", "ft/s", "head ft", "binding"
    );

    for outcome in &sized.zones {
        match outcome {
            ZoneOutcome::Sized(zone) => {
                println!(
                    "  {:<16} {:>8.2} {:>7.2} {:>9.2} {:<10} {}",
                    zone.name,
                    in_gpm(zone.resolution.flow),
                    in_fps(zone.velocity),
                    in_feet(zone.head_loss_darcy),
                    zone.resolution.binding.label(),
                    zone_flags(zone),
                );
            }
            ZoneOutcome::Invalid { name, error, .. } => {
                println!("  {:<16} INVALID: {}", name, error);
            }
        }
    }

    println!(
        "  Total flow: {:.2} gpm, required head: {:.2} ft{}",
        in_gpm(sized.total_flow),
        in_feet(sized.required_head),
        match &sized.critical_zone {
            Some(name) => format!(" (critical zone: {})", name),
            None => String::new(),
        }
    );
    println!(
        "  Delivered: {:.0} BTU/hr of {:.0} BTU/hr design load",
        in_btu_hr(sized.delivered_total),
        in_btu_hr(sized.design_load)
    );
    if in_btu_hr(sized.undeliverable_total) > 0.0 {
        println!(
            "  ⚠ Undeliverable: {:.0} BTU/hr",
            in_btu_hr(sized.undeliverable_total)
        );
    }
    println!();
}

fn zone_flags(zone: &ZoneResult) -> String {
    let mut flags = Vec::new();
    if zone.check.exceeds_absolute {
        flags.push("velocity-max");
    } else if zone.check.exceeds_recommended {
        flags.push("velocity-high");
    }
    if zone.check.has_low_velocity {
        flags.push("velocity-low");
    }
    if zone.resolution.low_delta_t {
        flags.push("low-dt");
    }
    if flags.is_empty() {
        "-".to_string()
    } else {
        flags.join(",")
    }
}
