//! crt - CRT geometry command line tool
//!
//! Evaluates the distortion/correction chain for single coordinates, builds
//! ST maps for whole frames, and converts parameter presets between formats.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "crt")]
#[command(author, version, about = "CRT geometry distortion and correction")]
#[command(long_about = "
Evaluates CRT beam-deflection distortion and geometry correction.

Examples:
  crt eval 0.5 0.5 --trapezoid 0.1 --corner 0.05 --s-h 0.1 --s-v 0.1
  crt eval -0.8 0.6 --theta 1.2 --magnetic 0.5
  crt eval 0.3 0.9 --preset tv.slangp --linear --stages
  crt map -W 640 -H 480 --preset tv.slangp -o st.json
  crt preset tv.slangp --format json
  crt preset tv.yaml -o tv.slangp
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a single square-space coordinate
    #[command(visible_alias = "e")]
    Eval(EvalArgs),

    /// Build an ST map for a pixel grid
    #[command(visible_alias = "m")]
    Map(MapArgs),

    /// Show or convert a preset file
    #[command(visible_alias = "p")]
    Preset(PresetArgs),
}

/// Chain parameters, optionally seeded from a preset file.
#[derive(Args, Debug, Clone, Default)]
struct GeometryArgs {
    /// Preset file (.json, .yaml, .slangp); flags below override it
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Deflection half-angle in radians (enables distortion simulation)
    #[arg(long, allow_negative_numbers = true)]
    theta: Option<f32>,

    /// Use the non-linear deflection model
    #[arg(long)]
    nonlinear: bool,

    /// Use the linear deflection model, overriding the preset
    #[arg(long, conflicts_with = "nonlinear")]
    linear: bool,

    /// Magnetic correction strength (typically 0.3-0.7)
    #[arg(long, allow_negative_numbers = true)]
    magnetic: Option<f32>,

    /// Trapezoid strength
    #[arg(short, long, allow_negative_numbers = true)]
    trapezoid: Option<f32>,

    /// Corner correction strength
    #[arg(short, long, allow_negative_numbers = true)]
    corner: Option<f32>,

    /// Horizontal S-correction strength
    #[arg(long = "s-h", allow_negative_numbers = true)]
    s_h: Option<f32>,

    /// Vertical S-correction strength
    #[arg(long = "s-v", allow_negative_numbers = true)]
    s_v: Option<f32>,
}

#[derive(Args)]
struct EvalArgs {
    /// X coordinate in square space
    #[arg(allow_negative_numbers = true)]
    x: f32,

    /// Y coordinate in square space
    #[arg(allow_negative_numbers = true)]
    y: f32,

    #[command(flatten)]
    geometry: GeometryArgs,

    /// Print every intermediate stage
    #[arg(short, long)]
    stages: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct MapArgs {
    /// Grid width in pixels
    #[arg(short = 'W', long)]
    width: u32,

    /// Grid height in pixels
    #[arg(short = 'H', long)]
    height: u32,

    #[command(flatten)]
    geometry: GeometryArgs,

    /// Output JSON file for the map
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct PresetArgs {
    /// Preset file
    input: PathBuf,

    /// Output format for stdout: kv, json, yaml
    #[arg(short, long, default_value = "kv")]
    format: String,

    /// Write the preset to this file instead (format from extension)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn setup_logging(verbose: u8) -> Result<()> {
    let base_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(base_level))
        .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Logger initialization failed: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Eval(args) => commands::eval::run(args, cli.verbose),
        Commands::Map(args) => commands::map::run(args, cli.verbose),
        Commands::Preset(args) => commands::preset::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_eval_overrides() {
        let cli = Cli::try_parse_from([
            "crt", "eval", "-0.5", "0.25", "--preset", "tv.slangp", "--linear", "-t", "-0.1",
        ])
        .unwrap();
        let Commands::Eval(args) = cli.command else {
            panic!("expected eval");
        };
        assert_eq!(args.x, -0.5);
        assert!(args.geometry.linear);
        assert!(!args.geometry.nonlinear);
        assert_eq!(args.geometry.trapezoid, Some(-0.1));
    }

    #[test]
    fn test_linear_conflicts_with_nonlinear() {
        let res = Cli::try_parse_from(["crt", "eval", "0", "0", "--linear", "--nonlinear"]);
        assert!(res.is_err());
    }
}
