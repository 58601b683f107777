use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::pooling::DEFAULT_FINAL_VOLUME;
use crate::pooling::table::parse_final_volume;

fn final_volume_arg(raw: &str) -> Result<f64, std::convert::Infallible> {
    Ok(parse_final_volume(raw))
}

#[derive(Debug, Parser)]
#[command(
    name = "kira-poolcalc",
    version,
    about = "Equimolar pooling calculator for NGS library pools"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
    Pools(PoolsArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(
        long,
        help = "Pool table (.tsv/.csv, optionally .gz); built-in example when omitted"
    )]
    pub input: Option<PathBuf>,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[arg(
        long,
        default_value_t = DEFAULT_FINAL_VOLUME,
        value_parser = final_volume_arg,
        allow_negative_numbers = true,
        help = "Desired final pool volume (µl); 0 or non-numeric means 400"
    )]
    pub final_volume: f64,

    #[arg(
        long,
        default_value_t = false,
        help = "Do not scale volumes to use up the limiting pool"
    )]
    pub no_maximize: bool,

    #[arg(
        long,
        default_value_t = false,
        help = "Use measured concentrations where given (non-zero)"
    )]
    pub use_measured: bool,

    #[arg(long, help = "Pool id to leave out (repeatable)")]
    pub exclude: Vec<u32>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(
        long,
        default_value_t = false,
        help = "Abort when validation reports any issue"
    )]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Pool table (.tsv/.csv, optionally .gz)")]
    pub input: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = DEFAULT_FINAL_VOLUME,
        value_parser = final_volume_arg,
        allow_negative_numbers = true
    )]
    pub final_volume: f64,

    #[arg(long, default_value_t = false)]
    pub use_measured: bool,
}

#[derive(Debug, Args)]
pub struct PoolsArgs {
    #[command(subcommand)]
    pub command: PoolsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PoolsCommand {
    Show(PoolsShowArgs),
}

#[derive(Debug, Args)]
pub struct PoolsShowArgs {
    #[arg(long, help = "Pool table to list instead of the built-in example")]
    pub input: Option<PathBuf>,
}
