use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::matching::DEFAULT_THRESHOLD;

#[derive(Parser, Debug)]
#[command(
    name = "discmatch",
    version,
    about = "Disc-catalog deduplication and evaluation tooling"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Inventory(InventoryArgs),
    Run(RunArgs),
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InventoryArgs {
    #[arg(long, default_value = "cddb_discs.xml")]
    pub catalog_path: PathBuf,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[arg(long, default_value = "cddb_discs.xml")]
    pub catalog_path: PathBuf,

    #[arg(long, default_value = "cddb_9763_dups.xml")]
    pub ground_truth_path: PathBuf,

    #[arg(long, default_value = "matched_pairs.txt")]
    pub output_path: PathBuf,

    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    #[arg(long)]
    pub report_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[arg(long, default_value = "matched_pairs.txt")]
    pub pairs_path: PathBuf,

    #[arg(long, default_value = "cddb_9763_dups.xml")]
    pub ground_truth_path: PathBuf,
}
