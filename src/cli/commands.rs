//! CLI command definitions

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "crmtidy")]
#[command(about = "Clean and enrich Sector/Category in CRM CSV exports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill Sector and Category from each row's Tags column
    #[command(alias = "clean")]
    Classify {
        /// CSV file to classify
        #[arg(value_name = "FILE", required_unless_present = "file")]
        path: Option<PathBuf>,

        /// CSV file to classify (alternative to the positional argument)
        #[arg(long, conflicts_with = "path")]
        file: Option<PathBuf>,

        /// TOML file replacing the built-in rule tables
        #[arg(long, value_name = "TOML")]
        rules: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Copy Sector and Category from a master organisation list onto a target file
    #[command(alias = "enrich")]
    Reconcile {
        /// Master CSV with the correct Sector/Category per organisation
        #[arg(long)]
        master: PathBuf,

        /// Target CSV to enrich, matched on its Organisation column
        #[arg(long)]
        target: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output path (default: next to the input with a _cleaned/_enriched suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Field delimiter for input and output (e.g. ';' or '\t')
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,

    /// Report counts without writing a file
    #[arg(long)]
    pub dry_run: bool,
}
