use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tslint-junit",
    version,
    about = "Render lint violation reports as JUnit XML for CI systems"
)]
pub struct Cli {
    /// JSON file containing an array of violation records (stdin when omitted)
    pub input: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}
