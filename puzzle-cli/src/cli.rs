//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Puzzle solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc2019", about = "Run the 2019 puzzle solvers", version)]
pub struct Args {
    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Input file to use instead of the one in the input directory
    #[arg(short, long, requires = "day")]
    pub input: Option<PathBuf>,

    /// Directory holding per-day input files (dayNN.txt)
    #[arg(long, default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
