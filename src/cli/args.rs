//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::parser::DEFAULT_DELIMITER;

/// Course catalog planner: ordered course records with menu-driven listing
/// and prerequisite lookup
#[derive(Parser, Debug)]
#[command(name = "coursecat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Course data file
    #[arg(value_hint = ValueHint::FilePath, default_value = "courses.txt")]
    pub file: PathBuf,

    /// Course code to seed the lookup prompt with (not queried automatically)
    pub code: Option<String>,

    /// Field delimiter
    #[arg(long, default_value_t = DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// Enable debug logging (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<clap_complete::Shell>,

    /// Print author and version
    #[arg(long)]
    pub info: bool,
}
