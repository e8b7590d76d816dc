use crate::types::Unit;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Length Converter - convert between metres, millimetres, miles and feet
#[derive(Parser, Debug)]
#[command(name = "lengthtui")]
#[command(about = "Convert lengths between metres, millimetres, miles and feet")]
#[command(version)]
pub struct Cli {
    /// Configuration file with the default unit selections (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file. Without it the interactive screen logs nothing.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive converter screen (default)
    Tui,
    /// Convert a single value and print the result
    Convert {
        /// Value to convert, e.g. 12.5
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Source unit (metre, millimetre, mile, foot)
        #[arg(short, long)]
        from: Unit,
        /// Target unit (metre, millimetre, mile, foot)
        #[arg(short, long)]
        to: Unit,
        /// Print the conversion as JSON
        #[arg(long)]
        json: bool,
    },
    /// List supported units and their factors
    Units,
    /// Write a configuration file with default settings
    InitConfig {
        /// Where to write the configuration
        path: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
