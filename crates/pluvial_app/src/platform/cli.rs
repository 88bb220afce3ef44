use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::logging::LogDestination;

/// Estimate how much rainwater a roof can harvest in a year.
#[derive(Debug, Parser)]
#[command(name = "pluvial")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory for preferences and the share fallback file.
    #[arg(long, global = true, default_value = ".pluvial")]
    pub state_dir: PathBuf,

    /// Where log output goes.
    #[arg(long, global = true, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one calculation and print the result
    Estimate {
        /// Collection surface in m² (`,` or `.` as decimal separator)
        #[arg(long, allow_hyphen_values = true)]
        surface: String,

        /// Annual rainfall in mm
        #[arg(long, allow_hyphen_values = true)]
        rainfall: String,

        /// Runoff coefficient, see `pluvial roofs`
        #[arg(long, allow_hyphen_values = true)]
        coefficient: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List roof types and their runoff coefficients
    Roofs,

    /// Show the water-availability zones
    Map {
        /// Viewport width in pixels, selects the zoom level
        #[arg(long, default_value_t = 1024)]
        width: u32,
    },
}
