//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;

/// Drive a headless tree-select picker from a command script.
#[derive(Debug, Parser)]
#[command(name = "treeselect", version)]
pub struct Args {
    /// Host document (config, treeData, value) as JSON. Defaults to the bundled demo tree.
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Command script. Reads stdin when omitted.
    pub script: Option<PathBuf>,

    /// Log file path.
    #[arg(long, default_value = "treeselect.log")]
    pub log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}
