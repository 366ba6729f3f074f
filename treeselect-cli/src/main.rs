mod cli;
mod document;
mod script;

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::Parser;
use simplelog::{Config, WriteLogger};

use cli::Args;
use document::HostDocument;
use script::Session;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_file = File::create(&args.log_file)
        .with_context(|| format!("Failed to create log file {}", args.log_file.display()))?;
    WriteLogger::init(args.log_level, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let document = match &args.data {
        Some(path) => HostDocument::load(path)?,
        None => HostDocument::demo()?,
    };
    log::info!(
        "Loaded {} root nodes ({:?})",
        document.tree_data.len(),
        document.config.selection_mode()
    );
    let picker = document.into_picker()?;

    let stdout = io::stdout().lock();
    let mut session = Session::new(picker, stdout);
    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            session.run(BufReader::new(file))?;
        }
        None => session.run(io::stdin().lock())?,
    }
    Ok(())
}
