//! Show command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::{render, OutputFormat};
use yaks_config::config::DEFAULT_CONFIG_FILE;
use yaks_config::load_config;

#[derive(Args)]
pub struct ShowArgs {
    /// Config file to load; a missing file means defaults
    #[arg(value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let run_config = load_config(&args.path)
        .with_context(|| format!("Failed loading config from {}", args.path.display()))?;

    print!("{}", render(&run_config, args.format)?);
    Ok(())
}
