//! Defaults command implementation

use anyhow::Result;
use clap::Args;

use super::utils::{render, OutputFormat};

#[derive(Args)]
pub struct DefaultsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

pub fn run(args: DefaultsArgs) -> Result<()> {
    print!("{}", render(&yaks_config::load_defaults(), args.format)?);
    Ok(())
}
