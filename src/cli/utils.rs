//! Shared CLI helpers

use anyhow::Result;
use clap::ValueEnum;
use yaks_config::RunConfig;

/// How `show` and `defaults` print the resolved configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Render a run configuration in the shape the loader reads back.
pub fn render(run_config: &RunConfig, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(run_config)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(run_config)?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}
