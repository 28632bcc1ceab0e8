//! yaks-config: inspect the run configuration a YAKS test run would use

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
