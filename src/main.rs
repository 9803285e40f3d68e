use anyhow::Result;
use clap::Parser;

use edit_log::cli::CliArgs;

fn main() -> Result<()> {
    edit_log::tracing::init();

    let args = CliArgs::parse();
    let report = args.command.execute()?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
