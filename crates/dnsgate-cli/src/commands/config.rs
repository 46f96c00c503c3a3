//! `dnsgate config`: inspect configuration values.

use crate::{cli::ConfigCommands, config::AppConfig, error::CliResult, output::OutputManager};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            output.data(&config.get(&key)?)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.data(&config.to_toml()?)?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}
