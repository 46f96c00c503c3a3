//! Implementation of the `dnsgate record-types` command.

use dnsgate_core::domain::RecordType;

use crate::{
    cli::{ListFormat, RecordTypesArgs},
    error::{CliResult, serialise_error},
    output::OutputManager,
};

pub fn execute(args: RecordTypesArgs, output: OutputManager) -> CliResult<()> {
    match args.format {
        ListFormat::List => {
            for record_type in RecordType::ALL {
                output.data(record_type.as_str())?;
            }
        }
        ListFormat::Json => {
            let json = serde_json::to_string(&RecordType::ALL)
                .map_err(|e| serialise_error("record types", e))?;
            output.data(&json)?;
        }
    }

    Ok(())
}
