//! Implementation of the `dnsgate validate` command.

use serde_json::{Value, json};
use tracing::{debug, instrument};

use dnsgate_adapters::{LocalFilesystem, YamlManifestParser};
use dnsgate_core::application::{ResourceReport, ValidationReport, ValidationService};

use crate::{
    cli::{ReportFormat, ValidateArgs},
    config::AppConfig,
    error::{CliError, CliResult, serialise_error},
    output::OutputManager,
};

/// Validate every `DNSEndpoint` under the given paths and print a report.
///
/// Fails with [`CliError::ResourcesRejected`] after printing when any
/// resource is rejected.
#[instrument(skip_all, fields(paths = args.paths.len()))]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = config.validation_options(args.all_errors);
    let format = args
        .format
        .unwrap_or_else(|| ReportFormat::from_config(&config.output.format));
    debug!(?options, ?format, "Validation options resolved");

    let service = ValidationService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(YamlManifestParser::new()),
        options,
    );
    let report = service.validate_paths(&args.paths)?;

    match format {
        ReportFormat::Table => print_table(&report, &output)?,
        ReportFormat::Json => {
            let rendered = serde_json::to_string_pretty(&report_json(&report))
                .map_err(|e| serialise_error("report", e))?;
            output.data(&rendered)?;
        }
    }

    let rejected = report.rejected().count();
    if rejected > 0 {
        return Err(CliError::ResourcesRejected {
            rejected,
            total: report.resources.len(),
        });
    }
    Ok(())
}

fn print_table(report: &ValidationReport, output: &OutputManager) -> CliResult<()> {
    if report.resources.is_empty() {
        output.warning("No DNSEndpoint resources found")?;
        return Ok(());
    }

    for resource in &report.resources {
        let label = format!("{} ({})", resource.name, location(resource));
        if resource.is_valid() {
            output.success(&label)?;
        } else {
            output.error(&label)?;
            for error in &resource.errors {
                output.error_detail(&error.to_string())?;
            }
        }
    }

    output.print("")?;
    output.info(&format!(
        "{} accepted, {} rejected",
        report.accepted().count(),
        report.rejected().count()
    ))?;
    Ok(())
}

/// `file#document`
fn location(resource: &ResourceReport) -> String {
    format!("{}#{}", resource.source.display(), resource.document)
}

fn report_json(report: &ValidationReport) -> Value {
    let resources: Vec<Value> = report
        .resources
        .iter()
        .map(|r| {
            json!({
                "source": r.source.display().to_string(),
                "document": r.document,
                "name": r.name,
                "valid": r.is_valid(),
                "errors": r.errors.iter().map(|e| json!({
                    "field": e.field(),
                    "reason": e.reason(),
                    "message": e.to_string(),
                })).collect::<Vec<_>>(),
            })
        })
        .collect();

    json!({
        "valid": report.is_valid(),
        "accepted": report.accepted().count(),
        "rejected": report.rejected().count(),
        "resources": resources,
    })
}
