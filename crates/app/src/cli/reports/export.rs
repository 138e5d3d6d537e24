use std::{fs::File, io, path::PathBuf};

use avaria::export::ExportFormat;
use avaria_app::context::AppContext;
use clap::Args;
use tracing::info;

use crate::cli::reports::FilterArgs;

#[derive(Debug, Args)]
pub(crate) struct ExportReportsArgs {
    #[command(flatten)]
    filters: FilterArgs,

    /// Table layout (table, markdown)
    #[arg(long, default_value = "table")]
    format: ExportFormat,

    /// Write to this file instead of standard output
    #[arg(long, short)]
    output: Option<PathBuf>,
}

pub(crate) fn run(
    args: ExportReportsArgs,
    ctx: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let spec = args.filters.into_spec();

    match args.output {
        Some(path) => {
            let mut file = File::create(&path)
                .map_err(|error| format!("failed to create {}: {error}", path.display()))?;

            ctx.reports
                .export_reports(&spec, args.format, &mut file)
                .map_err(|error| format!("failed to write {}: {error}", path.display()))?;

            info!(path = %path.display(), "export written");
        }
        None => ctx
            .reports
            .export_reports(&spec, args.format, out)
            .map_err(|error| format!("failed to export reports: {error}"))?,
    }

    Ok(())
}
