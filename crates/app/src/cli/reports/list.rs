use std::{io, num::NonZeroUsize};

use avaria::{
    export::{ExportFormat, render_reports},
    query::FilterSortSpec,
};
use avaria_app::context::AppContext;
use clap::Args;
use tracing::warn;

use crate::cli::{output_error, reports::FilterArgs};

#[derive(Debug, Args)]
pub(crate) struct ListReportsArgs {
    #[command(flatten)]
    filters: FilterArgs,

    /// Page to show; out-of-range pages are clamped
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Reports per page; defaults to the page-size setting
    #[arg(long)]
    page_size: Option<NonZeroUsize>,
}

pub(crate) fn run(
    args: ListReportsArgs,
    ctx: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let page_size = match args.page_size {
        Some(page_size) => page_size,
        None => ctx.settings.get_settings().map_or_else(
            |error| {
                warn!(%error, "failed to load settings, using default page size");

                FilterSortSpec::default().page_size
            },
            |settings| settings.page_size,
        ),
    };

    let spec = FilterSortSpec {
        page: args.page,
        page_size,
        ..args.filters.into_spec()
    };

    let page = ctx.reports.query_reports(&spec);

    if page.total_matched == 0 {
        writeln!(out, "Nenhum relatório encontrado.").map_err(output_error)?;

        return Ok(());
    }

    let items: Vec<_> = page.items.iter().collect();

    writeln!(out, "{}", render_reports(&items, ExportFormat::Table)).map_err(output_error)?;
    writeln!(
        out,
        "Página {} de {} ({} relatórios)",
        page.page, page.total_pages, page.total_matched
    )
    .map_err(output_error)?;

    Ok(())
}
