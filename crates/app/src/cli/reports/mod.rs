use std::io;

use avaria::{
    categories::Category,
    query::{FilterSortSpec, SortDirection, SortKey},
};
use avaria_app::context::AppContext;
use clap::{Args, Subcommand};
use jiff::civil::Date;

mod export;
mod list;
mod register;

#[derive(Debug, Args)]
pub(crate) struct ReportsCommand {
    #[command(subcommand)]
    command: ReportsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ReportsSubcommand {
    /// List reports one page at a time
    List(list::ListReportsArgs),

    /// Register a damaged unit
    Register(register::RegisterReportArgs),

    /// Export every matching report as a table
    Export(export::ExportReportsArgs),
}

/// Filters and ordering shared by listing and export.
#[derive(Debug, Args)]
struct FilterArgs {
    /// Match product name, code or serial number (case-insensitive)
    #[arg(long, short)]
    search: Option<String>,

    /// Only this category (electronics, appliances, furniture)
    #[arg(long, short)]
    category: Option<Category>,

    /// Earliest registration date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    from: Option<Date>,

    /// Latest registration date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    to: Option<Date>,

    /// Sort by product-name, seller or date
    #[arg(long, default_value_t = SortKey::Date)]
    sort: SortKey,

    /// Sort direction (asc, desc)
    #[arg(long, default_value_t = SortDirection::Descending)]
    direction: SortDirection,
}

impl FilterArgs {
    fn into_spec(self) -> FilterSortSpec {
        FilterSortSpec {
            search_term: self.search.unwrap_or_default(),
            category: self.category,
            start_date: self.from,
            end_date: self.to,
            sort_key: self.sort,
            sort_direction: self.direction,
            ..FilterSortSpec::default()
        }
    }
}

pub(crate) fn run(
    command: ReportsCommand,
    ctx: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), String> {
    match command.command {
        ReportsSubcommand::List(args) => list::run(args, ctx, out),
        ReportsSubcommand::Register(args) => register::run(args, ctx, out),
        ReportsSubcommand::Export(args) => export::run(args, ctx, out),
    }
}
