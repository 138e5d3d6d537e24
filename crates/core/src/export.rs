//! Export
//!
//! Renders report listings and dashboard figures as text tables.

use std::{io, str::FromStr};

use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    pricing::{format_currency, format_money},
    products::Product,
    reports::DamageReport,
    stats::{ChartBucket, DashboardStats},
};

/// Column headers of a report export.
pub const REPORT_COLUMNS: [&str; 8] = [
    "Produto",
    "SKU",
    "Nº de Série",
    "Vendedor",
    "Data",
    "Desconto",
    "Preço Original",
    "Preço Novo",
];

const CHART_BAR_WIDTH: usize = 30;

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output could not be written.
    #[error("failed to write export")]
    Io(#[from] io::Error),

    /// The format name was not recognised.
    #[error("unknown export format: {0}")]
    UnknownFormat(String),
}

/// Table layout of an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Box-drawn table for terminals and printing
    #[default]
    Table,

    /// Markdown table
    Markdown,
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(ExportFormat::Table),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Render reports, one row each, in the given order.
pub fn render_reports(reports: &[&DamageReport], format: ExportFormat) -> String {
    let mut builder = Builder::default();

    builder.push_record(REPORT_COLUMNS);

    for report in reports {
        builder.push_record([
            report.product_name.clone(),
            report.code.clone(),
            report.serial_number.clone(),
            report.seller.clone(),
            report.date_utc().strftime("%d/%m/%Y").to_string(),
            report.discount.to_string(),
            format_currency(report.original_price),
            format_currency(report.new_price),
        ]);
    }

    let mut table = builder.build();

    apply_format(&mut table, format);
    table.modify(Columns::new(5..8), Alignment::right());

    table.to_string()
}

/// Write rendered reports to `out`.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if writing fails.
pub fn write_reports(
    out: &mut (impl io::Write + ?Sized),
    reports: &[&DamageReport],
    format: ExportFormat,
) -> Result<(), ExportError> {
    writeln!(out, "{}", render_reports(reports, format))?;

    Ok(())
}

/// Render the product catalog.
pub fn render_products(products: &[Product]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["SKU", "Produto", "Categoria", "Preço"]);

    for product in products {
        builder.push_record([
            product.id.clone(),
            product.name.clone(),
            product.category.label().to_string(),
            format_currency(product.price),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::last(), Alignment::right());

    table.to_string()
}

/// Render the dashboard cards and the per-category bar chart.
pub fn render_dashboard(stats: &DashboardStats, chart: &[ChartBucket]) -> String {
    let mut cards = Builder::default();

    cards.push_record(["Produtos avariados hoje", &stats.damaged_today.to_string()]);
    cards.push_record(["Vendas avariadas no mês", &format_money(&stats.monthly_value)]);
    cards.push_record(["Avisos pendentes", &stats.pending_warnings.to_string()]);
    cards.push_record(["Relatórios registrados", &stats.total_reports.to_string()]);

    let mut cards = cards.build();
    cards.with(Style::modern_rounded());
    cards.modify(Columns::last(), Alignment::right());

    let mut sorted = chart.to_vec();
    sorted.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

    let largest = sorted.first().map_or(0, |bucket| bucket.total);

    let mut bars = Builder::default();
    bars.push_record(["Categoria", "Avarias", ""]);

    for bucket in &sorted {
        bars.push_record([
            bucket.category.label().to_string(),
            bucket.total.to_string(),
            "█".repeat(bar_width(bucket.total, largest)),
        ]);
    }

    let mut bars = bars.build();
    bars.with(Style::modern_rounded());
    bars.modify(Columns::one(1), Alignment::right());

    format!("{cards}\n{bars}")
}

fn apply_format(table: &mut Table, format: ExportFormat) {
    match format {
        ExportFormat::Table => {
            table.with(Style::modern_rounded());
        }
        ExportFormat::Markdown => {
            table.with(Style::markdown());
        }
    }
}

fn bar_width(total: usize, largest: usize) -> usize {
    if largest == 0 {
        return 0;
    }

    (total * CHART_BAR_WIDTH).div_ceil(largest)
}
