use std::io;

use avaria::{
    discounts::DiscountPercent, pricing::format_currency, registration::RegistrationDraft,
};
use avaria_app::context::AppContext;
use clap::Args;

use crate::cli::output_error;

#[derive(Debug, Args)]
pub(crate) struct RegisterReportArgs {
    /// Product code (SKU)
    #[arg(long)]
    code: String,

    /// Serial number of the damaged unit
    #[arg(long)]
    serial: String,

    /// Description of the damage
    #[arg(long)]
    damage: String,

    /// Discount to apply, e.g. 15 or 15%
    #[arg(long, default_value = "10")]
    discount: DiscountPercent,

    /// Who is registering the unit
    #[arg(long, env = "AVARIA_SELLER")]
    seller: String,

    /// Image of the damage
    #[arg(long)]
    photo_url: Option<String>,
}

pub(crate) fn run(
    args: RegisterReportArgs,
    ctx: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let draft = RegistrationDraft {
        product: ctx.products.find_by_code(&args.code),
        serial_number: args.serial,
        damage: args.damage,
        discount: args.discount,
        seller: args.seller,
        photo_url: args.photo_url,
    };

    let report = ctx
        .reports
        .register_report(draft)
        .map_err(|error| format!("failed to register report: {error}"))?;

    writeln!(out, "Relatório #{} registrado", report.id).map_err(output_error)?;
    writeln!(out, "Produto:        {} ({})", report.product_name, report.code)
        .map_err(output_error)?;
    writeln!(out, "Desconto:       {}", report.discount).map_err(output_error)?;
    writeln!(out, "Preço original: {}", format_currency(report.original_price))
        .map_err(output_error)?;
    writeln!(out, "Preço novo:     {}", format_currency(report.new_price)).map_err(output_error)?;

    Ok(())
}
