use std::io;

use avaria_app::context::AppContext;
use clap::Subcommand;

mod dashboard;
mod login;
mod products;
mod reports;
mod settings;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Check a username and password
    Login(login::LoginArgs),

    /// Show today's figures and reports per category
    Dashboard,

    /// Browse the product catalog
    Products(products::ProductsCommand),

    /// List, register and export damage reports
    Reports(reports::ReportsCommand),

    /// Show and change panel settings
    Settings(settings::SettingsCommand),
}

pub(crate) fn run(
    command: Commands,
    ctx: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), String> {
    match command {
        Commands::Login(args) => login::run(args, ctx, out),
        Commands::Dashboard => dashboard::run(ctx, out),
        Commands::Products(command) => products::run(command, ctx, out),
        Commands::Reports(command) => reports::run(command, ctx, out),
        Commands::Settings(command) => settings::run(command, ctx, out),
    }
}

fn output_error(error: io::Error) -> String {
    format!("failed to write output: {error}")
}
