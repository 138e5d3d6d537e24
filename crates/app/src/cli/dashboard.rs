use std::io;

use avaria::export::render_dashboard;
use avaria_app::context::AppContext;

use crate::cli::output_error;

pub(crate) fn run(ctx: &AppContext, out: &mut impl io::Write) -> Result<(), String> {
    let dashboard = ctx
        .reports
        .dashboard()
        .map_err(|error| format!("failed to compute dashboard: {error}"))?;

    writeln!(out, "{}", render_dashboard(&dashboard.stats, &dashboard.chart))
        .map_err(output_error)?;

    Ok(())
}
