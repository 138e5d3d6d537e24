use std::io;

use avaria_app::{
    context::AppContext,
    domain::settings::models::{SettingKey, Settings},
};
use clap::{Args, Subcommand};

use crate::cli::output_error;

#[derive(Debug, Args)]
pub(crate) struct SettingsCommand {
    #[command(subcommand)]
    command: SettingsSubcommand,
}

#[derive(Debug, Subcommand)]
enum SettingsSubcommand {
    /// Print the current settings
    Show,

    /// Change one setting
    Set {
        #[arg(value_enum)]
        key: SettingKey,

        /// New value: on/off for toggles, a number for limits
        value: String,
    },

    /// Restore the defaults
    Reset,
}

pub(crate) fn run(
    command: SettingsCommand,
    ctx: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let settings = match command.command {
        SettingsSubcommand::Show => ctx.settings.get_settings(),
        SettingsSubcommand::Set { key, value } => ctx
            .settings
            .get_settings()
            .and_then(|current| current.with_value(key, &value))
            .and_then(|updated| ctx.settings.save_settings(&updated).map(|()| updated)),
        SettingsSubcommand::Reset => ctx.settings.reset_settings(),
    }
    .map_err(|error| format!("settings error: {error}"))?;

    write_settings(out, &settings).map_err(output_error)
}

fn write_settings(out: &mut impl io::Write, settings: &Settings) -> io::Result<()> {
    let toggle = |enabled: bool| if enabled { "on" } else { "off" };

    writeln!(out, "new-damage     {}", toggle(settings.notifications.new_damage))?;
    writeln!(out, "weekly-reports {}", toggle(settings.notifications.weekly_reports))?;
    writeln!(out, "system-alerts  {}", toggle(settings.notifications.system_alerts))?;
    writeln!(out, "max-discount   {}", settings.max_discount_percent)?;
    writeln!(out, "page-size      {}", settings.page_size)?;
    writeln!(out, "audit-log      {}", toggle(settings.audit_log))?;

    Ok(())
}
