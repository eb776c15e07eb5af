use crate::cli::commands::{ask_confirmation, login, resolve_period};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { index, date, yes } = &cli.command {
        let period = resolve_period(date.as_deref(), false)?;
        let user = login(cli, cfg)?;
        if !user.is_admin {
            return Err(AppError::PermissionDenied(
                "only administrators can delete punches".into(),
            ));
        }

        let question = format!(
            "Delete punch #{} of the period starting {}? This action cannot be undone.",
            index, period.first_day
        );
        if !*yes && !ask_confirmation(&question) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::apply(cfg, user, &period, *index)?;
        success(format!(
            "Deleted {} at {}.",
            removed.label,
            removed.local_str()
        ));
    }
    Ok(())
}
