use crate::cli::commands::login;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::parse_local_timestamp;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { action, at, force } = &cli.command {
        let at_ms = at.as_deref().map(parse_local_timestamp).transpose()?;
        let user = login(cli, cfg)?;
        let name = user.display_name().to_string();

        let punch = PunchLogic::apply(cfg, user, *action, at_ms, *force)?;
        success(format!("{name}: {} recorded at {}", punch.label, punch.local_str()));
    }
    Ok(())
}
