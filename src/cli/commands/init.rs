use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::init::InitLogic;
use crate::errors::AppResult;

/// Handle the `init` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Init {
        admin,
        admin_password,
    } = &cli.command
    {
        let seed = admin
            .as_deref()
            .map(|name| (name, admin_password.as_deref().unwrap_or_default()));
        println!("⚙️  Initializing punchclock…");
        InitLogic::apply(cfg, seed, cli.test)?;
        println!("🎉 punchclock initialization completed!");
    }
    Ok(())
}
