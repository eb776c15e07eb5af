use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let lines = LogLogic::render(cfg)?;
        if lines.is_empty() {
            println!("📜 Internal log is empty.");
        } else {
            println!("📜 Internal log:\n");
            for line in lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}
