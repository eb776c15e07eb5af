pub mod config;
pub mod del;
pub mod hash_password;
pub mod hours;
pub mod init;
pub mod log;
pub mod punch;
pub mod status;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::errors::{AppError, AppResult};
use crate::models::pay_period::PayPeriod;
use crate::models::user::User;
use crate::utils::date;
use chrono::Local;
use std::io::{self, Write};

pub const USER_ENV: &str = "PUNCHCLOCK_USER";
pub const PASSWORD_ENV: &str = "PUNCHCLOCK_PASSWORD";

/// Log in with --user/--password, falling back to the environment and
/// finally to a password prompt.
pub(crate) fn login(cli: &Cli, cfg: &Config) -> AppResult<User> {
    let username = cli
        .user
        .clone()
        .or_else(|| std::env::var(USER_ENV).ok())
        .ok_or_else(|| AppError::Config(format!("no user given (use --user or {USER_ENV})")))?;

    let password = match cli
        .password
        .clone()
        .or_else(|| std::env::var(PASSWORD_ENV).ok())
    {
        Some(p) => p,
        None => prompt("Password: ")?,
    };

    AuthLogic::login(cfg, &username, &password)
}

fn prompt(label: &str) -> AppResult<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim_end_matches(['\r', '\n']).to_string())
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(question: &str) -> bool {
    crate::ui::messages::warning(question);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Pay period for `--date` (default today), optionally one step back.
pub(crate) fn resolve_period(date_arg: Option<&str>, previous: bool) -> AppResult<PayPeriod> {
    let day = match date_arg {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
        None => date::today(),
    };
    let out_of_range = || AppError::InvalidDate(date_arg.unwrap_or_default().to_string());
    let period = PayPeriod::containing(day, &Local).ok_or_else(out_of_range)?;
    if previous {
        period.previous(&Local).ok_or_else(out_of_range)
    } else {
        Ok(period)
    }
}
