use crate::cli::commands::login;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::errors::AppResult;
use crate::models::punch::last_punch;
use crate::utils::colors::{paint_button, paint_kind};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let user = login(cli, cfg)?;
    let session = AuthLogic::open_session(cfg, user)?;

    println!("{}, please select a function.\n", session.user().display_name());

    let panel = session.panel();
    println!(
        "  {}  {}",
        paint_button(panel.clock_in.action.label(), panel.clock_in.enabled),
        paint_button(panel.clock_out.action.label(), panel.clock_out.enabled)
    );
    println!(
        "  {}  {}\n",
        paint_button(panel.lunch.action.label(), panel.lunch.enabled),
        paint_button(panel.rest.action.label(), panel.rest.enabled)
    );

    match last_punch(session.punches()) {
        Some(p) => println!("Last punch: {} ({})", paint_kind(p.label), p.local_str()),
        None => println!("Last punch: None"),
    }
    Ok(())
}
