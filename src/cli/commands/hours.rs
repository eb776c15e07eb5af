use crate::cli::commands::{login, resolve_period};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::hours::HoursLogic;
use crate::errors::AppResult;
use crate::models::period_summary::PeriodSummary;
use crate::ui::messages::header;
use crate::utils::colors::{invalid_marker, paint_kind};
use crate::utils::millis2readable;
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours { date, previous } = &cli.command {
        let period = resolve_period(date.as_deref(), *previous)?;
        let user = login(cli, cfg)?;
        let summary = HoursLogic::summary(cfg, user, &period)?;
        print_summary(&summary, cfg);
    }
    Ok(())
}

fn print_summary(summary: &PeriodSummary, cfg: &Config) {
    header(format!(
        "Summary for Pay Period {} → {}",
        summary.period.first_day,
        summary.period.last_day()
    ));

    if summary.punches.is_empty() {
        println!("No punches in this period.");
    } else {
        let mut table = Table::new(["#", "", "Action", "When"]);
        for (i, p) in summary.punches.iter().enumerate() {
            let mark = if summary.is_invalid(p) {
                invalid_marker()
            } else {
                String::new()
            };
            table.add_row(vec![
                (i + 1).to_string(),
                mark,
                paint_kind(p.label),
                p.local_str(),
            ]);
        }
        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        print!("{}", table.render(sep));

        if !summary.invalid.is_empty() {
            println!(
                "\n{} {} punch(es) do not pair up; review or delete them.",
                invalid_marker(),
                summary.invalid.len()
            );
        }
    }

    println!("{}", cfg.separator_line(40));
    println!(
        "Total Hours: {} ({})",
        summary.total_hours(),
        millis2readable(summary.total_millis)
    );
}
