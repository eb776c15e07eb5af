use crate::config::Config;
use crate::db::log::read_entries;
use crate::errors::AppResult;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 40;

/// Color of an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "punch" => Colour::Green,
        "del" => Colour::Red,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Audit log lines, colored and aligned, oldest first.
    pub fn render(cfg: &Config) -> AppResult<Vec<String>> {
        let entries = read_entries(&cfg.data_path())?;

        let op_w = entries
            .iter()
            .map(|e| op_target(&e.operation, &e.target).chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_OP_WIDTH);
        let id_w = entries.len().to_string().len();

        let mut lines = Vec::with_capacity(entries.len());
        for (i, e) in entries.iter().enumerate() {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| e.date.clone());

            let mut visible = op_target(&e.operation, &e.target);
            if visible.chars().count() > MAX_OP_WIDTH {
                visible = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>() + "...";
            }

            // only the operation word is colored
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {rest}", color_for_operation(op).paint(op)),
                None => color_for_operation(&visible).paint(visible.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            lines.push(format!(
                "{:>id_w$}: {} | {}{} => {}",
                i + 1,
                date,
                colored,
                padding,
                e.message,
            ));
        }
        Ok(lines)
    }
}

fn op_target(operation: &str, target: &str) -> String {
    if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    }
}
