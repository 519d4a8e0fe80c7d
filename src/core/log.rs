use crate::db::SqliteStorage;
use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::utils::date::display_timestamp;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"));

fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// ANSI color for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "login" => Colour::Green,
        "logout" => Colour::Red,
        "api_error" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "org_select" => Colour::Blue,
        "check-in" | "check-out" => Colour::Cyan,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(storage: &SqliteStorage) -> AppResult<()> {
        let entries = storage.pool().with_conn(|conn| Ok(load_log(conn)))??;

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = 17;

        // Operation column capped at 60 visible chars
        let op_w = entries
            .iter()
            .map(|e| op_target(&e.operation, &e.target).len())
            .max()
            .unwrap_or(10)
            .min(60);

        for e in entries {
            let color = color_for_operation(&e.operation);
            let visible = op_target(&e.operation, &e.target);
            let truncated = if visible.chars().count() > 60 {
                let mut s = visible.chars().take(57).collect::<String>();
                s.push_str("...");
                s
            } else {
                visible
            };

            // only the operation word is colored
            let colored = match truncated.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(truncated.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                display_timestamp(&e.date),
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

fn op_target(operation: &str, target: &str) -> String {
    if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    }
}
