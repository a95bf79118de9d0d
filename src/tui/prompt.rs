//! Text shown on the control terminal.
//!
//! Raw mode turns off output post-processing, so every line break here
//! is an explicit `\r\n`.

use crate::core::command::{CommandTable, HELP_KEY};
use crate::core::line::Line;
use crate::core::state::Session;

pub const NEWLINE: &str = "\r\n";

/// Question asked when no `--question` is given.
pub const DEFAULT_QUESTION: &str = "Pass this line?";

/// Placeholder for the total while the input has not been counted.
const UNKNOWN_TOTAL: &str = "?";

/// Prompt for the line under the cursor, e.g.
/// `apple\r\nPass this line? (1/?) [cdjNqy]> `.
pub fn render_prompt(
    line: &Line,
    question: &str,
    session: &Session,
    total: Option<usize>,
    table: &CommandTable,
) -> String {
    format!(
        "{}{NEWLINE}{} {} [{}]> ",
        line.display_text(),
        question,
        progress(session.cursor, total),
        legend(session, table),
    )
}

/// `(current/total)`, one-based.
pub fn progress(cursor: usize, total: Option<usize>) -> String {
    match total {
        Some(total) => format!("({}/{})", cursor + 1, total),
        None => format!("({}/{UNKNOWN_TOTAL})", cursor + 1),
    }
}

/// Keys usable right now, help excluded, the default in uppercase.
pub fn legend(session: &Session, table: &CommandTable) -> String {
    let default = session.default_key();
    table
        .available(session)
        .filter(|c| c.key != HELP_KEY)
        .map(|c| {
            if c.key == default {
                c.key.to_ascii_uppercase()
            } else {
                c.key
            }
        })
        .collect()
}

/// Full command listing for `?`.
pub fn render_help(table: &CommandTable) -> String {
    let mut help = String::new();
    for command in table.iter() {
        help.push_str(&format!("  {} - {}{NEWLINE}", command.key, command.doc));
    }
    help.push_str(&format!(
        "  <space> - repeat the default command (shown capitalized){NEWLINE}"
    ));
    help
}

pub fn render_invalid(key: char) -> String {
    format!("Invalid command {key:?}. Press ? for help.{NEWLINE}")
}

pub fn render_invalid_key() -> String {
    format!("Invalid key. Press ? for help.{NEWLINE}")
}

pub fn render_unavailable(key: char) -> String {
    format!("Command {key:?} is not available here.{NEWLINE}")
}
