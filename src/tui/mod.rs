//! # TUI Adapter
//!
//! The crossterm-specific layer. Owns the control terminal, runs the
//! decision loop, and translates keypresses into command dispatches.
//!
//! This is the only module that knows about crossterm and terminal
//! devices. Input lines come from stdin and accepted lines go to stdout;
//! prompts and keys travel over the controlling terminal so redirected
//! output never sees them.
//!
//! ## Terminal Lifetime
//!
//! Raw mode is held by a [`RawModeGuard`] for exactly as long as the
//! loop runs. The guard restores the terminal on every exit path: normal
//! completion, `q`, an I/O error, or a panic unwinding through `run`.
//! Termination signals (SIGTERM, SIGHUP, SIGINT, SIGQUIT) are caught by
//! [`TerminalKeys`] while it waits for a key and turned into
//! [`Outcome::Terminated`], so they take the same path.

mod event;
pub mod prompt;

pub use event::{KeyPress, KeySource, TerminalKeys};

use log::{debug, info, warn};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};

use crossterm::terminal;

use crate::core::action::Effect;
use crate::core::command::{CommandTable, Dispatch, default_table};
use crate::core::line::{LineBuffer, LineSource, ReaderSource};
use crate::core::output;
use crate::core::state::Session;
use crate::error::VetError;

#[cfg(unix)]
const CONTROL_TERMINAL: &str = "/dev/tty";
#[cfg(not(unix))]
const CONTROL_TERMINAL: &str = "CONOUT$";

/// How the decision loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `d` or end of input: emit what was accepted.
    Finished,
    /// `q` or Ctrl+C: emit nothing.
    Aborted,
    /// No session ran: stdin is a terminal or there is no control terminal.
    Skipped,
    /// A termination signal arrived: emit nothing, exit `128 + signal`.
    Terminated(i32),
}

/// Settings for one filtering run.
#[derive(Debug, Clone)]
pub struct Options {
    pub question: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            question: prompt::DEFAULT_QUESTION.to_string(),
        }
    }
}

/// Raw mode lifetime guard so terminal state is restored on any return path.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        debug!("Raw mode enabled");
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        debug!("Raw mode restored");
    }
}

/// Open the controlling terminal for prompt output.
///
/// A `File` is unbuffered, so every prompt reaches the screen as soon as
/// it is written.
pub fn open_control_terminal() -> io::Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(CONTROL_TERMINAL)
}

/// The decision loop.
///
/// Pulls lines into `buffer` as the cursor reaches them, prompts on
/// `term`, reads one key per prompt from `keys`, and dispatches it
/// through `table` until a terminating command fires or input runs out.
pub fn run_session<S, K, W>(
    buffer: &mut LineBuffer<S>,
    session: &mut Session,
    table: &CommandTable,
    options: &Options,
    keys: &mut K,
    term: &mut W,
) -> Result<Outcome, VetError>
where
    S: LineSource,
    K: KeySource,
    W: Write,
{
    while !session.done {
        if !buffer.ensure(session.cursor)? {
            info!("Input exhausted at line {}", session.cursor + 1);
            break;
        }
        let Some(line) = buffer.get(session.cursor) else {
            break;
        };

        let total = session.counted.then(|| buffer.len());
        let text = prompt::render_prompt(line, &options.question, session, total, table);
        say(term, &text)?;

        let key = keys.next_key().map_err(VetError::Terminal)?;
        say(term, prompt::NEWLINE)?;

        let c = match key {
            KeyPress::Char(c) => c,
            KeyPress::Interrupt => {
                info!("Interrupted at line {}", session.cursor + 1);
                return Ok(Outcome::Aborted);
            }
            KeyPress::Other => {
                say(term, &prompt::render_invalid_key())?;
                continue;
            }
            KeyPress::Signal(signal) => {
                warn!("Signal {} at line {}", signal, session.cursor + 1);
                return Ok(Outcome::Terminated(signal));
            }
        };

        match table.dispatch(session, c) {
            Dispatch::Ran(Effect::Continue) => {}
            Dispatch::Ran(Effect::Done) => {
                info!("Done at line {}", session.cursor + 1);
            }
            Dispatch::Ran(Effect::Abort) => {
                info!("Aborted at line {}", session.cursor + 1);
                return Ok(Outcome::Aborted);
            }
            Dispatch::Ran(Effect::Drain) => {
                buffer.drain()?;
                info!("Counted {} lines", buffer.len());
            }
            Dispatch::Ran(Effect::ShowHelp) => {
                say(term, &prompt::render_help(table))?;
            }
            Dispatch::Invalid(c) => say(term, &prompt::render_invalid(c))?,
            Dispatch::Unavailable(c) => say(term, &prompt::render_unavailable(c))?,
        }
    }
    Ok(Outcome::Finished)
}

fn say(term: &mut impl Write, text: &str) -> Result<(), VetError> {
    term.write_all(text.as_bytes())
        .and_then(|()| term.flush())
        .map_err(VetError::Terminal)
}

/// Filter stdin to stdout, asking about each line on the control terminal.
///
/// Returns without reading anything when stdin is itself a terminal or
/// when no controlling terminal can be opened.
pub fn run(options: Options) -> Result<Outcome, VetError> {
    use std::io::IsTerminal;

    if io::stdin().is_terminal() {
        info!("stdin is a terminal, nothing to filter");
        return Ok(Outcome::Skipped);
    }

    let mut term = match open_control_terminal() {
        Ok(term) => term,
        Err(e) => {
            warn!("No control terminal at {}: {}", CONTROL_TERMINAL, e);
            return Ok(Outcome::Skipped);
        }
    };

    let stdin = io::stdin().lock();
    let mut buffer = LineBuffer::new(ReaderSource::new(stdin));
    let mut session = Session::new();
    let table = default_table();

    let outcome = {
        let mut keys = TerminalKeys::new().map_err(VetError::Terminal)?;
        let _raw_mode = RawModeGuard::acquire().map_err(VetError::Terminal)?;
        run_session(
            &mut buffer,
            &mut session,
            &table,
            &options,
            &mut keys,
            &mut term,
        )?
    };

    if outcome == Outcome::Finished {
        let stdout = BufWriter::new(io::stdout().lock());
        output::emit(&buffer, &session.selection, stdout)?;
    }
    Ok(outcome)
}
