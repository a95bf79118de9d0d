//! # Actions
//!
//! Every command the operator can issue becomes an `Action`.
//! Pressing `y`? That's `Action::Accept`. Pressing `c`? `Action::Count`.
//!
//! `update()` applies an action to the session and returns an [`Effect`]
//! telling the caller what, if anything, it has to do next. No I/O here:
//! draining input and printing help belong to the loop that owns the
//! devices.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + Effect
//! ```

use log::debug;

use crate::core::selection::Decision;
use crate::core::state::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move to the next line without deciding.
    Skip,
    /// Move back to the previous line.
    Back,
    Accept,
    Reject,
    /// Stop and emit what has been accepted so far.
    Done,
    /// Abort without emitting anything.
    Quit,
    /// Read the rest of the input so the total is known.
    Count,
    Help,
}

/// Follow-up work requested by `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Keep prompting.
    Continue,
    /// Leave the loop and emit accepted lines.
    Done,
    /// Leave the loop and emit nothing.
    Abort,
    /// Drain the remaining input into the buffer.
    Drain,
    /// Print the command listing.
    ShowHelp,
}

pub fn update(session: &mut Session, action: Action) -> Effect {
    debug!("Action {:?} at line {}", action, session.cursor);
    match action {
        Action::Skip => {
            session.cursor += 1;
            Effect::Continue
        }
        Action::Back => {
            session.cursor = session.cursor.saturating_sub(1);
            Effect::Continue
        }
        Action::Accept => decide(session, Decision::Accepted),
        Action::Reject => decide(session, Decision::Rejected),
        Action::Done => {
            session.done = true;
            Effect::Done
        }
        Action::Quit => Effect::Abort,
        Action::Count => {
            session.counted = true;
            Effect::Drain
        }
        Action::Help => Effect::ShowHelp,
    }
}

fn decide(session: &mut Session, decision: Decision) -> Effect {
    session.selection.set(session.cursor, decision);
    session.cursor += 1;
    Effect::Continue
}
