//! # Session State
//!
//! Everything the decision loop mutates while the operator works through
//! the input. Line contents live in the `LineBuffer`; this struct only
//! tracks where we are and what was decided.
//!
//! ```text
//! Session
//! ├── cursor: usize          // index of the line under review
//! ├── selection: Selection   // per-line decisions
//! ├── counted: bool          // remaining input drained, total known
//! └── done: bool             // a terminating command fired
//! ```
//!
//! State changes only happen through `update(session, action)` in action.rs.

use crate::core::selection::{Decision, Selection};

/// Key of the command that accepts the current line.
pub const ACCEPT_KEY: char = 'y';
/// Key of the command that rejects the current line.
pub const REJECT_KEY: char = 'n';

#[derive(Debug, Default)]
pub struct Session {
    pub cursor: usize,
    pub selection: Selection,
    pub counted: bool,
    pub done: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decision recorded for the line under the cursor.
    pub fn current_decision(&self) -> Decision {
        self.selection.get(self.cursor)
    }

    /// Key that the space bar stands for on the current line.
    ///
    /// Rejects unless the line was already accepted on an earlier visit.
    pub fn default_key(&self) -> char {
        if self.current_decision() == Decision::Accepted {
            ACCEPT_KEY
        } else {
            REJECT_KEY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_new_defaults() {
        let session = Session::new();
        assert_eq!(session.cursor, 0);
        assert!(!session.counted);
        assert!(!session.done);
        assert_eq!(session.current_decision(), Decision::Undecided);
    }

    #[test]
    fn test_default_key_rejects_fresh_line() {
        let session = Session::new();
        assert_eq!(session.default_key(), 'n');
    }

    #[test]
    fn test_default_key_follows_previous_accept() {
        let mut session = Session::new();
        session.selection.set(0, Decision::Accepted);
        assert_eq!(session.default_key(), 'y');

        session.selection.set(0, Decision::Rejected);
        assert_eq!(session.default_key(), 'n');
    }
}
