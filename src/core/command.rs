//! # Command Table
//!
//! The fixed set of single-key commands. Each entry pairs a key with the
//! [`Action`] it triggers, a one-line description for the help listing,
//! and an optional predicate deciding whether it can be used right now.
//!
//! Commands are registered in `default_table()` and dispatched by key in
//! [`CommandTable::dispatch`].

use log::debug;
use std::collections::BTreeMap;

use crate::core::action::{Action, Effect, update};
use crate::core::state::{ACCEPT_KEY, REJECT_KEY, Session};

/// Key that repeats the default command.
pub const DEFAULT_KEY: char = ' ';
/// Key of the help command, left out of the prompt legend.
pub const HELP_KEY: char = '?';

#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub key: char,
    pub action: Action,
    pub doc: &'static str,
    /// `None` means always available.
    pub available: Option<fn(&Session) -> bool>,
}

impl Command {
    pub fn is_available(&self, session: &Session) -> bool {
        self.available.is_none_or(|check| check(session))
    }
}

/// Result of feeding one key to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Ran(Effect),
    /// No command is bound to this key.
    Invalid(char),
    /// The command exists but its predicate refused.
    Unavailable(char),
}

/// Registry of commands, iterated in key order.
#[derive(Debug)]
pub struct CommandTable {
    commands: BTreeMap<char, Command>,
}

impl CommandTable {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().map(|c| (c.key, c)).collect(),
        }
    }

    /// All commands in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    /// Commands usable in the current state, in sorted key order.
    pub fn available<'a>(&'a self, session: &'a Session) -> impl Iterator<Item = &'a Command> {
        self.iter().filter(move |c| c.is_available(session))
    }

    /// Run the command bound to `key`. The space bar stands for the
    /// current default command.
    pub fn dispatch(&self, session: &mut Session, key: char) -> Dispatch {
        let key = if key == DEFAULT_KEY {
            session.default_key()
        } else {
            key
        };

        let Some(command) = self.commands.get(&key) else {
            debug!("Invalid key {:?}", key);
            return Dispatch::Invalid(key);
        };
        if !command.is_available(session) {
            debug!("Key {:?} unavailable at line {}", key, session.cursor);
            return Dispatch::Unavailable(key);
        }
        Dispatch::Ran(update(session, command.action))
    }
}

/// The standard command set.
pub fn default_table() -> CommandTable {
    CommandTable::new([
        Command {
            key: 'j',
            action: Action::Skip,
            doc: "skip to the next line without deciding",
            available: None,
        },
        Command {
            key: 'k',
            action: Action::Back,
            doc: "back up to the previous line",
            available: Some(|s: &Session| s.cursor > 0),
        },
        Command {
            key: ACCEPT_KEY,
            action: Action::Accept,
            doc: "pass this line through",
            available: None,
        },
        Command {
            key: REJECT_KEY,
            action: Action::Reject,
            doc: "drop this line",
            available: None,
        },
        Command {
            key: 'd',
            action: Action::Done,
            doc: "done: pass what was accepted, drop the rest",
            available: None,
        },
        Command {
            key: 'q',
            action: Action::Quit,
            doc: "quit without passing any lines",
            available: None,
        },
        Command {
            key: 'c',
            action: Action::Count,
            doc: "count the remaining lines",
            available: Some(|s: &Session| !s.counted),
        },
        Command {
            key: HELP_KEY,
            action: Action::Help,
            doc: "show this help",
            available: None,
        },
    ])
}
