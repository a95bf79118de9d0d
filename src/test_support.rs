//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io::{self, Cursor};

use crate::core::line::{LineBuffer, ReaderSource};
use crate::tui::{KeyPress, KeySource};

/// Replays a fixed sequence of keypresses. Running out is an error so a
/// loop that asks for more keys than scripted fails loudly.
pub struct ScriptedKeys {
    keys: VecDeque<KeyPress>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = KeyPress>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Script made of plain character keys.
    pub fn chars(keys: &str) -> Self {
        Self::new(keys.chars().map(KeyPress::Char))
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<KeyPress> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }
}

/// Creates a buffer over in-memory input.
pub fn test_buffer(input: &str) -> LineBuffer<ReaderSource<Cursor<Vec<u8>>>> {
    LineBuffer::new(ReaderSource::new(Cursor::new(input.as_bytes().to_vec())))
}
