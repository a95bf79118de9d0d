//! # Line Buffer
//!
//! Input lines are pulled lazily from a [`LineSource`] as the cursor moves.
//! The buffer only ever grows: once a line sits at index `i` it stays there
//! untouched until the session ends.
//!
//! ```text
//! stdin ──► ReaderSource ──► LineBuffer ──► prompt / output
//!              (pull)         (append-only)
//! ```

use log::debug;
use std::borrow::Cow;
use std::io::{self, BufRead};

/// One line of input, terminator included, as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line(Vec<u8>);

impl Line {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Text for display on the control terminal: terminator stripped,
    /// invalid UTF-8 replaced.
    pub fn display_text(&self) -> Cow<'_, str> {
        let mut bytes = self.0.as_slice();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest.strip_suffix(b"\r").unwrap_or(rest);
        }
        String::from_utf8_lossy(bytes)
    }
}

/// Pull-based supplier of input lines.
pub trait LineSource {
    /// Returns the next line, or `None` once the input is exhausted.
    fn next_line(&mut self) -> io::Result<Option<Line>>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> io::Result<Option<Line>> {
        (**self).next_line()
    }
}

/// [`LineSource`] over any buffered reader, splitting on `\n`.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<Line>> {
        let mut bytes = Vec::new();
        let read = self.reader.read_until(b'\n', &mut bytes)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(Line(bytes)))
    }
}

/// Append-only buffer of every line read so far.
pub struct LineBuffer<S> {
    lines: Vec<Line>,
    source: S,
    exhausted: bool,
}

impl<S: LineSource> LineBuffer<S> {
    pub fn new(source: S) -> Self {
        Self {
            lines: Vec::new(),
            source,
            exhausted: false,
        }
    }

    /// Make sure a line exists at `index`, reading only the missing lines.
    ///
    /// Returns `false` if the input ended before reaching `index`.
    pub fn ensure(&mut self, index: usize) -> io::Result<bool> {
        while self.lines.len() <= index {
            if !self.fetch()? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Read all remaining input. Returns the number of lines added.
    pub fn drain(&mut self) -> io::Result<usize> {
        let before = self.lines.len();
        while self.fetch()? {}
        let added = self.lines.len() - before;
        debug!("Drained {} remaining lines ({} total)", added, self.lines.len());
        Ok(added)
    }

    fn fetch(&mut self) -> io::Result<bool> {
        if self.exhausted {
            return Ok(false);
        }
        match self.source.next_line()? {
            Some(line) => {
                self.lines.push(line);
                Ok(true)
            }
            None => {
                debug!("End of input after {} lines", self.lines.len());
                self.exhausted = true;
                Ok(false)
            }
        }
    }
}

impl<S> LineBuffer<S> {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }
}
