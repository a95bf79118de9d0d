//! Writes accepted lines, in input order, exactly as they were read.

use log::info;
use std::io::{self, Write};

use crate::core::line::LineBuffer;
use crate::core::selection::Selection;

/// Write every accepted line to `out`. Returns how many were written.
pub fn emit<S>(buffer: &LineBuffer<S>, selection: &Selection, mut out: impl Write) -> io::Result<usize> {
    let mut written = 0;
    for (index, line) in buffer.iter().enumerate() {
        if selection.is_accepted(index) {
            out.write_all(line.as_bytes())?;
            written += 1;
        }
    }
    out.flush()?;
    info!("Passed {} of {} lines", written, buffer.len());
    Ok(written)
}
