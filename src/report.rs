//! Tab-aligned report output.

use crate::record::FileRecord;
use std::io::{self, Write};

/// Minimum width of every column, padding included.
pub const MIN_WIDTH: usize = 8;
/// Spaces added to the widest cell of a column.
pub const PADDING: usize = 1;

/// Buffers rows of cells and writes them right-aligned in columns.
///
/// Column widths are computed over the rows buffered since the last flush,
/// so flushing often gives each batch its own alignment.
pub struct TabWriter<W: Write> {
    out: W,
    rows: Vec<Vec<String>>,
}

impl<W: Write> TabWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            rows: Vec::new(),
        }
    }

    pub fn write_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths = Vec::new();

        for row in &self.rows {
            for (col, cell) in row.iter().enumerate() {
                let width = (cell.chars().count() + PADDING).max(MIN_WIDTH);

                match widths.get_mut(col) {
                    Some(w) if *w < width => *w = width,
                    Some(_) => (),
                    None => widths.push(width),
                }
            }
        }

        widths
    }

    /// Writes all buffered rows and flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        let widths = self.widths();

        for row in self.rows.drain(..) {
            for (cell, &width) in row.iter().zip(&widths) {
                write!(self.out, "{cell:>width$}")?;
            }
            writeln!(self.out)?;
        }

        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// When the report is flushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushMode {
    /// After every record. Lines show up immediately but each one is aligned
    /// on its own.
    Streaming,
    /// Once at the end, with consistent columns across the report.
    Batched,
}

impl FlushMode {
    pub fn from_right_justify(right_justify: bool) -> Self {
        if right_justify {
            Self::Batched
        } else {
            Self::Streaming
        }
    }
}

/// Writes one line per record: size, extension and path.
///
/// # Errors
///
/// Returns any error from the output writer.
pub fn report<W: Write>(records: &[FileRecord], mode: FlushMode, out: W) -> io::Result<W> {
    let mut tw = TabWriter::new(out);

    for record in records {
        tw.write_row(record.cells());

        if mode == FlushMode::Streaming {
            tw.flush()?;
        }
    }

    tw.flush()?;
    Ok(tw.into_inner())
}
