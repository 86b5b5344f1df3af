//! Plain-text round log backend.
//!
//! One line per round, `<max_d> <points>`, in the format the original
//! benchmark logged for post-processing scripts.  Points are not written.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use fg_core::Point;

use crate::writer::OutputWriter;
use crate::{OutputResult, RoundRow};

/// Writes the per-round `<max_d> <points>` log.
pub struct LogWriter {
    file:     BufWriter<File>,
    finished: bool,
}

impl LogWriter {
    /// Create (or truncate) the log file at `path`.
    pub fn new(path: &Path) -> OutputResult<Self> {
        Ok(Self {
            file:     BufWriter::new(File::create(path)?),
            finished: false,
        })
    }
}

impl OutputWriter for LogWriter {
    fn write_round(&mut self, row: &RoundRow) -> OutputResult<()> {
        writeln!(self.file, "{} {}", row.max_d, row.points)?;
        Ok(())
    }

    /// The log has no point representation.
    fn write_points(&mut self, _points: &[Point]) -> OutputResult<()> {
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.file.flush()?;
        Ok(())
    }
}
