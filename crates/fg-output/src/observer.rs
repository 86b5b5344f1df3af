//! `RunOutputObserver<W>` — bridges `GrowthObserver` to an `OutputWriter`.

use fg_core::Point;
use fg_engine::{Grid, GrowthObserver, Progress};

use crate::OutputError;
use crate::row::RoundRow;
use crate::writer::OutputWriter;

/// A [`GrowthObserver`] that writes round summaries and committed points to
/// any [`OutputWriter`] backend (CSV, plain log).
///
/// The engine's point list is append-only in commit order, so each render
/// writes only the points committed since the previous round.  The cursor
/// and round counter rearm in `run_started`, so one observer may span
/// several runs; all runs land in the same backend files.
///
/// Errors from the writer are stored internally because `GrowthObserver`
/// methods have no return value.  After `engine.run()` returns, call
/// [`finish`][Self::finish] and check [`take_error`][Self::take_error].
pub struct RunOutputObserver<W: OutputWriter> {
    writer:     W,
    round:      u64,
    written:    usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RunOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            round: 0,
            written: 0,
            last_error: None,
        }
    }

    /// Flush the backend.  Call after `engine.run()` returns.
    pub fn finish(&mut self) -> crate::OutputResult<()> {
        self.writer.finish()
    }

    /// Take the stored write error (if any) after `engine.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> GrowthObserver for RunOutputObserver<W> {
    fn run_started(&mut self) {
        self.round = 0;
        self.written = 0;
    }

    fn render(&mut self, _grid: &Grid, points: &[Point]) {
        let new = &points[self.written..];
        self.written = points.len();
        if !new.is_empty() {
            let result = self.writer.write_points(new);
            self.store_err(result);
        }
    }

    fn progress(&mut self, progress: &Progress) {
        self.round += 1;
        let row = RoundRow {
            round:        self.round,
            max_d:        progress.max_d,
            points:       progress.points as u64,
            elapsed_secs: progress.elapsed_secs,
        };
        let result = self.writer.write_round(&row);
        self.store_err(result);
    }
}
