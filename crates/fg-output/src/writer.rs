//! The `OutputWriter` trait implemented by all backend writers.

use fg_core::Point;

use crate::{OutputResult, RoundRow};

/// Trait implemented by the CSV and plain-log writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`RunOutputObserver::take_error`][crate::RunOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one end-of-round summary row.
    fn write_round(&mut self, row: &RoundRow) -> OutputResult<()>;

    /// Write a batch of newly committed points, in commit order.
    ///
    /// Backends without a point representation may ignore this.
    fn write_points(&mut self, points: &[Point]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
