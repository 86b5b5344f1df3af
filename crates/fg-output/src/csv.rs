//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `points.csv`
//! - `round_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use fg_core::Point;

use crate::writer::OutputWriter;
use crate::{OutputResult, RoundRow};

/// Writes run output to two CSV files.
pub struct CsvWriter {
    points:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut points = Writer::from_path(dir.join("points.csv"))?;
        points.write_record(["x", "y", "z", "color"])?;

        let mut summaries = Writer::from_path(dir.join("round_summaries.csv"))?;
        summaries.write_record(["round", "max_d", "points", "elapsed_secs"])?;

        Ok(Self {
            points,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_round(&mut self, row: &RoundRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.round.to_string(),
            row.max_d.to_string(),
            row.points.to_string(),
            row.elapsed_secs.to_string(),
        ])?;
        Ok(())
    }

    fn write_points(&mut self, points: &[Point]) -> OutputResult<()> {
        for p in points {
            self.points.write_record(&[
                p.x.to_string(),
                p.y.to_string(),
                p.z.to_string(),
                p.color.0.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.points.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
