//! `fg-output` — run output writers for the rust_fg engine.
//!
//! Two backends are provided:
//!
//! | Backend   | Files created                          |
//! |-----------|----------------------------------------|
//! | CSV       | `points.csv`, `round_summaries.csv`    |
//! | Plain log | one file, `<max_d> <points>` per round  |
//!
//! Both implement [`OutputWriter`] and are driven by [`RunOutputObserver`],
//! which implements `fg_engine::GrowthObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fg_output::{CsvWriter, RunOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RunOutputObserver::new(writer);
//! engine.run(&mut obs)?;
//! obs.finish()?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod log;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use log::LogWriter;
pub use observer::RunOutputObserver;
pub use row::RoundRow;
pub use writer::OutputWriter;
