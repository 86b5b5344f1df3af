//! growth — command-line runner for the rust_fg engine.
//!
//! Runs one growth to completion and writes three files to `./output`:
//! `points.csv`, `round_summaries.csv`, and the plain `growth.log` round
//! log.  Pass a JSON configuration file as the only argument; every field
//! is optional, so `{}` (or no argument at all) runs the default 320 × 200
//! tree.
//!
//! ```json
//! { "model": "forest", "width": 640, "height": 400, "seed_policy": "fixed", "seed": 7007 }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use fg_core::{GrowthConfig, Point};
use fg_engine::{Engine, Grid, GrowthObserver, Progress};
use fg_output::{CsvWriter, LogWriter, RunOutputObserver};

const OUTPUT_DIR: &str = "output";
const LOG_FILE:   &str = "growth.log";

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Feeds both output backends and prints one progress line per round.
struct ConsoleObserver {
    csv: RunOutputObserver<CsvWriter>,
    log: RunOutputObserver<LogWriter>,
}

impl GrowthObserver for ConsoleObserver {
    fn run_started(&mut self) {
        self.csv.run_started();
        self.log.run_started();
    }

    fn render(&mut self, grid: &Grid, points: &[Point]) {
        self.csv.render(grid, points);
        self.log.render(grid, points);
    }

    fn progress(&mut self, progress: &Progress) {
        self.csv.progress(progress);
        self.log.progress(progress);
        println!(
            "  depth {:>4} / {:<4}  points {:>8}  {:>7.1}s",
            progress.max_d, progress.bound, progress.points, progress.elapsed_secs
        );
    }
}

impl ConsoleObserver {
    fn finish(&mut self) -> Result<()> {
        self.csv.finish()?;
        self.log.finish()?;
        if let Some(e) = self.csv.take_error() {
            return Err(e.into());
        }
        if let Some(e) = self.log.take_error() {
            return Err(e.into());
        }
        Ok(())
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config() -> Result<GrowthConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config file {path}"))
        }
        None => Ok(GrowthConfig::default()),
    }
}

fn main() -> Result<()> {
    let config = load_config()?;

    println!("=== growth — rust_fg fractal growth ===");
    println!(
        "Model: {:?}  |  Grid: {}  |  Threads: {}  |  Seeds: {:?}",
        config.model,
        if config.three_d {
            format!("{} x {} x {}", config.length, config.width, config.height)
        } else {
            format!("{} x {}", config.width, config.height)
        },
        config.threads,
        config.seed_policy,
    );
    println!();

    let out_dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out_dir).with_context(|| format!("creating {OUTPUT_DIR}/"))?;

    let mut observer = ConsoleObserver {
        csv: RunOutputObserver::new(CsvWriter::new(out_dir)?),
        log: RunOutputObserver::new(LogWriter::new(&out_dir.join(LOG_FILE))?),
    };

    let mut engine = Engine::new(config)?;
    let summary = engine.run(&mut observer)?;
    observer.finish()?;

    println!();
    println!(
        "Done: {} points to depth {} / {} in {} round(s), {:.1}s",
        summary.points, summary.max_d, summary.bound, summary.rounds, summary.elapsed_secs
    );
    println!("Output written to {OUTPUT_DIR}/");
    Ok(())
}
