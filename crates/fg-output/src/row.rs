//! Output row types shared by all backends.

/// One row per round, written after the round's threads have joined.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoundRow {
    /// 1-based round number.
    pub round: u64,
    /// Frontier depth at the end of the round.
    pub max_d: u32,
    /// Total committed points at the end of the round.
    pub points: u64,
    /// Wall-clock seconds since the run started.
    pub elapsed_secs: f64,
}
