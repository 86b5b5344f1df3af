//! `fg-core` — foundational types for the `rust_fg` fractal growth engine.
//!
//! This crate is a dependency of every other `fg-*` crate.  It intentionally
//! has no `fg-*` dependencies and minimal external ones (only `rand`,
//! `rand_chacha`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`config`] | `GrowthConfig`, `ModelKind`, `SeedPolicy`                |
//! | [`point`]  | `Point`, `ColorIndex`, the RGB palette                   |
//! | [`rng`]    | `WalkerRng` (per-thread generator), `RngAlgorithm`       |
//! | [`error`]  | `FgError`, `FgResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                               |
//! |---------|----------------------------------------------------------------------|
//! | `serde` | Serde derives on config and point types, for JSON run configurations |

pub mod config;
pub mod error;
pub mod point;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{GrowthConfig, ModelKind, SeedPolicy};
pub use error::{FgError, FgResult};
pub use point::{COLOR_TABLE, ColorIndex, Point};
pub use rng::{RngAlgorithm, WalkerRng};
