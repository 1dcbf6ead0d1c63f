//! Marklab Runner — batch replay orchestration and artifact export.
//!
//! Replays many independent trades in parallel (one fresh reference data set
//! per trade) and writes their histories out for reporting tools.

pub mod batch;
pub mod export;

pub use batch::replay_all;
pub use export::{write_history_csv, write_history_json};
