//! The replay engine: event queues, tracker, valuation policy, day loop.

pub mod cancel;
pub mod error;
pub mod queue;
pub mod replay;
pub mod tracker;
pub mod valuation;

pub use cancel::CancelToken;
pub use error::ReplayError;
pub use queue::EventQueue;
pub use replay::{replay_trade, replay_window, run_replay, ReplayResult};
pub use tracker::TradeTracker;
pub use valuation::{CostBasisValuation, PositionState, ValuationPolicy};
