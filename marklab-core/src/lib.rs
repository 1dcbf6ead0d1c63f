//! Marklab Core — day-by-day mark-to-market trade replay.
//!
//! This crate contains the heart of the replay engine:
//! - Domain types (price bars, trades, orders, cash and FX transactions)
//! - Forward-only time series with carry-forward semantics
//! - FX rate lifting into degenerate bar series
//! - Reference data loading (one series per instrument and currency)
//! - The calendar-day replay loop with early exit on full unwind
//! - The trade tracker and its pluggable valuation policy

pub mod data;
pub mod domain;
pub mod engine;
