//! Day-by-day replay loop — the simulation orchestrator.
//!
//! One calendar day at a time (not only trading days): advance every series
//! to the day, drain due events into the tracker, take the day's snapshot,
//! and stop early once every queue is drained and the trade has unwound.

use super::cancel::CancelToken;
use super::error::ReplayError;
use super::queue::EventQueue;
use super::tracker::TradeTracker;
use crate::data::{
    FxRateProvider, PriceHistoryProvider, ReferenceData, ValuationDateProvider,
};
use crate::domain::{DailySnapshot, Trade};
use chrono::NaiveDate;
use tracing::debug;

/// Output of one trade's replay.
#[derive(Debug)]
pub struct ReplayResult {
    /// One snapshot per simulated day, in date order.
    pub history: Vec<DailySnapshot>,
    /// Open flag after the final simulated day.
    pub final_open: bool,
    /// Calendar days actually stepped (early exit makes this smaller than
    /// the full window).
    pub days_simulated: usize,
}

/// Inclusive simulation window for a trade.
///
/// Start is the trade's open date. End is the close date for a closed trade,
/// otherwise the latest globally known valuation date. An open trade with no
/// valuation history cannot be bounded and is `EmptyReferenceHistory`.
pub fn replay_window(
    trade: &Trade,
    valuation_dates: &dyn ValuationDateProvider,
) -> Result<(NaiveDate, NaiveDate), ReplayError> {
    let start = trade.open_date;
    let end = match trade.close_date.filter(|_| trade.is_closed) {
        Some(close) => close,
        None => valuation_dates
            .latest_valuation_date()?
            .ok_or(ReplayError::EmptyReferenceHistory)?,
    };
    Ok((start, end))
}

/// Replay one trade against already-loaded reference data.
///
/// `reference` is consumed: series cursors are stateful and belong to
/// exactly one run.
pub fn run_replay(
    trade: &Trade,
    mut reference: ReferenceData,
    valuation_dates: &dyn ValuationDateProvider,
    cancel: &CancelToken,
) -> Result<ReplayResult, ReplayError> {
    let (start, end) = replay_window(trade, valuation_dates)?;
    debug!(%start, %end, "replaying trade");

    let mut orders = EventQueue::new(trade.orders.clone(), |o| o.trade_date);
    let mut cash = EventQueue::new(trade.cash_transactions.clone(), |t| t.date);
    let mut fx = EventQueue::new(trade.fx_transactions.clone(), |t| t.date());

    let mut tracker = TradeTracker::new(trade.options_capital_multiplier);
    let mut days_simulated = 0;

    let mut day = start;
    while day <= end {
        if cancel.is_cancelled() {
            return Err(ReplayError::Cancelled);
        }

        for series in reference.instruments.values_mut() {
            series.advance_to(day)?;
        }
        for series in reference.currencies.values_mut() {
            series.advance_to(day)?;
        }

        while let Some(order) = orders.pop_due(day) {
            tracker.add_order(order);
        }
        while let Some(tx) = cash.pop_due(day) {
            tracker.add_cash_transaction(tx);
        }
        while let Some(tx) = fx.pop_due(day) {
            tracker.add_fx_transaction(tx);
        }

        tracker.update(day, &reference.instruments, &reference.currencies)?;
        days_simulated += 1;

        if orders.is_empty() && cash.is_empty() && fx.is_empty() && !tracker.is_open() {
            debug!(%day, "trade fully unwound, stopping early");
            break;
        }

        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    debug!(days_simulated, final_open = tracker.is_open(), "replay finished");
    Ok(ReplayResult {
        final_open: tracker.is_open(),
        days_simulated,
        history: tracker.into_history(),
    })
}

/// Full per-trade entry point: resolve the window, load every series the
/// trade needs (all fetches complete before the first day is stepped), then
/// run the day loop.
pub fn replay_trade(
    trade: &Trade,
    prices: &dyn PriceHistoryProvider,
    fx: &dyn FxRateProvider,
    valuation_dates: &dyn ValuationDateProvider,
    cancel: &CancelToken,
) -> Result<ReplayResult, ReplayError> {
    let (start, end) = replay_window(trade, valuation_dates)?;
    let reference = ReferenceData::load(trade, start, end, prices, fx)?;
    run_replay(trade, reference, valuation_dates, cancel)
}
