//! TradeTracker — the sole mutable valuation state for one trade's replay.
//!
//! The tracker ingests applied events (`add_order`, `add_cash_transaction`,
//! `add_fx_transaction`) and, once per simulated day, recomputes equity, P&L
//! and capital usage against the current series cursors, appending a dated
//! snapshot to its history.

use super::error::ReplayError;
use super::valuation::{CostBasisValuation, PositionState, ValuationPolicy};
use crate::data::TimeSeries;
use crate::domain::{
    CashTransaction, CurrencyId, DailySnapshot, FxTransaction, InstrumentId, Order, PriceBar,
};
use chrono::NaiveDate;
use std::collections::HashMap;

const FLAT_EPSILON: f64 = 1e-9;

/// Per-trade accumulator: positions, cash balances, realized P&L and the
/// append-only snapshot history.
pub struct TradeTracker {
    positions: HashMap<InstrumentId, TrackedPosition>,
    /// Running cash balance per currency, base included.
    cash: HashMap<CurrencyId, f64>,
    /// Realized P&L per currency, converted to base at valuation time.
    realized: HashMap<CurrencyId, f64>,
    options_capital_multiplier: f64,
    policy: Box<dyn ValuationPolicy>,
    open: bool,
    history: Vec<DailySnapshot>,
}

struct TrackedPosition {
    state: PositionState,
    currency: CurrencyId,
}

impl TradeTracker {
    pub fn new(options_capital_multiplier: f64) -> Self {
        Self::with_policy(options_capital_multiplier, Box::new(CostBasisValuation))
    }

    pub fn with_policy(options_capital_multiplier: f64, policy: Box<dyn ValuationPolicy>) -> Self {
        Self {
            positions: HashMap::new(),
            cash: HashMap::new(),
            realized: HashMap::new(),
            options_capital_multiplier,
            policy,
            open: true,
            history: Vec::new(),
        }
    }

    /// Apply an order: cash leg in the order's currency, position bookkeeping
    /// with average-cost realization on reductions. A fully unwound book
    /// flips the open flag.
    pub fn add_order(&mut self, order: &Order) {
        *self.cash.entry(order.currency).or_default() -= order.quantity * order.price;

        let entry = self
            .positions
            .entry(order.instrument)
            .or_insert_with(|| TrackedPosition {
                state: PositionState {
                    quantity: 0.0,
                    avg_entry_price: 0.0,
                    is_option: order.is_option,
                },
                currency: order.currency,
            });

        let pos = &mut entry.state;
        let same_direction =
            pos.quantity.abs() < FLAT_EPSILON || pos.quantity.signum() == order.quantity.signum();

        if same_direction {
            let total_cost = pos.quantity * pos.avg_entry_price + order.quantity * order.price;
            pos.quantity += order.quantity;
            pos.avg_entry_price = if pos.quantity.abs() < FLAT_EPSILON {
                0.0
            } else {
                total_cost / pos.quantity
            };
        } else {
            // Reduction, possibly crossing through flat.
            let direction = pos.quantity.signum();
            let closed = order.quantity.abs().min(pos.quantity.abs());
            *self.realized.entry(order.currency).or_default() +=
                closed * direction * (order.price - pos.avg_entry_price);

            pos.quantity -= direction * closed;
            if pos.quantity.abs() < FLAT_EPSILON {
                let remainder = order.quantity + direction * closed;
                if remainder.abs() < FLAT_EPSILON {
                    pos.quantity = 0.0;
                    pos.avg_entry_price = 0.0;
                } else {
                    // Crossed through flat: the excess opens a fresh position
                    // at the order price.
                    pos.quantity = remainder;
                    pos.avg_entry_price = order.price;
                }
            }
        }

        self.open = self.any_open_position();
    }

    /// Adjust the running balance in the transaction's currency.
    pub fn add_cash_transaction(&mut self, tx: &CashTransaction) {
        *self.cash.entry(tx.currency).or_default() += tx.amount;
    }

    /// Record a conversion: `amount` leaves the non-base leg, `amount * rate`
    /// arrives in base cash.
    pub fn add_fx_transaction(&mut self, tx: &FxTransaction) {
        *self.cash.entry(tx.currency).or_default() -= tx.amount;
        *self.cash.entry(CurrencyId::BASE).or_default() += tx.amount * tx.rate;
    }

    /// Daily mark-to-market: value every position at its series' current bar
    /// (carry-forward), convert non-base components through the matching FX
    /// series, append the day's snapshot, and re-evaluate the open flag.
    ///
    /// A missing map entry is fatal (`MissingInstrumentSeries` /
    /// `MissingCurrencySeries`); a series that merely has no current bar yet
    /// is handled by the valuation policy.
    pub fn update(
        &mut self,
        date: NaiveDate,
        instruments: &HashMap<InstrumentId, TimeSeries>,
        currencies: &HashMap<CurrencyId, TimeSeries>,
    ) -> Result<(), ReplayError> {
        let mut position_value = 0.0;
        let mut unrealized = 0.0;
        let mut capital_used = 0.0;

        for (&instrument, tracked) in &self.positions {
            if tracked.state.is_flat() {
                continue;
            }
            let series = instruments
                .get(&instrument)
                .ok_or(ReplayError::MissingInstrumentSeries { instrument })?;

            let mark = self.policy.mark_price(&tracked.state, series.current());
            let local_value = tracked.state.quantity * mark;
            let local_unrealized = tracked.state.quantity * (mark - tracked.state.avg_entry_price);
            let local_capital = self
                .policy
                .capital_required(&tracked.state, self.options_capital_multiplier);

            if tracked.currency.is_base() {
                position_value += local_value;
                unrealized += local_unrealized;
                capital_used += local_capital;
            } else {
                let fx_bar = fx_bar(tracked.currency, currencies)?;
                position_value += self.policy.to_base(local_value, fx_bar);
                unrealized += self.policy.to_base(local_unrealized, fx_bar);
                capital_used += self.policy.to_base(local_capital, fx_bar);
            }
        }

        let mut cash_value = 0.0;
        for (&currency, &balance) in &self.cash {
            if currency.is_base() {
                cash_value += balance;
            } else {
                cash_value += self.policy.to_base(balance, fx_bar(currency, currencies)?);
            }
        }

        let mut realized = 0.0;
        for (&currency, &amount) in &self.realized {
            if currency.is_base() {
                realized += amount;
            } else {
                realized += self.policy.to_base(amount, fx_bar(currency, currencies)?);
            }
        }

        self.open = self.any_open_position();
        self.history.push(DailySnapshot {
            date,
            equity: cash_value + position_value,
            pnl: realized + unrealized,
            capital_used,
        });
        Ok(())
    }

    /// Whether the trade still has economic exposure.
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn history(&self) -> &[DailySnapshot] {
        &self.history
    }

    pub fn into_history(self) -> Vec<DailySnapshot> {
        self.history
    }

    fn any_open_position(&self) -> bool {
        self.positions.values().any(|p| !p.state.is_flat())
    }
}

/// Current FX bar for a non-base currency, or the typed missing-series error.
fn fx_bar<'a>(
    currency: CurrencyId,
    currencies: &'a HashMap<CurrencyId, TimeSeries>,
) -> Result<Option<&'a PriceBar>, ReplayError> {
    let series = currencies
        .get(&currency)
        .ok_or(ReplayError::MissingCurrencySeries { currency })?;
    Ok(series.current())
}
