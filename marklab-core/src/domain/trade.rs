//! Trade — the aggregate root under replay, with its three event streams.

use super::ids::{CurrencyId, InstrumentId};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// An executed order belonging to one trade.
///
/// Positive quantity buys, negative quantity sells. `price` is in the
/// order's own currency; conversion to base happens at valuation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub trade_date: NaiveDate,
    pub instrument: InstrumentId,
    pub currency: CurrencyId,
    pub quantity: f64,
    pub price: f64,
    /// Option positions have their capital requirement scaled by the
    /// trade's capital multiplier.
    pub is_option: bool,
}

/// A cash movement (deposit, fee, dividend, margin interest) in one currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashTransaction {
    pub date: NaiveDate,
    pub currency: CurrencyId,
    pub amount: f64,
}

/// A currency conversion: `amount` leaves the non-base leg, `amount * rate`
/// arrives in base cash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FxTransaction {
    pub timestamp: NaiveDateTime,
    /// The non-base leg of the conversion.
    pub currency: CurrencyId,
    pub amount: f64,
    pub rate: f64,
}

impl FxTransaction {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// The trade aggregate. Any of the three event collections may be absent,
/// which the engine normalizes to empty at its boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub open_date: NaiveDate,
    pub close_date: Option<NaiveDate>,
    pub is_closed: bool,
    /// Scalar applied to option-position capital requirements.
    pub options_capital_multiplier: f64,
    pub orders: Option<Vec<Order>>,
    pub cash_transactions: Option<Vec<CashTransaction>>,
    pub fx_transactions: Option<Vec<FxTransaction>>,
}

impl Trade {
    pub fn orders(&self) -> &[Order] {
        self.orders.as_deref().unwrap_or(&[])
    }

    pub fn cash_transactions(&self) -> &[CashTransaction] {
        self.cash_transactions.as_deref().unwrap_or(&[])
    }

    pub fn fx_transactions(&self) -> &[FxTransaction] {
        self.fx_transactions.as_deref().unwrap_or(&[])
    }
}
