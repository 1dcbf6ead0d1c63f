//! DailySnapshot — one row of the replay's output history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// End-of-day valuation snapshot, all amounts in base currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySnapshot {
    pub date: NaiveDate,
    /// Cash (converted to base) plus mark-to-market value of open positions.
    pub equity: f64,
    /// Realized plus unrealized profit and loss since trade open.
    pub pnl: f64,
    /// Capital committed to open positions, option legs scaled by the
    /// trade's capital multiplier.
    pub capital_used: f64,
}
