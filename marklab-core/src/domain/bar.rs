//! PriceBar — the fundamental market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily OHLC bar for one instrument or one currency pair.
///
/// Both raw and adjusted columns are carried; valuation uses the adjusted
/// close so corporate actions do not distort mark-to-market equity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adj_open: f64,
    pub adj_high: f64,
    pub adj_low: f64,
    pub adj_close: f64,
}

impl PriceBar {
    /// A degenerate bar with every OHLC field (raw and adjusted) equal to
    /// `value`. This is how FX rate points are lifted into bar form.
    pub fn flat(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            open: value,
            high: value,
            low: value,
            close: value,
            adj_open: value,
            adj_high: value,
            adj_low: value,
            adj_close: value,
        }
    }

    /// Basic OHLC sanity check: high >= low, range brackets open and close.
    pub fn is_sane(&self) -> bool {
        !self.close.is_nan()
            && self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
    }
}
