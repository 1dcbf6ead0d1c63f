//! Reference data provider traits and structured error types.
//!
//! The provider traits abstract over the backing store (database, files,
//! in-memory fixtures) so the replay engine can be tested without I/O.

use super::fx::FxRateRecord;
use crate::domain::{CurrencyId, InstrumentId, PriceBar};
use chrono::NaiveDate;
use thiserror::Error;

/// Structured error types for reference data operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("no price history for {instrument}")]
    InstrumentNotFound { instrument: InstrumentId },

    #[error("no FX rates found for {currency}")]
    CurrencyNotFound { currency: CurrencyId },

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("data error: {0}")]
    Other(String),
}

/// Daily price bars for instruments.
///
/// Implementations return bars ascending by date; the loader sorts
/// defensively before constructing a series.
pub trait PriceHistoryProvider: Send + Sync {
    fn price_history(
        &self,
        instrument: InstrumentId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>, DataError>;
}

/// Conversion rates from a currency to the base currency, ascending by date.
/// An empty result is valid (the currency has no rate history yet).
pub trait FxRateProvider: Send + Sync {
    fn fx_rates(&self, currency: CurrencyId) -> Result<Vec<FxRateRecord>, DataError>;
}

/// The most recent globally known valuation date, used to bound the replay
/// window for trades without a close date.
pub trait ValuationDateProvider: Send + Sync {
    fn latest_valuation_date(&self) -> Result<Option<NaiveDate>, DataError>;
}
