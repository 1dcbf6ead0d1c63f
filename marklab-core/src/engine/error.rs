//! Typed errors surfaced by the replay entry points.

use crate::data::{DataError, SeriesError};
use crate::domain::{CurrencyId, InstrumentId};
use thiserror::Error;

/// Everything that can stop one trade's replay. All variants are surfaced to
/// the caller; none are swallowed into a plausible-looking history.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The trade has no close date and the valuation history has no entries,
    /// so the replay window cannot be bounded.
    #[error("cannot bound replay window: trade is open and no valuation dates exist")]
    EmptyReferenceHistory,

    /// An order references an instrument with no loaded price series.
    #[error("no price series loaded for {instrument}")]
    MissingInstrumentSeries { instrument: InstrumentId },

    /// An event references a non-base currency with no loaded FX series.
    #[error("no FX series loaded for {currency}")]
    MissingCurrencySeries { currency: CurrencyId },

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Data(#[from] DataError),

    /// The replay's cancel token was triggered.
    #[error("replay cancelled")]
    Cancelled,
}
