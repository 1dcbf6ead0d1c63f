//! Reference data: time series, FX bar lifting, provider traits, loading.

pub mod fx;
pub mod loader;
pub mod provider;
pub mod series;

pub use fx::{fx_series, FxRateRecord};
pub use loader::ReferenceData;
pub use provider::{DataError, FxRateProvider, PriceHistoryProvider, ValuationDateProvider};
pub use series::{SeriesError, TimeSeries};
