//! Domain types: price bars, trades and their event streams, snapshots, ids.

pub mod bar;
pub mod ids;
pub mod snapshot;
pub mod trade;

pub use bar::PriceBar;
pub use ids::{CurrencyId, InstrumentId};
pub use snapshot::DailySnapshot;
pub use trade::{CashTransaction, FxTransaction, Order, Trade};
