//! Reference data loading — one series per distinct instrument and currency.
//!
//! Loading runs to completion before the day loop starts: every map entry is
//! resolved (or the whole load fails) before `ReferenceData` is handed to the
//! replay. Series cursors are stateful, so a `ReferenceData` belongs to
//! exactly one replay run and is never shared.

use super::fx::fx_series;
use super::provider::{DataError, FxRateProvider, PriceHistoryProvider};
use super::series::TimeSeries;
use crate::domain::{CurrencyId, InstrumentId, Trade};
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// Per-trade reference data: one price series per instrument touched by the
/// trade's orders, one FX series per non-base currency touched by any event.
#[derive(Debug)]
pub struct ReferenceData {
    pub instruments: HashMap<InstrumentId, TimeSeries>,
    pub currencies: HashMap<CurrencyId, TimeSeries>,
}

impl ReferenceData {
    /// Fetch and wrap every series the trade needs over `[start, end]`.
    pub fn load(
        trade: &Trade,
        start: NaiveDate,
        end: NaiveDate,
        prices: &dyn PriceHistoryProvider,
        fx: &dyn FxRateProvider,
    ) -> Result<Self, DataError> {
        let instrument_ids = distinct_instruments(trade);
        let currency_ids = distinct_currencies(trade);
        debug!(
            instruments = instrument_ids.len(),
            currencies = currency_ids.len(),
            %start,
            %end,
            "loading reference data"
        );

        let mut instruments = HashMap::new();
        for id in instrument_ids {
            let mut bars = prices.price_history(id, start, end)?;
            if !bars.windows(2).all(|w| w[0].date <= w[1].date) {
                warn!(instrument = %id, "price history not sorted, sorting defensively");
                bars.sort_by_key(|b| b.date);
            }
            instruments.insert(id, TimeSeries::new(bars));
        }

        let mut currencies = HashMap::new();
        for id in currency_ids {
            let mut records = fx.fx_rates(id)?;
            if !records.windows(2).all(|w| w[0].date <= w[1].date) {
                warn!(currency = %id, "FX rates not sorted, sorting defensively");
                records.sort_by_key(|r| r.date);
            }
            currencies.insert(id, fx_series(&records));
        }

        Ok(Self {
            instruments,
            currencies,
        })
    }
}

/// Every instrument id referenced by the trade's orders, de-duplicated.
fn distinct_instruments(trade: &Trade) -> BTreeSet<InstrumentId> {
    trade.orders().iter().map(|o| o.instrument).collect()
}

/// Every non-base currency id referenced by any of the three event streams,
/// de-duplicated. Base currencies (id <= 1) need no conversion series.
fn distinct_currencies(trade: &Trade) -> BTreeSet<CurrencyId> {
    let orders = trade.orders().iter().map(|o| o.currency);
    let cash = trade.cash_transactions().iter().map(|t| t.currency);
    let fx = trade.fx_transactions().iter().map(|t| t.currency);
    orders
        .chain(cash)
        .chain(fx)
        .filter(|c| !c.is_base())
        .collect()
}
