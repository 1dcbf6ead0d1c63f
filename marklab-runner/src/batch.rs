//! Parallel replay across independent trades.
//!
//! Each trade gets a fresh `ReferenceData` inside `replay_trade` — series
//! cursors are stateful, so nothing is shared between worker threads except
//! the read-only providers and the cancel token.

use marklab_core::data::{FxRateProvider, PriceHistoryProvider, ValuationDateProvider};
use marklab_core::domain::Trade;
use marklab_core::engine::{replay_trade, CancelToken, ReplayError, ReplayResult};
use rayon::prelude::*;
use tracing::info;

/// Replay every trade, in parallel, collecting per-trade results without
/// aborting siblings on failure.
pub fn replay_all(
    trades: &[Trade],
    prices: &dyn PriceHistoryProvider,
    fx: &dyn FxRateProvider,
    valuation_dates: &dyn ValuationDateProvider,
    cancel: &CancelToken,
) -> Vec<Result<ReplayResult, ReplayError>> {
    let results: Vec<_> = trades
        .par_iter()
        .map(|trade| replay_trade(trade, prices, fx, valuation_dates, cancel))
        .collect();

    let succeeded = results.iter().filter(|r| r.is_ok()).count();
    info!(
        total = results.len(),
        succeeded,
        failed = results.len() - succeeded,
        "batch replay complete"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use marklab_core::data::{DataError, FxRateRecord};
    use marklab_core::domain::{CurrencyId, InstrumentId, Order, PriceBar};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).unwrap()
    }

    struct FlatStore;

    impl PriceHistoryProvider for FlatStore {
        fn price_history(
            &self,
            _instrument: InstrumentId,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<Vec<PriceBar>, DataError> {
            let mut bars = Vec::new();
            let mut day = start;
            while day <= end {
                bars.push(PriceBar::flat(day, 100.0));
                day = day.succ_opt().unwrap();
            }
            Ok(bars)
        }
    }

    impl FxRateProvider for FlatStore {
        fn fx_rates(&self, _currency: CurrencyId) -> Result<Vec<FxRateRecord>, DataError> {
            Ok(Vec::new())
        }
    }

    impl ValuationDateProvider for FlatStore {
        fn latest_valuation_date(&self) -> Result<Option<NaiveDate>, DataError> {
            Ok(Some(date(10)))
        }
    }

    fn trade(open: u32) -> Trade {
        Trade {
            open_date: date(open),
            close_date: None,
            is_closed: false,
            options_capital_multiplier: 1.0,
            orders: Some(vec![Order {
                trade_date: date(open),
                instrument: InstrumentId(1),
                currency: CurrencyId(1),
                quantity: 1.0,
                price: 100.0,
                is_option: false,
            }]),
            cash_transactions: None,
            fx_transactions: None,
        }
    }

    #[test]
    fn replays_every_trade_independently() {
        let trades = vec![trade(2), trade(4), trade(8)];
        let store = FlatStore;
        let results = replay_all(&trades, &store, &store, &store, &CancelToken::new());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().history.len(), 9);
        assert_eq!(results[1].as_ref().unwrap().history.len(), 7);
        assert_eq!(results[2].as_ref().unwrap().history.len(), 3);
    }

    struct FlakyStore;

    impl PriceHistoryProvider for FlakyStore {
        fn price_history(
            &self,
            instrument: InstrumentId,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<Vec<PriceBar>, DataError> {
            if instrument == InstrumentId(99) {
                return Err(DataError::InstrumentNotFound { instrument });
            }
            FlatStore.price_history(instrument, start, end)
        }
    }

    #[test]
    fn a_failing_trade_does_not_abort_siblings() {
        let good = trade(2);
        let mut bad = trade(2);
        bad.orders.as_mut().unwrap()[0].instrument = InstrumentId(99);

        let store = FlatStore;
        let results = replay_all(&[good, bad], &FlakyStore, &store, &store, &CancelToken::new());
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(ReplayError::Data(_))));
    }
}
