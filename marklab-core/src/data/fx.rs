//! Lifting point-in-time FX rates into degenerate bar series.

use super::series::TimeSeries;
use crate::domain::PriceBar;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated conversion rate from a currency to base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxRateRecord {
    pub date: NaiveDate,
    pub rate: f64,
}

/// Build a `TimeSeries` of flat bars, one per rate record, so FX rates are
/// consumed identically to instrument price series. No interpolation and no
/// gap filling; missing dates fall to the series' carry-forward semantics.
pub fn fx_series(records: &[FxRateRecord]) -> TimeSeries {
    TimeSeries::new(
        records
            .iter()
            .map(|r| PriceBar::flat(r.date, r.rate))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_record_becomes_single_flat_bar() {
        let series = fx_series(&[FxRateRecord {
            date: date(2020, 1, 1),
            rate: 1.25,
        }]);
        assert_eq!(series.len(), 1);

        let mut series = series;
        series.advance_to(date(2020, 1, 1)).unwrap();
        let bar = series.current().unwrap();
        assert_eq!(bar.date, date(2020, 1, 1));
        assert_eq!(bar.open, 1.25);
        assert_eq!(bar.high, 1.25);
        assert_eq!(bar.low, 1.25);
        assert_eq!(bar.close, 1.25);
        assert_eq!(bar.adj_open, 1.25);
        assert_eq!(bar.adj_high, 1.25);
        assert_eq!(bar.adj_low, 1.25);
        assert_eq!(bar.adj_close, 1.25);
    }

    #[test]
    fn no_records_builds_an_empty_series() {
        let series = fx_series(&[]);
        assert!(series.is_empty());
        assert!(series.current().is_none());
    }

    #[test]
    fn gaps_are_not_filled() {
        let series = fx_series(&[
            FxRateRecord { date: date(2020, 1, 1), rate: 1.1 },
            FxRateRecord { date: date(2020, 1, 10), rate: 1.2 },
        ]);
        assert_eq!(series.len(), 2);

        let mut series = series;
        series.advance_to(date(2020, 1, 5)).unwrap();
        // Carry-forward holds the 1.1 bar through the gap.
        assert_eq!(series.current().unwrap().close, 1.1);
    }
}
