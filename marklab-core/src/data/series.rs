//! TimeSeries — a date-ordered bar sequence with a forward-only cursor.

use crate::domain::PriceBar;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by cursor movement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    /// `advance_to` was called with a date earlier than a previous call.
    /// The cursor never rewinds; this is a caller bug, not a data gap.
    #[error("non-monotonic advance: cursor at {cursor}, requested {requested}")]
    NonMonotonicAdvance {
        cursor: NaiveDate,
        requested: NaiveDate,
    },
}

/// An immutable ascending-by-date sequence of bars plus a mutable cursor
/// giving the "current" bar as of the last advanced date.
///
/// Carry-forward semantics: advancing to a date with no exact bar leaves the
/// cursor on the latest bar not later than that date. Advancing to a date
/// before the first bar leaves the series with no current bar. An empty
/// series is valid and simply never has a current bar.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    bars: Vec<PriceBar>,
    cursor: Option<usize>,
    last_advanced: Option<NaiveDate>,
}

impl TimeSeries {
    /// Construct from bars already sorted ascending by date. The series does
    /// not re-sort; callers with unsorted sources must sort first.
    pub fn new(bars: Vec<PriceBar>) -> Self {
        debug_assert!(
            bars.windows(2).all(|w| w[0].date <= w[1].date),
            "TimeSeries bars must be ascending by date"
        );
        Self {
            bars,
            cursor: None,
            last_advanced: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Move the cursor forward to the last bar dated `<= date`.
    ///
    /// Idempotent for repeated equal dates. A `date` earlier than the
    /// previous call is a `NonMonotonicAdvance` error.
    pub fn advance_to(&mut self, date: NaiveDate) -> Result<(), SeriesError> {
        if let Some(prev) = self.last_advanced {
            if date < prev {
                return Err(SeriesError::NonMonotonicAdvance {
                    cursor: prev,
                    requested: date,
                });
            }
        }
        self.last_advanced = Some(date);

        let mut next = self.cursor.map_or(0, |i| i + 1);
        while next < self.bars.len() && self.bars[next].date <= date {
            self.cursor = Some(next);
            next += 1;
        }
        Ok(())
    }

    /// The bar as of the last advanced date, if the series has started.
    pub fn current(&self) -> Option<&PriceBar> {
        self.cursor.map(|i| &self.bars[i])
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Date of the first bar, if any.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.bars.first().map(|b| b.date)
    }

    /// Date of the last bar, if any.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.bars.last().map(|b| b.date)
    }
}
