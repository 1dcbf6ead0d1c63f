//! Pluggable valuation arithmetic.
//!
//! The exact mark-to-market formulas are a policy choice, not something the
//! tracker hard-codes. `CostBasisValuation` is the default and is the
//! documented reference behavior:
//!
//! - mark price: the position's series' current adjusted close; while the
//!   series has no current bar yet, the position marks at its average entry
//!   price (valuation cannot be better informed than its data).
//! - base conversion: amount times the FX series' current close; while the
//!   FX series has no current bar, the amount contributes zero to base
//!   valuation rather than inventing a rate.
//! - capital usage: absolute entry cost of the position, scaled by the
//!   trade's capital multiplier for option legs.

use crate::domain::PriceBar;

/// Position bookkeeping state exposed to valuation policies.
#[derive(Debug, Clone)]
pub struct PositionState {
    pub quantity: f64,
    pub avg_entry_price: f64,
    pub is_option: bool,
}

impl PositionState {
    pub fn is_flat(&self) -> bool {
        self.quantity.abs() < 1e-9
    }
}

/// Per-day valuation arithmetic for one trade's replay.
pub trait ValuationPolicy: Send + Sync {
    /// Per-unit mark price in the position's own currency.
    fn mark_price(&self, position: &PositionState, bar: Option<&PriceBar>) -> f64;

    /// Capital committed by the position, in its own currency.
    fn capital_required(&self, position: &PositionState, options_multiplier: f64) -> f64;

    /// Convert a local-currency amount to base given the FX series' current
    /// bar. `None` means the rate is not yet known.
    fn to_base(&self, amount: f64, fx_bar: Option<&PriceBar>) -> f64;
}

/// Default policy: mark at adjusted close, fall back to cost, convert at the
/// FX close, and treat an unknown rate as zero base contribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostBasisValuation;

impl ValuationPolicy for CostBasisValuation {
    fn mark_price(&self, position: &PositionState, bar: Option<&PriceBar>) -> f64 {
        bar.map_or(position.avg_entry_price, |b| b.adj_close)
    }

    fn capital_required(&self, position: &PositionState, options_multiplier: f64) -> f64 {
        let cost = position.quantity.abs() * position.avg_entry_price;
        if position.is_option {
            cost * options_multiplier
        } else {
            cost
        }
    }

    fn to_base(&self, amount: f64, fx_bar: Option<&PriceBar>) -> f64 {
        match fx_bar {
            Some(bar) => amount * bar.close,
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn position(quantity: f64, avg: f64, is_option: bool) -> PositionState {
        PositionState {
            quantity,
            avg_entry_price: avg,
            is_option,
        }
    }

    fn bar(value: f64) -> PriceBar {
        PriceBar::flat(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(), value)
    }

    #[test]
    fn marks_at_adjusted_close_when_bar_exists() {
        let policy = CostBasisValuation;
        assert_eq!(policy.mark_price(&position(10.0, 100.0, false), Some(&bar(110.0))), 110.0);
    }

    #[test]
    fn marks_at_cost_before_first_bar() {
        let policy = CostBasisValuation;
        assert_eq!(policy.mark_price(&position(10.0, 100.0, false), None), 100.0);
    }

    #[test]
    fn option_capital_scaled_by_multiplier() {
        let policy = CostBasisValuation;
        assert_eq!(policy.capital_required(&position(-2.0, 50.0, true), 3.0), 300.0);
        assert_eq!(policy.capital_required(&position(-2.0, 50.0, false), 3.0), 100.0);
    }

    #[test]
    fn unknown_rate_contributes_zero_to_base() {
        let policy = CostBasisValuation;
        assert_eq!(policy.to_base(500.0, None), 0.0);
        assert_eq!(policy.to_base(500.0, Some(&bar(1.2))), 600.0);
    }
}
