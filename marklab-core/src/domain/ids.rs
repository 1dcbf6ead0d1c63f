use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrument identifier — an opaque key into the reference data store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(pub u32);

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "instrument#{}", self.0)
    }
}

/// Currency identifier. Ids ≤ 1 denote the base/reporting currency and
/// never need a conversion series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyId(pub u32);

impl CurrencyId {
    pub const BASE: CurrencyId = CurrencyId(1);

    pub fn is_base(&self) -> bool {
        self.0 <= 1
    }
}

impl fmt::Display for CurrencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "currency#{}", self.0)
    }
}
