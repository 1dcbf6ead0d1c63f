//! Cooperative cancellation for long replays.
//!
//! Trade histories can span years of calendar days; the day loop checks the
//! token at the top of every iteration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Clone-shareable cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
