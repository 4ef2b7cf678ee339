//! Elapsed time between emitted lines
//!
//! Every emitted line swaps the "last emitted" slot to the current time and
//! reports how long it has been since the previous line. Loggers that share
//! a clock share one timeline, which is how the process-wide suffix works.

use std::sync::{Arc, Mutex, OnceLock};

use chrono::{DateTime, Local};

static GLOBAL_CLOCK: OnceLock<Arc<ElapsedClock>> = OnceLock::new();

/// Single-slot record of when the last line was emitted
#[derive(Debug, Default)]
pub struct ElapsedClock {
    last_emitted: Mutex<Option<DateTime<Local>>>,
}

impl ElapsedClock {
    /// Create a clock that has never emitted
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared clock used by every logger that is not given its own
    pub fn global() -> Arc<ElapsedClock> {
        Arc::clone(GLOBAL_CLOCK.get_or_init(|| Arc::new(ElapsedClock::new())))
    }

    /// Record `now` as the last emission and return the time since the previous one
    ///
    /// Returns `None` for the first emission. Negative gaps (wall clock moved
    /// backwards) are reported as zero.
    pub fn advance(&self, now: DateTime<Local>) -> Option<i64> {
        let mut last = self
            .last_emitted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = last.replace(now);
        previous.map(|previous| (now - previous).num_milliseconds().max(0))
    }

    /// When the last line was emitted, if any
    pub fn last_emitted(&self) -> Option<DateTime<Local>> {
        *self
            .last_emitted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
