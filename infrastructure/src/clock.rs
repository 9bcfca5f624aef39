//! Wall-clock adapter for the [`Clock`] port

use chrono::{DateTime, Utc};
use fashionos_application::Clock;

/// Reads the system clock on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
