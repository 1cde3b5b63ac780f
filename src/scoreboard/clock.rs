use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of match start times
///
/// Wall-clock based, but never hands out the same instant twice: if the
/// clock has not advanced since the previous call, the previous value plus
/// one nanosecond is returned instead. Start times therefore follow the
/// order in which matches were started.
#[derive(Debug)]
pub struct StartClock {
    last_nanos: AtomicI64,
}

impl StartClock {
    pub fn new() -> Self {
        Self {
            last_nanos: AtomicI64::new(i64::MIN),
        }
    }

    /// Returns a start time strictly later than any previously returned one
    pub fn next(&self) -> DateTime<Utc> {
        let now = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);
        let advance = |last: i64| now.max(last.saturating_add(1));

        let previous = match self
            .last_nanos
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(advance(last)))
        {
            Ok(previous) | Err(previous) => previous,
        };

        Utc.timestamp_nanos(advance(previous))
    }
}

impl Default for StartClock {
    fn default() -> Self {
        Self::new()
    }
}
