use chrono::{DateTime, Utc};

/// Source of "now" for timestamping stored rows
///
/// Stores never call `Utc::now()` directly so that tests can control
/// creation and update times and assert on ordering deterministically.
pub trait ClockProvider {
    fn now(&self) -> DateTime<Utc>;

    /// Current time as Unix seconds, the unit persisted in the database
    fn now_timestamp(&self) -> i64 {
        self.now().timestamp()
    }
}

/// Production clock backed by the system time
pub struct SystemClock;

impl ClockProvider for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Test clock that only moves when told to
#[cfg(test)]
pub struct ManualClock {
    seconds: std::sync::atomic::AtomicI64,
}

#[cfg(test)]
impl ManualClock {
    pub fn at(seconds: i64) -> Self {
        Self {
            seconds: std::sync::atomic::AtomicI64::new(seconds),
        }
    }

    pub fn set(&self, seconds: i64) {
        self.seconds
            .store(seconds, std::sync::atomic::Ordering::SeqCst);
    }

    pub fn advance(&self, seconds: i64) {
        self.seconds
            .fetch_add(seconds, std::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(test)]
impl ClockProvider for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let seconds = self.seconds.load(std::sync::atomic::Ordering::SeqCst);
        DateTime::from_timestamp(seconds, 0).unwrap_or_default()
    }
}
