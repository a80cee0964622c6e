use chrono::{DateTime, Utc};

/// Clock abstraction so session timestamps are deterministic in tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock that reads the system time.
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    /// Returns a clock frozen at the given instant.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current time according to the clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }
}

/// Timestamp used by deterministic tests (2025-08-12T12:00:00Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_755_000_000;

/// A known `DateTime<Utc>` for assertions against clock-stamped values.
///
/// # Panics
///
/// Panics if `FIXED_TEST_TIMESTAMP` falls outside chrono's range, which
/// it does not.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("test timestamp is in range")
}

/// A `Clock` frozen at [`fixed_now`].
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
