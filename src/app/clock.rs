//! Time source for everything that stamps rows or measures durations.

use time::OffsetDateTime;

/// Abstract source of "now". Swappable per environment.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;

    /// Current instant as Unix seconds, the storage representation.
    fn unix_now(&self) -> i64 {
        self.now().unix_timestamp()
    }
}

/// Wall clock used in production.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Clock that can be pinned and moved by hand. Used in tests.
#[derive(Debug)]
pub struct FixedClock {
    unix_seconds: std::sync::atomic::AtomicI64,
}

impl FixedClock {
    pub fn at(unix_seconds: i64) -> Self {
        Self {
            unix_seconds: std::sync::atomic::AtomicI64::new(unix_seconds),
        }
    }

    pub fn set(&self, unix_seconds: i64) {
        self.unix_seconds
            .store(unix_seconds, std::sync::atomic::Ordering::SeqCst);
    }

    pub fn advance(&self, seconds: i64) {
        self.unix_seconds
            .fetch_add(seconds, std::sync::atomic::Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        let seconds = self.unix_seconds.load(std::sync::atomic::Ordering::SeqCst);
        OffsetDateTime::from_unix_timestamp(seconds).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
}
