//! Wall-clock source for evaluation passes

use super::slots::MinuteOfDay;
use chrono_tz::Tz;
use std::sync::atomic::{AtomicU16, Ordering};

pub trait Clock: Send + Sync {
    /// Current minute-of-day in the business time zone
    fn now_minute(&self) -> MinuteOfDay;
}

/// Reads the system clock at every call
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now_minute(&self) -> MinuteOfDay {
        MinuteOfDay::of(&chrono::Utc::now().with_timezone(&self.tz))
    }
}

/// Settable clock for tests and demos
#[derive(Debug)]
pub struct FixedClock {
    minute: AtomicU16,
}

impl FixedClock {
    pub fn new(minute: MinuteOfDay) -> Self {
        Self {
            minute: AtomicU16::new(minute.get()),
        }
    }

    pub fn set(&self, minute: MinuteOfDay) {
        self.minute.store(minute.get(), Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_minute(&self) -> MinuteOfDay {
        // Only ever stores values produced by a MinuteOfDay
        MinuteOfDay::new(self.minute.load(Ordering::SeqCst)).unwrap_or(MinuteOfDay::MIDNIGHT)
    }
}
