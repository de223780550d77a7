//! Minute-of-day and the serving window of each time slot

use chrono::{DateTime, TimeZone, Timelike};
use shared::models::TimeSlot;
use std::fmt;

pub const MINUTES_PER_DAY: u16 = 1440;

/// Minutes since local midnight, always in `0..1440`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    pub const MIDNIGHT: MinuteOfDay = MinuteOfDay(0);

    pub const fn new(minute: u16) -> Option<Self> {
        if minute < MINUTES_PER_DAY {
            Some(Self(minute))
        } else {
            None
        }
    }

    pub const fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour >= 24 || minute >= 60 {
            return None;
        }
        Some(Self(hour * 60 + minute))
    }

    /// Local wall-clock minute of `at` in its own time zone
    pub fn of<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        // hour() < 24 and minute() < 60, so this stays below 1440
        Self((at.hour() * 60 + at.minute()) as u16)
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Inclusive `[start, end]` window in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotWindow {
    pub start: u16,
    pub end: u16,
}

impl SlotWindow {
    pub const fn contains(&self, now: MinuteOfDay) -> bool {
        self.start <= now.0 && now.0 <= self.end
    }
}

/// Serving window for a slot
///
/// Evening and dinner share minute 1140 (19:00); both are open then.
pub const fn window(slot: TimeSlot) -> SlotWindow {
    match slot {
        TimeSlot::Breakfast => SlotWindow { start: 360, end: 690 },
        TimeSlot::Lunch => SlotWindow { start: 720, end: 930 },
        TimeSlot::Evening => SlotWindow { start: 960, end: 1140 },
        TimeSlot::Dinner => SlotWindow { start: 1140, end: 1380 },
        TimeSlot::Beverage => SlotWindow { start: 0, end: MINUTES_PER_DAY },
    }
}

/// Stored slot text, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotTag {
    Known(TimeSlot),
    Unrecognized(String),
}

impl SlotTag {
    pub fn classify(raw: &str) -> Self {
        match TimeSlot::parse(raw) {
            Some(slot) => SlotTag::Known(slot),
            None => SlotTag::Unrecognized(raw.to_string()),
        }
    }
}

impl From<TimeSlot> for SlotTag {
    fn from(slot: TimeSlot) -> Self {
        SlotTag::Known(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn m(minute: u16) -> MinuteOfDay {
        MinuteOfDay::new(minute).unwrap()
    }

    #[test]
    fn test_minute_of_day_bounds() {
        assert!(MinuteOfDay::new(0).is_some());
        assert!(MinuteOfDay::new(1439).is_some());
        assert!(MinuteOfDay::new(1440).is_none());
        assert_eq!(MinuteOfDay::from_hm(13, 20), Some(m(800)));
        assert_eq!(MinuteOfDay::from_hm(24, 0), None);
        assert_eq!(MinuteOfDay::from_hm(10, 60), None);
        assert_eq!(m(800).to_string(), "13:20");
    }

    #[test]
    fn test_minute_of_day_uses_local_wall_clock() {
        let utc = Utc.with_ymd_and_hms(2026, 3, 2, 7, 50, 30).unwrap();
        assert_eq!(MinuteOfDay::of(&utc), m(470));

        // 07:50 UTC is 13:20 in Kolkata (+05:30)
        let local = utc.with_timezone(&chrono_tz::Asia::Kolkata);
        assert_eq!(MinuteOfDay::of(&local), m(800));
    }

    #[test]
    fn test_windows_are_inclusive_on_both_ends() {
        let lunch = window(TimeSlot::Lunch);
        assert!(!lunch.contains(m(719)));
        assert!(lunch.contains(m(720)));
        assert!(lunch.contains(m(930)));
        assert!(!lunch.contains(m(931)));

        let breakfast = window(TimeSlot::Breakfast);
        assert!(breakfast.contains(m(360)));
        assert!(breakfast.contains(m(690)));
        assert!(!breakfast.contains(m(691)));
    }

    #[test]
    fn test_evening_and_dinner_share_1900() {
        assert!(window(TimeSlot::Evening).contains(m(1140)));
        assert!(window(TimeSlot::Dinner).contains(m(1140)));
        assert!(!window(TimeSlot::Evening).contains(m(1141)));
        assert!(!window(TimeSlot::Dinner).contains(m(1139)));
    }

    #[test]
    fn test_beverage_covers_whole_day() {
        let beverage = window(TimeSlot::Beverage);
        assert!((0..MINUTES_PER_DAY).all(|minute| beverage.contains(m(minute))));
    }

    #[test]
    fn test_classify() {
        assert_eq!(SlotTag::classify("dinner"), SlotTag::Known(TimeSlot::Dinner));
        assert_eq!(
            SlotTag::classify("midnight-snack"),
            SlotTag::Unrecognized("midnight-snack".into())
        );
    }
}
