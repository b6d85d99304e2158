//! Next-prayer resolution.
//!
//! Pure functions over a [`Schedule`] and a wall-clock instant. No I/O and no
//! shared state, so callers may resolve from any thread as often as they like.

use crate::prayer::{Event, Prayer};
use crate::schedule::Schedule;
use chrono::{Duration, NaiveDateTime};

/// Where `now` sits relative to the day's prayers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Most recently passed prayer, circularly
    pub active: Event,
    /// Soonest upcoming prayer, circularly
    pub next: Event,
    /// `next` materialized as a full instant
    pub next_at: NaiveDateTime,
    /// `next_at - now`, never negative
    pub remaining: Duration,
    /// True once Isha has passed and the next prayer is tomorrow's Fajr
    pub next_is_tomorrow: bool,
}

/// `remaining` split for display; each part is floored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    pub fn from_duration(remaining: Duration) -> Self {
        let total = remaining.num_seconds().max(0);
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }
}

impl Resolution {
    pub fn countdown(&self) -> Countdown {
        Countdown::from_duration(self.remaining)
    }
}

/// Resolve the active and next prayer at `now`.
///
/// Each prayer is placed on `now`'s calendar date. The first one strictly
/// after `now` is next and its predecessor is active, so at the exact minute
/// a prayer begins it already counts as active. Past Isha, next is Fajr of the
/// following day.
pub fn resolve(schedule: &Schedule, now: NaiveDateTime) -> Resolution {
    let today = now.date();

    let upcoming = schedule
        .events()
        .iter()
        .map(|event| (*event, event.time.on(today)))
        .find(|(_, at)| *at > now);

    let (next, next_at, next_is_tomorrow) = match upcoming {
        Some((event, at)) => (event, at, false),
        None => {
            let fajr = schedule.event(Prayer::FIRST);
            (fajr, fajr.time.on(today) + Duration::days(1), true)
        }
    };

    Resolution {
        active: schedule.event(next.prayer.predecessor()),
        next,
        next_at,
        remaining: next_at - now,
        next_is_tomorrow,
    }
}

/// The prayer whose hour and minute equal `now`'s, if any.
pub fn should_notify(schedule: &Schedule, now: NaiveDateTime) -> Option<Event> {
    schedule
        .events()
        .iter()
        .find(|event| event.time.matches_minute(now))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::tests::{sample_date, sample_schedule, t};
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        sample_date().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_between_dhuhr_and_asr() {
        let r = resolve(&sample_schedule(), at(13, 15, 0));
        assert_eq!(r.active.prayer, Prayer::Dhuhr);
        assert_eq!(r.next.prayer, Prayer::Asr);
        assert!(!r.next_is_tomorrow);
    }

    #[test]
    fn test_every_gap_between_adjacent_prayers() {
        let s = sample_schedule();
        for pair in s.events().windows(2) {
            let now = pair[0].time.on(sample_date()) + Duration::minutes(1);
            let r = resolve(&s, now);
            assert_eq!(r.active, pair[0]);
            assert_eq!(r.next, pair[1]);
            assert_eq!(r.remaining, pair[1].time.on(sample_date()) - now);
        }
    }

    #[test]
    fn test_exactly_at_dhuhr_counts_dhuhr_as_active() {
        let r = resolve(&sample_schedule(), at(12, 0, 0));
        assert_eq!(r.active.prayer, Prayer::Dhuhr);
        assert_eq!(r.next.prayer, Prayer::Asr);
        assert_eq!(r.remaining, Duration::hours(3) + Duration::minutes(30));
        assert_eq!(
            r.countdown(),
            Countdown {
                hours: 3,
                minutes: 30,
                seconds: 0
            }
        );
    }

    #[test]
    fn test_after_isha_wraps_to_tomorrows_fajr() {
        let r = resolve(&sample_schedule(), at(20, 0, 0));
        assert_eq!(r.active.prayer, Prayer::Isha);
        assert_eq!(r.next.prayer, Prayer::Fajr);
        assert!(r.next_is_tomorrow);
        assert_eq!(r.remaining, Duration::hours(9));
        assert_eq!(
            r.next_at,
            NaiveDate::from_ymd_opt(2026, 10, 20)
                .unwrap()
                .and_hms_opt(5, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_exactly_at_isha_wraps() {
        let r = resolve(&sample_schedule(), at(19, 30, 0));
        assert_eq!(r.active.prayer, Prayer::Isha);
        assert!(r.next_is_tomorrow);
        assert_eq!(r.remaining, Duration::hours(9) + Duration::minutes(30));
    }

    #[test]
    fn test_one_second_before_fajr() {
        let r = resolve(&sample_schedule(), at(4, 59, 59));
        assert_eq!(r.active.prayer, Prayer::Isha);
        assert_eq!(r.next.prayer, Prayer::Fajr);
        assert!(!r.next_is_tomorrow);
        assert_eq!(r.remaining, Duration::seconds(1));
        assert_eq!(
            r.countdown(),
            Countdown {
                hours: 0,
                minutes: 0,
                seconds: 1
            }
        );
    }

    #[test]
    fn test_just_after_midnight() {
        let r = resolve(&sample_schedule(), at(0, 0, 0));
        assert_eq!(r.active.prayer, Prayer::Isha);
        assert_eq!(r.next.prayer, Prayer::Fajr);
        assert_eq!(r.remaining, Duration::hours(5));
    }

    #[test]
    fn test_last_second_of_day() {
        let r = resolve(&sample_schedule(), at(23, 59, 59));
        assert!(r.next_is_tomorrow);
        assert_eq!(r.remaining, Duration::hours(5) + Duration::seconds(1));
    }

    #[test]
    fn test_resolves_against_nows_date_not_schedule_date() {
        let later = NaiveDate::from_ymd_opt(2026, 12, 1)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        let r = resolve(&sample_schedule(), later);
        assert_eq!(r.next.prayer, Prayer::Asr);
        assert_eq!(r.next_at.date(), later.date());
    }

    #[test]
    fn test_remaining_never_negative_across_day() {
        let s = sample_schedule();
        let start = at(0, 0, 0);
        for step in 0..(24 * 60) {
            let now = start + Duration::minutes(step) + Duration::seconds(17);
            let r = resolve(&s, now);
            assert!(r.remaining >= Duration::zero());
            assert_eq!(r.remaining, r.next_at - now);
            assert_eq!(r.active.prayer, r.next.prayer.predecessor());
        }
    }

    #[test]
    fn test_countdown_floors_subsecond_remainder() {
        let c = Countdown::from_duration(Duration::milliseconds(3_661_900));
        assert_eq!(
            c,
            Countdown {
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn test_should_notify_on_exact_minute() {
        let s = sample_schedule();
        let hit = should_notify(&s, at(15, 30, 42)).unwrap();
        assert_eq!(hit.prayer, Prayer::Asr);
        assert_eq!(hit.time, t(15, 30));
    }

    #[test]
    fn test_should_notify_misses_off_minute() {
        let s = sample_schedule();
        assert!(should_notify(&s, at(15, 31, 0)).is_none());
        assert!(should_notify(&s, at(15, 29, 59)).is_none());
    }
}
