use crate::error::{AppError, AppResult};
use crate::prayer::{Event, Prayer, TimeOfDay};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// Islamic calendar date as reported by the timings API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HijriDate {
    pub day: u32,
    /// English month name as the API spells it, e.g. "Rabi' al-thani"
    pub month: String,
    pub year: u32,
}

/// The six prayer times of one calendar day.
///
/// Immutable once built. A new query produces a new `Schedule`; nothing edits
/// one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    city: String,
    date: NaiveDate,
    events: [Event; Prayer::COUNT],
    hijri: Option<HijriDate>,
}

impl Schedule {
    /// Build from times given in canonical order (Fajr first, Isha last).
    pub fn new(
        city: impl Into<String>,
        date: NaiveDate,
        times: [TimeOfDay; Prayer::COUNT],
    ) -> AppResult<Self> {
        for pair in times.windows(2) {
            if pair[0] >= pair[1] {
                return Err(AppError::validation(format!(
                    "prayer times out of order: {} is not before {}",
                    pair[0], pair[1]
                )));
            }
        }

        let events = Prayer::ALL.map(|p| Event::new(p, times[p.index()]));
        Ok(Self {
            city: city.into(),
            date,
            events,
            hijri: None,
        })
    }

    /// Build from an API-style map of `"Fajr" -> "05:12 (EET)"`. Keys other than
    /// the six canonical ones are ignored.
    pub fn from_timings(
        city: impl Into<String>,
        date: NaiveDate,
        timings: &HashMap<String, String>,
    ) -> AppResult<Self> {
        let mut found: [Option<TimeOfDay>; Prayer::COUNT] = [None; Prayer::COUNT];
        for (key, raw) in timings {
            if let Some(prayer) = Prayer::from_api_key(key) {
                found[prayer.index()] = Some(TimeOfDay::parse(raw)?);
            }
        }

        let mut times = [TimeOfDay::default(); Prayer::COUNT];
        for prayer in Prayer::ALL {
            times[prayer.index()] = found[prayer.index()].ok_or_else(|| {
                AppError::validation(format!("missing timing for {}", prayer.api_key()))
            })?;
        }
        Self::new(city, date, times)
    }

    pub fn with_hijri(mut self, hijri: HijriDate) -> Self {
        self.hijri = Some(hijri);
        self
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Date the timings were issued for
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn hijri(&self) -> Option<&HijriDate> {
        self.hijri.as_ref()
    }

    /// All six events, in canonical order
    pub fn events(&self) -> &[Event; Prayer::COUNT] {
        &self.events
    }

    pub fn event(&self, prayer: Prayer) -> Event {
        self.events[prayer.index()]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn t(hour: u32, minute: u32) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    pub(crate) fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    /// 05:00, 06:30, 12:00, 15:30, 18:00, 19:30
    pub(crate) fn sample_schedule() -> Schedule {
        Schedule::new(
            "Istanbul",
            sample_date(),
            [t(5, 0), t(6, 30), t(12, 0), t(15, 30), t(18, 0), t(19, 30)],
        )
        .unwrap()
    }

    #[test]
    fn test_events_follow_canonical_order() {
        let s = sample_schedule();
        let prayers: Vec<Prayer> = s.events().iter().map(|e| e.prayer).collect();
        assert_eq!(prayers, Prayer::ALL.to_vec());
        assert_eq!(s.event(Prayer::Asr).time, t(15, 30));
    }

    #[test]
    fn test_rejects_unsorted_times() {
        let result = Schedule::new(
            "X",
            sample_date(),
            [t(5, 0), t(6, 30), t(12, 0), t(11, 0), t(18, 0), t(19, 30)],
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_rejects_equal_times() {
        let result = Schedule::new(
            "X",
            sample_date(),
            [t(5, 0), t(5, 0), t(12, 0), t(15, 0), t(18, 0), t(19, 30)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_timings_ignores_extra_keys() {
        let mut map = HashMap::new();
        for (k, v) in [
            ("Fajr", "05:00 (EET)"),
            ("Sunrise", "06:30 (EET)"),
            ("Dhuhr", "12:00 (EET)"),
            ("Asr", "15:30 (EET)"),
            ("Sunset", "17:58 (EET)"),
            ("Maghrib", "18:00 (EET)"),
            ("Isha", "19:30 (EET)"),
            ("Midnight", "00:15 (EET)"),
        ] {
            map.insert(k.to_string(), v.to_string());
        }
        let s = Schedule::from_timings("Istanbul", sample_date(), &map).unwrap();
        assert_eq!(s, sample_schedule());
    }

    #[test]
    fn test_from_timings_requires_every_prayer() {
        let mut map = HashMap::new();
        map.insert("Fajr".to_string(), "05:00".to_string());
        let err = Schedule::from_timings("X", sample_date(), &map).unwrap_err();
        assert!(err.to_string().contains("Sunrise"));
    }

    #[test]
    fn test_from_timings_rejects_bad_known_key_only() {
        let mut map: HashMap<String, String> = sample_schedule()
            .events()
            .iter()
            .map(|e| (e.name().to_string(), e.time.to_string()))
            .collect();
        map.insert("Midnight".to_string(), "not a time".to_string());
        assert!(Schedule::from_timings("X", sample_date(), &map).is_ok());

        map.insert("Asr".to_string(), "not a time".to_string());
        assert!(Schedule::from_timings("X", sample_date(), &map).is_err());
    }

    #[test]
    fn test_isha_after_midnight_is_rejected() {
        let result = Schedule::new(
            "Reykjavik",
            sample_date(),
            [t(2, 50), t(5, 10), t(13, 30), t(17, 55), t(22, 45), t(0, 35)],
        );
        let err = result.unwrap_err();
        assert_eq!(
            err,
            AppError::validation("prayer times out of order: 22:45 is not before 00:35")
        );
    }

    #[test]
    fn test_with_hijri_attaches_metadata() {
        let hijri = HijriDate {
            day: 27,
            month: "Rabi' al-thani".to_string(),
            year: 1448,
        };
        let s = sample_schedule().with_hijri(hijri.clone());
        assert_eq!(s.hijri(), Some(&hijri));
        assert!(sample_schedule().hijri().is_none());
    }
}
