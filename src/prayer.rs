use crate::error::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// The six daily prayer times, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const COUNT: usize = 6;

    /// Canonical order. "Previous" and "next" are defined over this array,
    /// circularly.
    pub const ALL: [Prayer; Prayer::COUNT] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub const FIRST: Prayer = Prayer::Fajr;
    pub const LAST: Prayer = Prayer::Isha;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Prayer {
        Prayer::ALL[index % Prayer::COUNT]
    }

    /// The next prayer in canonical order; Isha wraps to Fajr.
    pub fn successor(self) -> Prayer {
        Prayer::from_index(self.index() + 1)
    }

    /// The previous prayer in canonical order; Fajr wraps to Isha.
    pub fn predecessor(self) -> Prayer {
        Prayer::from_index(self.index() + Prayer::COUNT - 1)
    }

    /// Key used by the timings API
    pub fn api_key(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }

    pub fn from_api_key(key: &str) -> Option<Prayer> {
        Prayer::ALL.into_iter().find(|p| p.api_key() == key)
    }

    /// Turkish label shown to the user
    pub fn display_name(self) -> &'static str {
        match self {
            Prayer::Fajr => "İmsak",
            Prayer::Sunrise => "Güneş",
            Prayer::Dhuhr => "Öğle",
            Prayer::Asr => "İkindi",
            Prayer::Maghrib => "Akşam",
            Prayer::Isha => "Yatsı",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_key())
    }
}

/// Wall-clock time of day with minute precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> AppResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(AppError::validation(format!(
                "time out of range: {:02}:{:02}",
                hour, minute
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Parse `HH:MM`. The API appends a zone annotation (`"05:12 (EET)"`);
    /// anything after the first whitespace is ignored.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let clock = raw.split_whitespace().next().unwrap_or("");
        let (h, m) = clock
            .split_once(':')
            .ok_or_else(|| AppError::validation(format!("expected HH:MM, got {:?}", raw)))?;
        let hour = h
            .parse::<u32>()
            .map_err(|_| AppError::validation(format!("bad hour in {:?}", raw)))?;
        let minute = m
            .parse::<u32>()
            .map_err(|_| AppError::validation(format!("bad minute in {:?}", raw)))?;
        Self::new(hour, minute)
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn to_naive_time(self) -> NaiveTime {
        // Range checked in `new`
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or_default()
    }

    /// Full instant of this time on the given calendar date.
    pub fn on(self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.to_naive_time())
    }

    /// True when `now` falls inside this exact hour and minute.
    pub fn matches_minute(&self, now: NaiveDateTime) -> bool {
        now.hour() == self.hour && now.minute() == self.minute
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = AppError;

    fn try_from(raw: String) -> AppResult<Self> {
        TimeOfDay::parse(&raw)
    }
}

/// One prayer at its time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub prayer: Prayer,
    pub time: TimeOfDay,
}

impl Event {
    pub fn new(prayer: Prayer, time: TimeOfDay) -> Self {
        Self { prayer, time }
    }

    pub fn name(&self) -> &'static str {
        self.prayer.api_key()
    }

    pub fn display_name(&self) -> &'static str {
        self.prayer.display_name()
    }
}

// Carries the API name and the Turkish label alongside the time so
// consumers of the JSON output need no lookup table of their own.
impl Serialize for Event {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Event", 4)?;
        state.serialize_field("prayer", &self.prayer)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("display_name", self.display_name())?;
        state.serialize_field("time", &self.time)?;
        state.end()
    }
}
