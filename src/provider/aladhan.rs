use super::{LocationQuery, TimingsProvider};
use crate::config::{ALADHAN_BASE_URL, TIMINGS_TIMEOUT};
use crate::error::{AppError, AppResult};
use crate::schedule::{HijriDate, Schedule};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::collections::HashMap;

/// Response envelope of `/v1/timingsByCity`
#[derive(Debug, Deserialize)]
struct TimingsResponse {
    code: u16,
    #[serde(default)]
    status: String,
    /// Timings on success, an error string otherwise
    data: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct TimingsData {
    timings: HashMap<String, String>,
    date: Option<ApiDate>,
}

#[derive(Debug, Deserialize)]
struct ApiDate {
    gregorian: Option<ApiGregorian>,
    hijri: Option<ApiHijri>,
}

#[derive(Debug, Deserialize)]
struct ApiGregorian {
    /// "DD-MM-YYYY"
    date: String,
}

#[derive(Debug, Deserialize)]
struct ApiHijri {
    day: String,
    month: ApiHijriMonth,
    year: String,
}

#[derive(Debug, Deserialize)]
struct ApiHijriMonth {
    en: String,
}

impl ApiHijri {
    fn into_hijri(self) -> Option<HijriDate> {
        Some(HijriDate {
            day: self.day.trim().parse().ok()?,
            month: self.month.en,
            year: self.year.trim().parse().ok()?,
        })
    }
}

/// Blocking client for the Aladhan prayer times API.
pub struct AladhanClient {
    agent: ureq::Agent,
    base_url: String,
}

impl AladhanClient {
    pub fn new() -> Self {
        Self::with_base_url(ALADHAN_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(TIMINGS_TIMEOUT).build();
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for AladhanClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingsProvider for AladhanClient {
    fn fetch(&self, query: &LocationQuery) -> AppResult<Schedule> {
        let url = format!("{}/v1/timingsByCity", self.base_url);
        log::info!("Fetching timings for {:?} (method {})", query.city, query.method);

        let result = self
            .agent
            .get(&url)
            .query("city", &query.city)
            .query("country", &query.country)
            .query("method", &query.method.to_string())
            .call();

        // The API explains rejected queries in the body of a 4xx response
        let response = match result {
            Ok(r) => r,
            Err(ureq::Error::Status(code, r)) => {
                log::warn!("Timings API answered HTTP {}", code);
                r
            }
            Err(e) => return Err(e.into()),
        };

        let body = response
            .into_string()
            .map_err(|e| AppError::network(format!("Failed to read response: {}", e)))?;

        parse_timings_response(&body, &query.city, Local::now().date_naive())
    }
}

/// Turn a raw API response body into a schedule. `fallback_date` is used when
/// the response carries no usable Gregorian date.
pub(crate) fn parse_timings_response(
    body: &str,
    city: &str,
    fallback_date: NaiveDate,
) -> AppResult<Schedule> {
    let response: TimingsResponse = serde_json::from_str(body)
        .map_err(|e| AppError::provider(format!("Malformed response: {}", e)))?;

    if response.code != 200 {
        let detail = match response.data {
            Some(serde_json::Value::String(msg)) => msg,
            _ => response.status,
        };
        return Err(AppError::provider(format!(
            "API returned code {} ({})",
            response.code, detail
        )));
    }

    let data = response
        .data
        .ok_or_else(|| AppError::provider("Response has no data"))?;
    let data: TimingsData = serde_json::from_value(data)
        .map_err(|e| AppError::provider(format!("Unexpected data: {}", e)))?;

    let (gregorian, hijri) = match data.date {
        Some(date) => (date.gregorian, date.hijri),
        None => (None, None),
    };

    let date = gregorian
        .and_then(|g| NaiveDate::parse_from_str(&g.date, "%d-%m-%Y").ok())
        .unwrap_or(fallback_date);

    let schedule = Schedule::from_timings(city, date, &data.timings)?;

    Ok(match hijri.and_then(ApiHijri::into_hijri) {
        Some(h) => schedule.with_hijri(h),
        None => schedule,
    })
}
