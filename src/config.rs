//! Application configuration constants
//!
//! Centralized configuration for the prayer times app.

use std::time::Duration;

/// Base URL of the Aladhan prayer times API
pub const ALADHAN_BASE_URL: &str = "https://api.aladhan.com";

/// IP geolocation endpoint used to guess the user's city
pub const IP_LOCATE_URL: &str = "http://ip-api.com/json/";

/// Calculation method passed to Aladhan (13 = Diyanet İşleri Başkanlığı)
pub const DEFAULT_METHOD: u8 = 13;

/// City used when nothing is configured
pub const DEFAULT_CITY: &str = "Istanbul";

pub const TIMINGS_TIMEOUT: Duration = Duration::from_secs(10);
pub const LOCATE_TIMEOUT: Duration = Duration::from_secs(5);

/// Display refresh period
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Notification check period. Shorter than a minute so no prayer minute is
/// skipped by drift; the notification gate keeps it to one alert per prayer.
pub const NOTIFY_CHECK_INTERVAL: Duration = Duration::from_secs(20);

/// How often the refresh worker checks for a date rollover
pub const ROLLOVER_CHECK_INTERVAL: Duration = Duration::from_secs(60);

/// Directory under the platform config dir holding our files
pub const APP_DIR_NAME: &str = "NamazVakitleri";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Plain-text city file written by older versions, relative to the home dir
pub const LEGACY_CITY_FILE_NAME: &str = ".namaz_sehir.txt";

pub const NOTIFICATION_TITLE: &str = "Ezan Vakti";
pub const APP_NAME: &str = "Namaz Vakitleri";
