use crate::schedule::HijriDate;
use chrono::{Datelike, NaiveDate};

const MONTHS_TR: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

// Monday first, matching `Weekday::num_days_from_monday`
const WEEKDAYS_TR: [&str; 7] = [
    "Pazartesi",
    "Salı",
    "Çarşamba",
    "Perşembe",
    "Cuma",
    "Cumartesi",
    "Pazar",
];

/// Gregorian date in Turkish, e.g. "19 Ekim 2026, Pazartesi".
pub fn format_gregorian_tr(date: NaiveDate) -> String {
    format!(
        "{} {} {}, {}",
        date.day(),
        MONTHS_TR[date.month0() as usize],
        date.year(),
        WEEKDAYS_TR[date.weekday().num_days_from_monday() as usize]
    )
}

/// Turkish name for a Hijri month as the API spells it in English. The API
/// has used both plain ASCII and transliterated spellings. Unknown names pass
/// through unchanged.
pub fn hijri_month_tr(en_month: &str) -> &str {
    match en_month {
        "Muharram" | "Muḥarram" => "Muharrem",
        "Safar" | "Ṣafar" => "Safer",
        "Rabi' al-awwal" | "Rabīʿ al-awwal" => "Rebiülevvel",
        "Rabi' al-thani" | "Rabīʿ al-thānī" => "Rebiülahir",
        "Jumada al-ula" | "Jumādá al-ūlá" => "Cemaziyelevvel",
        "Jumada al-akhira" | "Jumādá al-ākhirah" => "Cemaziyelahir",
        "Rajab" => "Recep",
        "Sha'ban" | "Shaʿbān" => "Şaban",
        "Ramadan" | "Ramaḍān" => "Ramazan",
        "Shawwal" | "Shawwāl" => "Şevval",
        "Dhu al-Qi'dah" | "Dhū al-Qaʿdah" => "Zilkade",
        "Dhu al-Hijjah" | "Dhū al-Ḥijjah" => "Zilhicce",
        other => other,
    }
}

/// Hijri date in Turkish, e.g. "27 Rebiülahir 1448".
pub fn format_hijri_tr(hijri: &HijriDate) -> String {
    format!(
        "{} {} {}",
        hijri.day,
        hijri_month_tr(&hijri.month),
        hijri.year
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_format() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(format_gregorian_tr(date), "19 Ekim 2026, Pazartesi");
    }

    #[test]
    fn test_gregorian_sunday() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(format_gregorian_tr(date), "1 Mart 2026, Pazar");
    }

    #[test]
    fn test_hijri_month_translation() {
        assert_eq!(hijri_month_tr("Ramadan"), "Ramazan");
        assert_eq!(hijri_month_tr("Dhu al-Hijjah"), "Zilhicce");
        assert_eq!(hijri_month_tr("Rabīʿ al-thānī"), "Rebiülahir");
        assert_eq!(hijri_month_tr("Unknown"), "Unknown");
    }

    #[test]
    fn test_hijri_format() {
        let hijri = HijriDate {
            day: 27,
            month: "Rabi' al-thani".to_string(),
            year: 1448,
        };
        assert_eq!(format_hijri_tr(&hijri), "27 Rebiülahir 1448");
    }
}
