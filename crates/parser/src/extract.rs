//! Slot extraction from utterances
//!
//! All extractors take the lowercased utterance and return `None` when the
//! pattern is absent or malformed; nothing here ever panics on user text.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use courtvoice_core::CourtType;
use once_cell::sync::Lazy;
use regex::Regex;

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([01]?\d|2[0-3]):([0-5]\d)\b").unwrap());

static AMPM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(1[0-2]|[1-9])\s*(am|pm)\b").unwrap());

// Russian clock phrase "в 14 часов"; distinct from duration, which uses
// the preposition "на".
static RU_HOUR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"в\s+([01]?\d|2[0-3])\s+час").unwrap());

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap());

static MINUTES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,3})\s*(?:минут|мин\b|minutes?\b|mins?\b|นาที)").unwrap());

static HOURS_EN_TH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})\s*(?:hours?\b|hrs?\b|ชั่วโมง)").unwrap());

static HOURS_RU_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"на\s+(\d{1,2})\s*час").unwrap());

const DAY_AFTER_TOMORROW: [&str; 3] = ["послезавтра", "day after tomorrow", "มะรืนนี้"];
const TOMORROW: [&str; 3] = ["завтра", "tomorrow", "พรุ่งนี้"];
const TODAY: [&str; 3] = ["сегодня", "today", "วันนี้"];

const WEEKDAYS: [(&str, Weekday); 14] = [
    ("monday", Weekday::Mon),
    ("понедельник", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("вторник", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("сред", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("четверг", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("пятниц", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("суббот", Weekday::Sat),
    ("sunday", Weekday::Sun),
    ("воскресень", Weekday::Sun),
];

const INDOOR_KEYWORDS: [&str; 4] = ["indoor", "крыт", "в зале", "ในร่ม"];
const OUTDOOR_KEYWORDS: [&str; 4] = ["outdoor", "открыт", "улице", "กลางแจ้ง"];

/// Extract a clock time: `HH:MM`, `N am/pm` or the Russian hour phrase
pub(crate) fn extract_time(text: &str) -> Option<NaiveTime> {
    if let Some(caps) = TIME_RE.captures(text) {
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;
        return NaiveTime::from_hms_opt(hour, minute, 0);
    }

    if let Some(caps) = AMPM_RE.captures(text) {
        let raw: u32 = caps[1].parse().ok()?;
        let hour = match &caps[2] {
            "pm" => raw % 12 + 12,
            _ => raw % 12,
        };
        return NaiveTime::from_hms_opt(hour, 0, 0);
    }

    if let Some(caps) = RU_HOUR_RE.captures(text) {
        let hour: u32 = caps[1].parse().ok()?;
        return NaiveTime::from_hms_opt(hour, 0, 0);
    }

    None
}

/// Extract a calendar date: explicit ISO date, relative day words, or a
/// weekday name resolved to its next occurrence after `today`
pub(crate) fn extract_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    if let Some(caps) = ISO_DATE_RE.captures(text) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    // "послезавтра" contains "завтра"; scan order disambiguates.
    if DAY_AFTER_TOMORROW.iter().any(|word| text.contains(word)) {
        return Some(today + Duration::days(2));
    }
    if TOMORROW.iter().any(|word| text.contains(word)) {
        return Some(today + Duration::days(1));
    }
    if TODAY.iter().any(|word| text.contains(word)) {
        return Some(today);
    }

    for (name, weekday) in WEEKDAYS {
        if text.contains(name) {
            return Some(next_weekday(today, weekday));
        }
    }

    None
}

/// Extract a booking duration in minutes
pub(crate) fn extract_duration(text: &str) -> Option<u32> {
    if let Some(caps) = MINUTES_RE.captures(text) {
        return caps[1].parse().ok();
    }
    if let Some(caps) = HOURS_RU_RE.captures(text) {
        let hours: u32 = caps[1].parse().ok()?;
        return Some(hours * 60);
    }
    if let Some(caps) = HOURS_EN_TH_RE.captures(text) {
        let hours: u32 = caps[1].parse().ok()?;
        return Some(hours * 60);
    }
    None
}

/// Extract a court type filter
pub(crate) fn extract_court_type(text: &str) -> Option<CourtType> {
    if INDOOR_KEYWORDS.iter().any(|word| text.contains(word)) {
        return Some(CourtType::Indoor);
    }
    if OUTDOOR_KEYWORDS.iter().any(|word| text.contains(word)) {
        return Some(CourtType::Outdoor);
    }
    None
}

/// Next occurrence of `weekday` strictly after `today`
fn next_weekday(today: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut ahead = (weekday.num_days_from_monday() as i64
        - today.weekday().num_days_from_monday() as i64)
        .rem_euclid(7);
    if ahead == 0 {
        ahead = 7;
    }
    today + Duration::days(ahead)
}
