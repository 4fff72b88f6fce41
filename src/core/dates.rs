// src/core/dates.rs
// Air dates show up in three shapes on game pages. Each strategy here is
// total: it yields an ISO `YYYY-MM-DD` string or nothing, and the caller
// takes the first hit in a fixed order (see scrape/metadata.rs).

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December";
const WEEKDAYS: &str = "Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday";

static ISO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap());

static LONG_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"({MONTHS})\s+(\d{{1,2}}),?\s+(\d{{4}})")).unwrap()
});

static WEEKDAY_LONG_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:{WEEKDAYS}),\s+({MONTHS})\s+(\d{{1,2}}),?\s+(\d{{4}})"
    ))
    .unwrap()
});

/// First raw ISO match, taken verbatim (no calendar validation; the source
/// either prints a real date here or nothing date-shaped at all).
pub fn iso_date(text: &str) -> Option<String> {
    ISO.find(text).map(|m| m.as_str().to_string())
}

/// "April 10, 2024" → "2024-04-10". Invalid calendar dates miss.
pub fn long_form_date(text: &str) -> Option<String> {
    let caps = LONG_FORM.captures(text)?;
    to_iso(&caps[1], &caps[2], &caps[3])
}

/// "Wednesday, April 10, 2024" → "2024-04-10". The weekday prefix is
/// required; this is the title-region shape only.
pub fn weekday_long_form_date(text: &str) -> Option<String> {
    let caps = WEEKDAY_LONG_FORM.captures(text)?;
    to_iso(&caps[1], &caps[2], &caps[3])
}

fn to_iso(month: &str, day: &str, year: &str) -> Option<String> {
    NaiveDate::parse_from_str(&format!("{month} {day} {year}"), "%B %d %Y")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_matches_verbatim() {
        assert_eq!(iso_date("aired 2024-01-15").as_deref(), Some("2024-01-15"));
        assert_eq!(iso_date("no date here"), None);
    }

    #[test]
    fn long_form_reformats_to_iso() {
        assert_eq!(long_form_date("aired January 15, 2024").as_deref(), Some("2024-01-15"));
        // Comma after the day is optional.
        assert_eq!(long_form_date("April 5 2024").as_deref(), Some("2024-04-05"));
    }

    #[test]
    fn long_form_swallows_invalid_calendar_dates() {
        assert_eq!(long_form_date("February 30, 2024"), None);
    }

    #[test]
    fn weekday_form_requires_the_weekday() {
        assert_eq!(
            weekday_long_form_date("Wednesday, April 10, 2024").as_deref(),
            Some("2024-04-10")
        );
        assert_eq!(weekday_long_form_date("April 10, 2024"), None);
    }
}
