//! Timestamp cleanup and parsing.
//!
//! Exports from different locales disagree on the invisible characters
//! around the time and the meridiem marker, so every matched delimiter goes
//! through [`clean_timestamp`] before chrono sees it.

use chrono::NaiveDateTime;

use crate::format::FormatSpec;

/// Code points some exporters use instead of a plain space.
const ODD_SPACES: [char; 3] = ['\u{202f}', '\u{202e}', '\u{a0}'];

/// Prepares a raw delimiter for parsing with `format`'s patterns.
///
/// Steps, in order:
/// 1. bracketed layouts: strip `[`, `]` and surrounding whitespace
/// 2. Android 12-hour: `AM`/`PM` become `am`/`pm`
/// 3. U+202F, U+202E and U+00A0 become ordinary spaces
/// 4. trim
///
/// # Example
///
/// ```
/// use chatstat::format::FormatSpec;
/// use chatstat::parsing::clean_timestamp;
///
/// assert_eq!(
///     clean_timestamp("[1/2/24, 9:05:00\u{202f}PM] ", FormatSpec::Ios12),
///     "1/2/24, 9:05:00 PM"
/// );
/// ```
pub fn clean_timestamp(raw: &str, format: FormatSpec) -> String {
    let mut cleaned = if format.is_bracketed() {
        raw.trim_matches(|c: char| c == '[' || c == ']' || c.is_whitespace())
            .to_string()
    } else {
        raw.to_string()
    };

    if format.lowercases_meridiem() {
        cleaned = cleaned.replace("AM", "am").replace("PM", "pm");
    }

    cleaned.replace(&ODD_SPACES[..], " ").trim().to_string()
}

/// Parses a raw delimiter into a date-time, `None` if it does not parse.
///
/// Dates are read day-first. A pattern is only tried when the year in the
/// text has exactly the width it expects (2 for `%y`, 4 for `%Y`), so a
/// three-digit year stays `None`. A malformed timestamp only affects its own
/// entry; callers keep going with the rest of the export.
pub fn normalize_timestamp(raw: &str, format: FormatSpec) -> Option<NaiveDateTime> {
    let cleaned = clean_timestamp(raw, format);
    let width = year_width(&cleaned)?;

    format
        .parse_patterns()
        .iter()
        .filter(|pattern| pattern_year_width(pattern) == width)
        .find_map(|pattern| NaiveDateTime::parse_from_str(&cleaned, pattern).ok())
}

/// Digits in the year of a cleaned `d/m/y, ...` timestamp.
fn year_width(cleaned: &str) -> Option<usize> {
    let (date, _) = cleaned.split_once(',')?;
    let (_, year) = date.rsplit_once('/')?;
    Some(year.trim().len())
}

fn pattern_year_width(pattern: &str) -> usize {
    if pattern.contains("%Y") { 4 } else { 2 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_clean_android_12h() {
        assert_eq!(
            clean_timestamp("1/1/23, 10:00\u{a0}PM - ", FormatSpec::Android12),
            "1/1/23, 10:00 pm -"
        );
    }

    #[test]
    fn test_clean_keeps_meridiem_case_outside_android_12h() {
        assert_eq!(
            clean_timestamp("[1/1/23, 10:00:00 PM]", FormatSpec::Ios12),
            "1/1/23, 10:00:00 PM"
        );
    }

    #[test]
    fn test_clean_replaces_bidi_override() {
        assert_eq!(
            clean_timestamp("1/1/23,\u{202e}22:00 - ", FormatSpec::Android24),
            "1/1/23, 22:00 -"
        );
    }

    #[test]
    fn test_parse_android_12h() {
        assert_eq!(
            normalize_timestamp("1/1/23, 10:00 am - ", FormatSpec::Android12),
            Some(dt(2023, 1, 1, 10, 0, 0))
        );
        assert_eq!(
            normalize_timestamp("25/12/23, 11:45\u{202f}PM - ", FormatSpec::Android12),
            Some(dt(2023, 12, 25, 23, 45, 0))
        );
        assert_eq!(
            normalize_timestamp("2/3/24, 12:15 am - ", FormatSpec::Android12),
            Some(dt(2024, 3, 2, 0, 15, 0))
        );
    }

    #[test]
    fn test_parse_android_24h() {
        assert_eq!(
            normalize_timestamp("15/01/24, 22:30 - ", FormatSpec::Android24),
            Some(dt(2024, 1, 15, 22, 30, 0))
        );
        assert_eq!(
            normalize_timestamp("5/6/24, 7:05 - ", FormatSpec::Android24),
            Some(dt(2024, 6, 5, 7, 5, 0))
        );
    }

    #[test]
    fn test_parse_ios_12h() {
        assert_eq!(
            normalize_timestamp("[15/01/24, 10:30:45\u{202f}PM] ", FormatSpec::Ios12),
            Some(dt(2024, 1, 15, 22, 30, 45))
        );
    }

    #[test]
    fn test_parse_ios_24h_two_and_four_digit_years() {
        assert_eq!(
            normalize_timestamp("[15/01/24, 22:30:45] ", FormatSpec::Ios24),
            Some(dt(2024, 1, 15, 22, 30, 45))
        );
        assert_eq!(
            normalize_timestamp("[15/01/2024, 22:30:45] ", FormatSpec::Ios24),
            Some(dt(2024, 1, 15, 22, 30, 45))
        );
    }

    #[test]
    fn test_parse_ios_24h_other_year_widths_are_none() {
        assert_eq!(normalize_timestamp("[1/1/202, 10:00:00] ", FormatSpec::Ios24), None);
        assert_eq!(normalize_timestamp("[1/1/2, 10:00:00] ", FormatSpec::Ios24), None);
    }

    #[test]
    fn test_year_width() {
        assert_eq!(year_width("15/01/2024, 22:30:45"), Some(4));
        assert_eq!(year_width("15/01/24, 22:30 -"), Some(2));
        assert_eq!(year_width("no date here"), None);
    }

    #[test]
    fn test_day_first() {
        // 3 February, not 2 March
        let parsed = normalize_timestamp("3/2/24, 8:00 - ", FormatSpec::Android24).unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 2, 3).unwrap());
    }

    #[test]
    fn test_malformed_dates_are_none() {
        // month 15 does not exist in day-first order
        assert_eq!(normalize_timestamp("1/15/24, 10:30 - ", FormatSpec::Android24), None);
        assert_eq!(normalize_timestamp("31/02/24, 10:30 - ", FormatSpec::Android24), None);
        assert_eq!(normalize_timestamp("1/1/24, 25:00 - ", FormatSpec::Android24), None);
        assert_eq!(normalize_timestamp("[1/1/24, 13:00:00 PM]", FormatSpec::Ios12), None);
    }

    #[test]
    fn test_wrong_layout_is_none() {
        assert_eq!(normalize_timestamp("1/1/23, 10:00 am - ", FormatSpec::Android24), None);
        assert_eq!(normalize_timestamp("[1/1/23, 10:00:00]", FormatSpec::Ios12), None);
    }
}
