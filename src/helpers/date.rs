//! Date helper functions

use chrono::NaiveDateTime;

/// Format a date using a Moment.js-style format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// ```
pub fn format_date(date: &NaiveDateTime, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Format a date in ISO 8601 / XML format
pub fn date_xml(date: &NaiveDateTime) -> String {
    date.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Format date in full format (like "January 5, 2024")
pub fn full_date(date: &NaiveDateTime) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest tokens first within each family. Single-letter M and D run
    // before lowercase tokens whose chrono output contains those letters.
    let replacements = [
        // Year
        ("YYYY", "%Y"),
        ("YY", "%y"),
        // Month
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("M", "%-m"),
        // Day of month / year
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("D", "%-d"),
        // Hour
        ("HH", "%H"),
        ("hh", "%I"),
        // Minute
        ("mm", "%M"),
        // Second
        ("ss", "%S"),
        // Day of week
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    let mut result = format.to_string();

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(14, 7, 9)
            .unwrap()
    }

    #[test]
    fn test_format_date() {
        let date = sample();
        assert_eq!(format_date(&date, "YYYY-MM-DD"), "2024-01-05");
        assert_eq!(format_date(&date, "YYYY/MM/DD"), "2024/01/05");
        assert_eq!(format_date(&date, "MMMM D, YYYY"), "January 5, 2024");
        assert_eq!(format_date(&date, "D/M/YY HH:mm:ss"), "5/1/24 14:07:09");
        assert_eq!(format_date(&date, "dddd, MMM DD"), "Friday, Jan 05");
    }

    #[test]
    fn test_full_date_and_xml() {
        let date = sample();
        assert_eq!(full_date(&date), "January 5, 2024");
        assert_eq!(date_xml(&date), "2024-01-05T14:07:09");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("HH:mm:ss"), "%H:%M:%S");
        assert_eq!(moment_to_chrono_format("MMMM D, YYYY"), "%B %-d, %Y");
    }
}
