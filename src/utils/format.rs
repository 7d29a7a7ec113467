//! Formatting utilities for dates and other display values.
//!
//! The API serves local datetimes as ISO-8601 strings; parsing is done by
//! hand since only the date and minute components are ever displayed.

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parsed components of an ISO-8601 local datetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DateTimeParts {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
}

fn parse_iso(iso: &str) -> Option<DateTimeParts> {
    let (date, time) = match iso.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (iso, None),
    };

    let mut date_parts = date.split('-');
    let year: u16 = date_parts.next()?.parse().ok()?;
    let month: u8 = date_parts.next()?.parse().ok()?;
    let day: u8 = date_parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let (hour, minute) = match time {
        Some(time) => {
            let mut time_parts = time.split(':');
            let hour: u8 = time_parts.next()?.parse().ok()?;
            let minute: u8 = time_parts.next()?.parse().ok()?;
            if hour > 23 || minute > 59 {
                return None;
            }
            (hour, minute)
        }
        None => (0, 0),
    };

    Some(DateTimeParts {
        year,
        month,
        day,
        hour,
        minute,
    })
}

/// Format an ISO datetime for table cells (e.g. "Mar 1, 2024 2:05 PM").
///
/// Returns `None` on malformed input so callers can render a placeholder.
pub fn format_date_time(iso: &str) -> Option<String> {
    let parts = parse_iso(iso)?;
    let (hour12, meridiem) = match parts.hour {
        0 => (12, "AM"),
        1..=11 => (parts.hour, "AM"),
        12 => (12, "PM"),
        _ => (parts.hour - 12, "PM"),
    };
    Some(format!(
        "{} {}, {} {}:{:02} {}",
        MONTHS[(parts.month - 1) as usize],
        parts.day,
        parts.year,
        hour12,
        parts.minute,
        meridiem
    ))
}

/// Format only the date portion of an ISO datetime (e.g. "Mar 1, 2024").
pub fn format_date(iso: &str) -> Option<String> {
    let parts = parse_iso(iso)?;
    Some(format!(
        "{} {}, {}",
        MONTHS[(parts.month - 1) as usize],
        parts.day,
        parts.year
    ))
}

/// Today's local date as `YYYY-MM-DD`, used in export file names.
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_time() {
        assert_eq!(
            format_date_time("2024-03-01T14:05:00").as_deref(),
            Some("Mar 1, 2024 2:05 PM")
        );
        assert_eq!(
            format_date_time("2024-01-15T00:30:00").as_deref(),
            Some("Jan 15, 2024 12:30 AM")
        );
        assert_eq!(
            format_date_time("2024-12-31T12:00:00").as_deref(),
            Some("Dec 31, 2024 12:00 PM")
        );
    }

    #[test]
    fn test_format_date_only_input() {
        assert_eq!(format_date("2024-06-09").as_deref(), Some("Jun 9, 2024"));
        assert_eq!(
            format_date_time("2024-06-09").as_deref(),
            Some("Jun 9, 2024 12:00 AM")
        );
    }

    #[test]
    fn test_malformed_input_is_none() {
        assert_eq!(format_date_time(""), None);
        assert_eq!(format_date_time("not-a-date"), None);
        assert_eq!(format_date_time("2024-13-01T00:00:00"), None);
        assert_eq!(format_date_time("2024-02-10T25:00:00"), None);
    }
}
