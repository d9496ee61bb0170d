//! Calendar utilities without timezone dependencies.
//!
//! The descriptor needs exactly one dynamic value: the current calendar
//! year for the copyright line. Pulling in a full date crate for that is
//! overkill, so the year is derived from the Unix epoch with a civil-date
//! conversion (days-to-date algorithm with proper leap year handling).

use std::time::SystemTime;

/// Format the copyright line from a year and a holder name.
///
/// Kept as a pure function so the line can be tested independently of
/// the wall clock: `copyright_line(2024, "Scalameta")` is always
/// `"Copyright © 2024 Scalameta"`.
pub fn copyright_line(year: u16, holder: &str) -> String {
    format!("Copyright © {year} {holder}")
}

/// Current UTC year from the system clock.
pub fn current_year() -> u16 {
    let secs = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    year_from_epoch_secs(secs)
}

/// Year of a Unix timestamp (seconds since 1970-01-01T00:00:00Z).
#[inline]
pub fn year_from_epoch_secs(secs: u64) -> u16 {
    civil_year_from_days((secs / 86_400) as i64)
}

/// Year component of a civil date, from days since the Unix epoch.
///
/// Days-to-civil conversion (Howard Hinnant's algorithm), reduced to the
/// year component since month and day are not needed here.
#[allow(clippy::cast_possible_truncation)] // Years stay well within u16
const fn civil_year_from_days(z: i64) -> u16 {
    let z = z + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // day of era [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // year of era [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // day of year [0, 365]
    let mp = (5 * doy + 2) / 153; // month index [0, 11], March-based
    // January and February belong to the next civil year
    if mp >= 10 { (y + 1) as u16 } else { y as u16 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2024, "Scalameta"),
            "Copyright © 2024 Scalameta"
        );
        assert_eq!(copyright_line(1999, "ACME"), "Copyright © 1999 ACME");
    }

    #[test]
    fn test_year_from_epoch_secs_epoch() {
        assert_eq!(year_from_epoch_secs(0), 1970);
    }

    #[test]
    fn test_year_from_epoch_secs_known_dates() {
        // 2000-01-01T00:00:00Z
        assert_eq!(year_from_epoch_secs(946_684_800), 2000);
        // 2024-06-15T14:30:45Z
        assert_eq!(year_from_epoch_secs(1_718_461_845), 2024);
    }

    #[test]
    fn test_year_boundaries() {
        // 2023-12-31T23:59:59Z
        assert_eq!(year_from_epoch_secs(1_704_067_199), 2023);
        // 2024-01-01T00:00:00Z
        assert_eq!(year_from_epoch_secs(1_704_067_200), 2024);
    }

    #[test]
    fn test_year_around_leap_day() {
        // 2024-02-29T12:00:00Z (leap year)
        assert_eq!(year_from_epoch_secs(1_709_208_000), 2024);
        // 2024-03-01T00:00:00Z
        assert_eq!(year_from_epoch_secs(1_709_251_200), 2024);
    }

    #[test]
    fn test_current_year_is_plausible() {
        let year = current_year();
        assert!((2024..2100).contains(&year));
    }
}
