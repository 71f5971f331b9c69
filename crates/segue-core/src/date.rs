//! Date values
//!
//! A date is a time value in milliseconds since the Unix epoch, stored as
//! `f64` so that interpolated instants keep sub-millisecond precision and an
//! invalid date is representable as NaN.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Instant in epoch milliseconds
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Date(f64);

impl Date {
    pub const EPOCH: Date = Date(0.0);

    #[inline]
    pub fn from_millis(millis: f64) -> Self {
        Date(millis)
    }

    /// Build a UTC date from calendar fields (month is 1-based)
    pub fn from_utc(year: i64, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        let days = days_from_civil(year, month, day) as f64;
        let ms = ((hour as f64 * 60.0 + minute as f64) * 60.0 + second as f64) * 1000.0;
        Date(days * MS_PER_DAY + ms)
    }

    #[inline]
    pub fn millis(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.0.is_finite()
    }

    /// Render as ISO 8601 (`YYYY-MM-DDTHH:mm:ss.sssZ`)
    pub fn to_iso_string(self) -> String {
        if !self.is_valid() {
            return "Invalid Date".to_string();
        }

        let ms = self.0.floor() as i64;
        let days = ms.div_euclid(MS_PER_DAY as i64);
        let in_day = ms.rem_euclid(MS_PER_DAY as i64);
        let (year, month, day) = civil_from_days(days);

        let year = if (0..=9999).contains(&year) {
            format!("{:04}", year)
        } else if year < 0 {
            format!("-{:06}", -year)
        } else {
            format!("+{:06}", year)
        };

        format!(
            "{}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            year,
            month,
            day,
            in_day / 3_600_000,
            in_day / 60_000 % 60,
            in_day / 1000 % 60,
            in_day % 1000
        )
    }
}

impl From<SystemTime> for Date {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Date(after.as_secs_f64() * 1000.0),
            Err(before) => Date(-before.duration().as_secs_f64() * 1000.0),
        }
    }
}

impl TryFrom<Date> for SystemTime {
    type Error = Date;

    fn try_from(date: Date) -> Result<Self, Self::Error> {
        if !date.is_valid() {
            return Err(date);
        }
        let offset = Duration::from_secs_f64(date.0.abs() / 1000.0);
        let time = if date.0 >= 0.0 {
            UNIX_EPOCH.checked_add(offset)
        } else {
            UNIX_EPOCH.checked_sub(offset)
        };
        time.ok_or(date)
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({})", self.to_iso_string())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

// Howard Hinnant's civil calendar algorithms
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let m = month as i64;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_utc() {
        assert_eq!(Date::from_utc(1970, 1, 1, 0, 0, 0).millis(), 0.0);
        assert_eq!(Date::from_utc(2000, 1, 1, 0, 0, 0).millis(), 946_684_800_000.0);
        assert_eq!(Date::from_utc(2000, 1, 2, 0, 0, 0).millis(), 946_771_200_000.0);
    }

    #[test]
    fn test_iso_string() {
        assert_eq!(Date::EPOCH.to_iso_string(), "1970-01-01T00:00:00.000Z");
        assert_eq!(
            Date::from_utc(2000, 1, 1, 12, 30, 5).to_iso_string(),
            "2000-01-01T12:30:05.000Z"
        );
        assert_eq!(Date::from_millis(-1.0).to_iso_string(), "1969-12-31T23:59:59.999Z");
        assert_eq!(Date::from_millis(f64::NAN).to_iso_string(), "Invalid Date");
    }

    #[test]
    fn test_system_time_conversion() {
        let date = Date::from_utc(2024, 2, 29, 0, 0, 0);
        let time = SystemTime::try_from(date).unwrap();
        assert_eq!(Date::from(time), date);
        assert!(SystemTime::try_from(Date::from_millis(f64::NAN)).is_err());
    }
}
