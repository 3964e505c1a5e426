//! Civil calendar date/time with a fixed UTC offset.
//!
//! Birth records are civil wall-clock times; ephemeris math wants Julian
//! Days in UTC. `CivilDateTime` holds the civil fields plus the offset and
//! converts both ways exactly.

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// Civil calendar date/time with sub-second precision and a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    /// Offset of local civil time from UTC in hours, east positive.
    pub utc_offset_hours: f64,
}

/// Days in each month of a non-leap year.
const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        MONTH_DAYS[(month - 1) as usize]
    }
}

impl CivilDateTime {
    /// Create a validated civil date/time.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate("month must be 1-12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate("day outside month length"));
        }
        if hour >= 24 {
            return Err(TimeError::InvalidDate("hour must be 0-23"));
        }
        if minute >= 60 {
            return Err(TimeError::InvalidDate("minute must be 0-59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidDate("second must be in [0, 60)"));
        }
        if !utc_offset_hours.is_finite() || utc_offset_hours.abs() > 14.0 {
            return Err(TimeError::InvalidOffset("offset must be within +/-14h"));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        })
    }

    /// Julian Date in UTC of this civil instant.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + (self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
                - self.utc_offset_hours)
                / 24.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Reconstruct the civil date/time at a UTC Julian Date, expressed in
    /// the given UTC offset.
    pub fn from_jd_utc(jd_utc: f64, utc_offset_hours: f64) -> Self {
        let local_jd = jd_utc + utc_offset_hours / 24.0;
        let (year, month, day_frac) = jd_to_calendar(local_jd);
        let day = day_frac.floor() as u32;
        let mut total_seconds = day_frac.fract() * 86_400.0;
        // Floating-point residue can land exactly on the next day boundary.
        if total_seconds >= 86_400.0 {
            total_seconds = 86_400.0 - 1e-6;
        }
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        }
    }

    /// This instant shifted by a (possibly fractional) number of days,
    /// keeping the same UTC offset.
    pub fn add_days(&self, days: f64) -> Self {
        Self::from_jd_utc(self.to_jd_utc() + days, self.utc_offset_hours)
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let offset_min = (self.utc_offset_hours * 60.0).round() as i32;
        let sign = if offset_min < 0 { '-' } else { '+' };
        let offset_min = offset_min.abs();
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            whole,
            sign,
            offset_min / 60,
            offset_min % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn j2000_noon_utc() {
        let t = CivilDateTime::new(2000, 1, 1, 12, 0, 0.0, 0.0).unwrap();
        assert!((t.to_jd_utc() - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn offset_shifts_jd() {
        // 17:30 at +5:30 is 12:00 UTC
        let t = CivilDateTime::new(2000, 1, 1, 17, 30, 0.0, 5.5).unwrap();
        assert!((t.to_jd_utc() - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn round_trip_preserves_fields() {
        let t = CivilDateTime::new(1985, 6, 11, 5, 45, 30.0, 5.5).unwrap();
        let back = CivilDateTime::from_jd_utc(t.to_jd_utc(), 5.5);
        assert_eq!(back.year, 1985);
        assert_eq!(back.month, 6);
        assert_eq!(back.day, 11);
        assert_eq!(back.hour, 5);
        assert_eq!(back.minute, 45);
        assert!((back.second - 30.0).abs() < 1e-3);
    }

    #[test]
    fn minutes_survive_conversion_exactly() {
        // No silent truncation: 23 minutes must come back as 23 minutes.
        let t = CivilDateTime::new(2021, 11, 3, 9, 23, 0.0, -8.0).unwrap();
        let back = CivilDateTime::from_jd_utc(t.to_jd_utc(), -8.0);
        assert_eq!((back.hour, back.minute), (9, 23));
    }

    #[test]
    fn add_days_crosses_month() {
        let t = CivilDateTime::new(2000, 1, 31, 0, 0, 0.0, 0.0).unwrap();
        let next = t.add_days(1.0);
        assert_eq!((next.year, next.month, next.day), (2000, 2, 1));
    }

    #[test]
    fn add_fractional_days() {
        let t = CivilDateTime::new(2000, 1, 1, 0, 0, 0.0, 0.0).unwrap();
        let later = t.add_days(0.5);
        assert_eq!(later.hour, 12);
    }

    #[test]
    fn rejects_bad_month() {
        assert!(CivilDateTime::new(2000, 13, 1, 0, 0, 0.0, 0.0).is_err());
    }

    #[test]
    fn rejects_bad_day() {
        assert!(CivilDateTime::new(2001, 2, 29, 0, 0, 0.0, 0.0).is_err());
    }

    #[test]
    fn accepts_leap_day() {
        assert!(CivilDateTime::new(2000, 2, 29, 0, 0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_huge_offset() {
        assert!(CivilDateTime::new(2000, 1, 1, 0, 0, 0.0, 15.0).is_err());
    }

    #[test]
    fn display_format() {
        let t = CivilDateTime::new(2000, 1, 1, 12, 0, 0.0, -3.5).unwrap();
        assert_eq!(t.to_string(), "2000-01-01T12:00:00-03:30");
    }
}
