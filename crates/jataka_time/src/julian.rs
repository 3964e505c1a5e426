//! Julian Day conversion for the proleptic Gregorian calendar.
//!
//! Standard calendar algorithms from Meeus, "Astronomical Algorithms"
//! (2nd ed.), Chapter 7. The day number may carry an arbitrary fraction,
//! so a full date+time converts without loss.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 UTC).
pub const J2000_JD: f64 = 2_451_545.0;

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day_frac` is the day of month plus the time of day as a fraction
/// (e.g. 1.5 = the 1st at 12:00). The fraction may be negative or exceed
/// the month length; the calendar arithmetic absorbs it.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Convert a Julian Date back to a Gregorian calendar date.
///
/// Returns `(year, month, day_frac)` where `day_frac` carries the time of
/// day as its fractional part.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}
