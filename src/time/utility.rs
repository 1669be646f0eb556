use chrono::NaiveDate;

use crate::holidayerror::HolidayError;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}


pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Builds a date from already split year/month/day numbers, rejecting
/// out-of-range months and days instead of rolling them over.
pub fn checked_ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) || day == 0 || day > days_of_month(year, month) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses a strict `YYYY-MM-DD` string.
///
/// Only the zero-padded form is accepted: `2023-9-1` and `2023-09-01T00:00`
/// are both rejected.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, HolidayError> {
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes.iter().enumerate().all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return Err(HolidayError::invalid_date_format(s));
    }
    NaiveDate::parse_from_str(s, ISO_DATE_FORMAT).map_err(|_| HolidayError::invalid_date_format(s))
}

pub fn format_iso_date(d: NaiveDate) -> String {
    d.format(ISO_DATE_FORMAT).to_string()
}
