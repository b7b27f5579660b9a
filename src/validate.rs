// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Pure input validation. No clock access, no locale, no side effects.

use crate::error::{DrawError, KernelResult};

/// Validate `YYYY-MM-DD` by pattern: 4-digit year, month 01-12, day 01-31.
/// Calendar truth (Feb 30 and friends) is checked by [`timestamp_millis`],
/// which is where an impossible combination first matters.
pub fn date(s: &str) -> KernelResult<(i64, u32, u32)> {
    let b = s.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return Err(DrawError::InvalidFormat);
    }
    let year = parse_digits(&b[0..4])?;
    let month = parse_digits(&b[5..7])?;
    let day = parse_digits(&b[8..10])?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(DrawError::InvalidFormat);
    }
    Ok((year as i64, month as u32, day as u32))
}

/// Validate `HH:MM`, 24-hour form: hours 00-23, minutes 00-59.
pub fn time(s: &str) -> KernelResult<(u32, u32)> {
    let b = s.as_bytes();
    if b.len() != 5 || b[2] != b':' {
        return Err(DrawError::InvalidFormat);
    }
    let hour = parse_digits(&b[0..2])?;
    let minute = parse_digits(&b[3..5])?;
    if hour > 23 || minute > 59 {
        return Err(DrawError::InvalidFormat);
    }
    Ok((hour as u32, minute as u32))
}

/// A participant count is a positive integer. The upper bound is the full
/// u64 range: the limb arithmetic in [`crate::draw`] is exact for any u64
/// count, so no tighter cap is required.
pub fn participant_count(n: u64) -> KernelResult<u64> {
    if n == 0 {
        return Err(DrawError::InvalidRange);
    }
    Ok(n)
}

/// Combine a validated date and time into UTC milliseconds since the Unix
/// epoch. Fails with `InvalidInstant` when the pair does not denote a real
/// calendar instant (e.g. 2023-02-29).
pub fn timestamp_millis(date_s: &str, time_s: &str) -> KernelResult<i64> {
    let (year, month, day) = date(date_s)?;
    let (hour, minute) = time(time_s)?;
    if day > days_in_month(year, month) {
        return Err(DrawError::InvalidInstant);
    }
    let days = days_from_civil(year, month, day);
    let secs = days * 86_400 + (hour as i64) * 3_600 + (minute as i64) * 60;
    Ok(secs * 1_000)
}

fn parse_digits(b: &[u8]) -> KernelResult<u64> {
    let mut v: u64 = 0;
    for &c in b {
        if !c.is_ascii_digit() {
            return Err(DrawError::InvalidFormat);
        }
        v = v * 10 + (c - b'0') as u64;
    }
    Ok(v)
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date. Integer-only
/// (days-from-civil), valid across the whole 4-digit year range.
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = if month > 2 { month - 3 } else { month + 9 } as i64;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}
