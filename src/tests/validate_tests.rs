// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::DrawError;
use crate::validate;

#[test]
fn test_date_pattern() {
    assert_eq!(validate::date("2024-02-29"), Ok((2024, 2, 29)));
    assert_eq!(validate::date("0001-01-01"), Ok((1, 1, 1)));
    assert_eq!(validate::date("9999-12-31"), Ok((9999, 12, 31)));

    for bad in [
        "2024-2-01",   // month not zero-padded
        "24-01-01",    // two-digit year
        "2024/01/01",  // wrong separator
        "2024-13-01",  // month out of range
        "2024-00-10",  // month zero
        "2024-01-32",  // day out of range
        "2024-01-00",  // day zero
        "2024-01-015", // trailing digit
        "2024-01-aa",
        "",
    ] {
        assert_eq!(validate::date(bad), Err(DrawError::InvalidFormat), "{:?}", bad);
    }
}

#[test]
fn test_time_pattern() {
    assert_eq!(validate::time("00:00"), Ok((0, 0)));
    assert_eq!(validate::time("23:59"), Ok((23, 59)));
    assert_eq!(validate::time("09:05"), Ok((9, 5)));

    for bad in ["24:00", "12:60", "9:30", "12.30", "1230", "12:3a", "2:5", ""] {
        assert_eq!(validate::time(bad), Err(DrawError::InvalidFormat), "{:?}", bad);
    }
}

#[test]
fn test_participant_count() {
    assert_eq!(validate::participant_count(1), Ok(1));
    assert_eq!(validate::participant_count(u64::MAX), Ok(u64::MAX));
    assert_eq!(validate::participant_count(0), Err(DrawError::InvalidRange));
}

#[test]
fn test_timestamp_known_instants() {
    assert_eq!(validate::timestamp_millis("1970-01-01", "00:00"), Ok(0));
    assert_eq!(
        validate::timestamp_millis("2021-01-01", "00:00"),
        Ok(1_609_459_200_000)
    );
    assert_eq!(
        validate::timestamp_millis("2024-02-29", "12:30"),
        Ok(1_709_209_800_000)
    );
    // Instants before the epoch are still real instants.
    assert_eq!(validate::timestamp_millis("1969-12-31", "23:59"), Ok(-60_000));
}

#[test]
fn test_timestamp_rejects_impossible_instants() {
    // Pattern-valid but not real calendar days.
    assert_eq!(
        validate::timestamp_millis("2023-02-29", "00:00"),
        Err(DrawError::InvalidInstant)
    );
    assert_eq!(
        validate::timestamp_millis("2100-02-29", "00:00"),
        Err(DrawError::InvalidInstant) // 2100 is not a leap year
    );
    assert_eq!(
        validate::timestamp_millis("2024-04-31", "00:00"),
        Err(DrawError::InvalidInstant)
    );
}

#[test]
fn test_timestamp_propagates_format_errors() {
    assert_eq!(
        validate::timestamp_millis("2024-1-01", "00:00"),
        Err(DrawError::InvalidFormat)
    );
    assert_eq!(
        validate::timestamp_millis("2024-01-01", "24:00"),
        Err(DrawError::InvalidFormat)
    );
}
