// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::digest::{Digest, HEX_LEN};
use crate::error::DrawError;
use alloc::string::String;

fn hex_of(c: char) -> String {
    core::iter::repeat(c).take(HEX_LEN).collect()
}

#[test]
fn test_parse_round_trip() {
    let s = "0123456789abcdef".repeat(8);
    assert_eq!(s.len(), HEX_LEN);
    let d = Digest::from_hex(&s).unwrap();
    assert_eq!(d.to_hex(), s);
}

#[test]
fn test_case_insensitive_parse() {
    let lower = hex_of('a');
    let upper = hex_of('A');
    let d1 = Digest::from_hex(&lower).unwrap();
    let d2 = Digest::from_hex(&upper).unwrap();
    assert_eq!(d1, d2);
    // Canonical rendering is lowercase regardless of input case.
    assert_eq!(d2.to_hex(), lower);
}

#[test]
fn test_wrong_length_rejected() {
    let short: String = core::iter::repeat('0').take(HEX_LEN - 1).collect();
    let long: String = core::iter::repeat('0').take(HEX_LEN + 1).collect();
    assert_eq!(Digest::from_hex(&short), Err(DrawError::InvalidDigest));
    assert_eq!(Digest::from_hex(&long), Err(DrawError::InvalidDigest));
    assert_eq!(Digest::from_hex(""), Err(DrawError::InvalidDigest));
}

#[test]
fn test_non_hex_rejected() {
    let mut s = hex_of('0');
    s.replace_range(64..65, "g");
    assert_eq!(Digest::from_hex(&s), Err(DrawError::InvalidDigest));

    // A "0x" prefix is not part of the external form.
    let prefixed = format!("0x{}", &hex_of('0')[..HEX_LEN - 2]);
    assert_eq!(prefixed.len(), HEX_LEN);
    assert_eq!(Digest::from_hex(&prefixed), Err(DrawError::InvalidDigest));

    // from_str_radix would tolerate a sign; the digest parser must not.
    let mut signed = hex_of('0');
    signed.replace_range(0..1, "+");
    assert_eq!(Digest::from_hex(&signed), Err(DrawError::InvalidDigest));
}

#[test]
fn test_extremes() {
    assert_eq!(Digest::from_hex(&hex_of('0')).unwrap(), Digest::ZERO);
    assert_eq!(Digest::from_hex(&hex_of('f')).unwrap(), Digest::MAX);
    assert!(Digest::ZERO.is_zero());
    assert!(!Digest::MAX.is_zero());
}

#[test]
fn test_ordering_is_numeric() {
    let mid = Digest::from_hex(&format!("8{}", "0".repeat(HEX_LEN - 1))).unwrap();
    assert!(Digest::ZERO < mid);
    assert!(mid < Digest::MAX);

    // A high limb dominates a low limb.
    let low_set = Digest::from_hex(&format!("{}f", "0".repeat(HEX_LEN - 1))).unwrap();
    let high_set = Digest::from_hex(&format!("1{}", "0".repeat(HEX_LEN - 1))).unwrap();
    assert!(low_set < high_set);
}
