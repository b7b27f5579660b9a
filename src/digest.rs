// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-width 512-bit beacon digest.

use crate::error::{DrawError, KernelResult};
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt::Write as _;

/// Number of hex characters in a published beacon output value.
pub const HEX_LEN: usize = 128;
/// Digest width in bits.
pub const WIDTH: u32 = 512;

const LIMBS: usize = 8;
const HEX_PER_LIMB: usize = 16;

/// A 512-bit unsigned integer, stored as u64 limbs with limb 0 least
/// significant. The external form is exactly [`HEX_LEN`] hex characters,
/// big-endian, no sign and no `0x` prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digest([u64; LIMBS]);

impl Digest {
    pub const ZERO: Digest = Digest([0; LIMBS]);
    pub const MAX: Digest = Digest([u64::MAX; LIMBS]);

    /// Parse a beacon output value. Case-insensitive; anything that is not
    /// exactly 128 hex characters is rejected, never truncated or padded.
    pub fn from_hex(s: &str) -> KernelResult<Digest> {
        if s.len() != HEX_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DrawError::InvalidDigest);
        }
        let mut limbs = [0u64; LIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            // Most significant 16 chars map to limb 7, and so on down.
            let end = HEX_LEN - i * HEX_PER_LIMB;
            let chunk = &s[end - HEX_PER_LIMB..end];
            // Char check above guarantees this parse cannot fail.
            *limb = u64::from_str_radix(chunk, 16).map_err(|_| DrawError::InvalidDigest)?;
        }
        Ok(Digest(limbs))
    }

    /// Canonical lowercase hex rendering, always 128 characters.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(HEX_LEN);
        for limb in self.0.iter().rev() {
            // Writing to a String cannot fail.
            let _ = write!(out, "{:016x}", limb);
        }
        out
    }

    /// Limbs in little-endian order (limb 0 least significant).
    pub fn limbs(&self) -> &[u64; LIMBS] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; LIMBS]
    }
}

impl Ord for Digest {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..LIMBS).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Digest {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
