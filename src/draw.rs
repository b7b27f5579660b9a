// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Winner selection: the deterministic mapping at the heart of the system.

use crate::digest::Digest;
use crate::error::{DrawError, KernelResult};
use crate::recipe;
use crate::validate;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// The immutable inputs of one draw: the beacon digest, the participant
/// count, and the public reference under which the digest is published.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawInput {
    digest: Digest,
    participants: u64,
    source: String,
}

impl DrawInput {
    pub fn new(digest: Digest, participants: u64, source: String) -> KernelResult<DrawInput> {
        let participants = validate::participant_count(participants)?;
        Ok(DrawInput { digest, participants, source })
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn participants(&self) -> u64 {
        self.participants
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Derive the outcome for this input. Pure; calling twice yields
    /// byte-identical results.
    pub fn outcome(&self) -> KernelResult<DrawOutcome> {
        let index = winner_index(&self.digest, self.participants)?;
        Ok(DrawOutcome {
            winner_index: index,
            recipe: recipe::render(&self.digest, self.participants, index),
            source: self.source.clone(),
        })
    }
}

/// Result of one draw. `winner_index` is 1-based and always within
/// `[1, participants]`; `source` is carried through from the input
/// unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOutcome {
    pub winner_index: u64,
    pub recipe: String,
    pub source: String,
}

/// `floor(R * n / 2^512)` for a 512-bit `R`, computed exactly.
///
/// One pass of limb-by-scalar multiplication with u128 intermediates: the
/// product `R * n` is below 2^576, and every bit of it at position >= 512
/// lives in the carry out of the top limb. That carry is the quotient.
fn scale_to_space(digest: &Digest, n: u64) -> u64 {
    let mut carry: u128 = 0;
    for limb in digest.limbs() {
        let prod = (*limb as u128) * (n as u128) + carry;
        carry = prod >> 64;
    }
    // carry <= n - 1 because R < 2^512.
    carry as u64
}

/// Map a digest and a participant count to a winner index in
/// `[1, participants]`.
///
/// A uniform `R` over `[0, 2^512)` scaled this way partitions the digest
/// space into `participants` equal-width intervals; the bias is bounded by
/// `participants / 2^512`. All-zero digest maps to 1, all-ones to
/// `participants`.
pub fn winner_index(digest: &Digest, participants: u64) -> KernelResult<u64> {
    let participants = validate::participant_count(participants)?;
    scale_to_space(digest, participants)
        .checked_add(1)
        .ok_or(DrawError::Overflow)
}

/// The one public operation a verifier needs: parse the published hex
/// digest and compute the winner plus its reproduction recipe.
pub fn select_winner(digest_hex: &str, participants: u64) -> KernelResult<DrawOutcome> {
    DrawInput::new(Digest::from_hex(digest_hex)?, participants, String::new())?.outcome()
}
