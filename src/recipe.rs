//! Verification recipe rendering.
//!
//! The recipe is data, not code: a transcript of the exact arithmetic that
//! produced a winner index, copy-pasteable into any big-integer evaluator.
//! It deliberately assumes nothing about the verifier's language or runtime.

use crate::digest::Digest;
use alloc::format;
use alloc::string::String;

/// The formula line included verbatim in every recipe.
pub const FORMULA: &str = "winnerIndex = floor(R * participantCount / 2^512) + 1";

/// Render the transcript for one draw. Uses the canonical lowercase digest
/// form so identical inputs produce byte-identical recipes.
pub fn render(digest: &Digest, participants: u64, winner_index: u64) -> String {
    format!(
        "R = 0x{}\nparticipantCount = {}\n{}\nwinnerIndex = {}\n",
        digest.to_hex(),
        participants,
        FORMULA,
        winner_index,
    )
}
