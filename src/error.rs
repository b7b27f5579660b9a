//! Error types.

/// Failure kinds for a single draw attempt.
///
/// Every failure is terminal for that attempt; nothing is retried inside
/// the kernel. Callers re-invoke with corrected input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawError {
    /// Date or time string does not match the required pattern.
    InvalidFormat,
    /// Participant count is not a positive integer.
    InvalidRange,
    /// Date and time do not denote a real calendar instant.
    InvalidInstant,
    /// Digest is not exactly 128 hex characters.
    InvalidDigest,
    /// Host arithmetic could not represent an intermediate value exactly.
    Overflow,
}

pub type KernelResult<T> = core::result::Result<T, DrawError>;
