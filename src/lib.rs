// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
#![no_std]

//! veridraw-kernel: deterministic, no_std winner selection over a public
//! randomness beacon digest.
//!
//! The kernel is pure: no I/O, no clocks, no global state. Given the same
//! 512-bit beacon output and participant count it always produces the same
//! winner index and the same byte-identical verification recipe.

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod error;
pub mod digest;
pub mod validate;
pub mod draw;
pub mod recipe;

#[cfg(test)]
pub mod tests;
