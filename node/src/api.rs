// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::errors::EngineError;
use serde::{Deserialize, Serialize};
use veridraw_kernel::error::DrawError;

#[derive(Deserialize)]
pub struct DrawRequest {
    pub date: String,
    pub time: String,
    // Kept as a raw JSON number so 2.5 or -3 surface as InvalidRange
    // instead of a generic deserialization error.
    pub participants: serde_json::Number,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DrawResponse {
    pub winner_index: u64,
    pub participants: u64,
    pub digest: String,
    pub timestamp_millis: i64,
    pub source_url: String,
    pub recipe: String,
}

#[derive(Deserialize)]
pub struct PickRequest {
    pub digest: String,
    pub participants: serde_json::Number,
}

#[derive(Serialize)]
pub struct PickResponse {
    pub winner_index: u64,
    pub participants: u64,
    pub digest: String,
    pub recipe: String,
}

/// A participant count must arrive as a non-negative integer that fits u64;
/// the >= 1 check itself lives in the kernel.
pub fn parse_participants(n: &serde_json::Number) -> Result<u64, EngineError> {
    n.as_u64().ok_or(EngineError::Kernel(DrawError::InvalidRange))
}
