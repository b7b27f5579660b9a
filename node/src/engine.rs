// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Draw orchestration and caching.
//!
//! The kernel is stateless; everything mutable lives here. A published
//! pulse is immutable, so cached entries never need invalidation — the
//! only rules are: timestamp changed -> the cached pulse is useless,
//! participants changed -> reuse the pulse and recompute.

use crate::api::DrawResponse;
use crate::beacon::{BeaconClient, BeaconPulse};
use crate::config::NodeConfig;
use crate::errors::EngineError;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use veridraw_kernel::digest::Digest;
use veridraw_kernel::draw::{DrawInput, DrawOutcome};

struct CachedPulse {
    timestamp_millis: i64,
    pulse: BeaconPulse,
}

pub struct DrawEngine {
    beacon: BeaconClient,
    // Last fetched pulse, valid only for its own timestamp.
    pulse_cache: Option<CachedPulse>,
    // Outcomes keyed by the full public input. Safe forever: a published
    // pulse never changes.
    outcomes: HashMap<(i64, u64), DrawResponse>,
}

impl DrawEngine {
    pub fn new(cfg: &NodeConfig) -> Self {
        Self {
            beacon: BeaconClient::new(
                cfg.beacon_base_url.clone(),
                Duration::from_secs(cfg.request_timeout_secs),
            ),
            pulse_cache: None,
            outcomes: HashMap::new(),
        }
    }

    /// Seed the pulse cache with an already-known pulse, e.g. when
    /// replaying a historic draw whose pulse the operator has on hand.
    pub fn seed_pulse(&mut self, timestamp_millis: i64, pulse: BeaconPulse) {
        self.pulse_cache = Some(CachedPulse { timestamp_millis, pulse });
    }

    /// Resolve a draw for (instant, participants), fetching the beacon
    /// pulse only when neither cache can answer.
    pub async fn draw(
        &mut self,
        timestamp_millis: i64,
        participants: u64,
    ) -> Result<DrawResponse, EngineError> {
        if let Some(hit) = self.outcomes.get(&(timestamp_millis, participants)) {
            metrics::counter!("veridraw_cache_hits_total", 1);
            return Ok(hit.clone());
        }
        metrics::counter!("veridraw_cache_misses_total", 1);

        let pulse = self.pulse_for(timestamp_millis).await?;
        let digest = Digest::from_hex(&pulse.output_value).map_err(|e| {
            // The beacon returned something that is not a 512-bit hex value.
            tracing::error!("Beacon pulse had malformed outputValue: {:?}", e);
            EngineError::Upstream("Beacon returned a malformed pulse".to_string())
        })?;

        let input = DrawInput::new(digest, participants, pulse.uri.clone())
            .map_err(EngineError::Kernel)?;
        let outcome: DrawOutcome = input.outcome().map_err(EngineError::Kernel)?;

        let response = DrawResponse {
            winner_index: outcome.winner_index,
            participants,
            digest: digest.to_hex(),
            timestamp_millis,
            source_url: outcome.source,
            recipe: outcome.recipe,
        };
        self.outcomes
            .insert((timestamp_millis, participants), response.clone());
        metrics::counter!("veridraw_draws_total", 1);
        Ok(response)
    }

    /// Offline path: digest supplied directly by the caller, no beacon
    /// involved and nothing cached.
    pub fn pick(&self, digest_hex: &str, participants: u64) -> Result<DrawOutcome, EngineError> {
        let outcome = veridraw_kernel::draw::select_winner(digest_hex, participants)
            .map_err(EngineError::Kernel)?;
        metrics::counter!("veridraw_draws_total", 1);
        Ok(outcome)
    }

    async fn pulse_for(&mut self, timestamp_millis: i64) -> Result<BeaconPulse, EngineError> {
        if let Some(cached) = &self.pulse_cache {
            if cached.timestamp_millis == timestamp_millis {
                return Ok(cached.pulse.clone());
            }
        }

        let started = Instant::now();
        let pulse = self.beacon.pulse_at(timestamp_millis).await?;
        metrics::histogram!(
            "veridraw_beacon_fetch_duration_seconds",
            started.elapsed().as_secs_f64()
        );
        tracing::debug!(
            timestamp_millis,
            uri = %pulse.uri,
            "Fetched beacon pulse"
        );

        self.pulse_cache = Some(CachedPulse {
            timestamp_millis,
            pulse: pulse.clone(),
        });
        Ok(pulse)
    }
}
