// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! NIST randomness beacon client (beacon API v2.0).
//!
//! The kernel never touches the network; this client resolves an instant to
//! the pulse published for it, and the URL it was fetched from doubles as
//! the public source reference in the draw outcome.

use crate::errors::EngineError;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// A published beacon pulse: the 512-bit output value as hex, plus the
/// canonical URL under which anyone can re-fetch it.
#[derive(Debug, Clone)]
pub struct BeaconPulse {
    pub output_value: String,
    pub uri: String,
}

#[derive(Debug, Clone)]
pub struct BeaconClient {
    base_url: String,
    client: Client,
}

#[derive(Deserialize)]
struct PulseEnvelope {
    pulse: PulseBody,
}

#[derive(Deserialize)]
struct PulseBody {
    #[serde(rename = "outputValue")]
    output_value: String,
}

impl BeaconClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build beacon HTTP client");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the pulse covering the given UTC instant (epoch milliseconds).
    /// 404 from the beacon means no pulse exists for that instant; anything
    /// else that is not a success is an upstream failure. No retries.
    pub async fn pulse_at(&self, timestamp_millis: i64) -> Result<BeaconPulse, EngineError> {
        let url = format!("{}/beacon/2.0/pulse/time/{}", self.base_url, timestamp_millis);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| EngineError::Upstream(e.to_string()))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(EngineError::PulseNotFound);
        }
        if !resp.status().is_success() {
            return Err(EngineError::Upstream(format!(
                "Pulse request failed: {}",
                resp.status()
            )));
        }

        let envelope: PulseEnvelope = resp
            .json()
            .await
            .map_err(|e| EngineError::Upstream(e.to_string()))?;

        Ok(BeaconPulse {
            output_value: envelope.pulse.output_value,
            uri: url,
        })
    }
}
