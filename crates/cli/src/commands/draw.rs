use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use veridraw_kernel::{draw, validate};

#[derive(Deserialize)]
struct PulseEnvelope {
    pulse: PulseBody,
}

#[derive(Deserialize)]
struct PulseBody {
    #[serde(rename = "outputValue")]
    output_value: String,
}

#[derive(Serialize)]
struct DrawOutput<'a> {
    date: &'a str,
    time: &'a str,
    timestamp_millis: i64,
    participants: u64,
    digest: String,
    winner_index: u64,
    source_url: &'a str,
    recipe: &'a str,
}

/// Live draw against the public beacon. The date defaults to today (UTC),
/// matching how a draw is usually announced ("today at 14:00").
pub fn run(
    date: Option<String>,
    time: &str,
    participants: u64,
    beacon_url: &str,
    json: bool,
) -> Result<()> {
    let date = date.unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string());
    let timestamp_millis = validate::timestamp_millis(&date, time)
        .map_err(|e| anyhow::anyhow!("Invalid date/time: {:?}", e))?;

    let url = format!(
        "{}/beacon/2.0/pulse/time/{}",
        beacon_url.trim_end_matches('/'),
        timestamp_millis
    );
    let resp = reqwest::blocking::get(&url).context("Failed to reach the beacon")?;
    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        bail!(
            "No beacon pulse published for {} {} UTC. Try another time.",
            date,
            time
        );
    }
    if !resp.status().is_success() {
        bail!("Pulse request failed: {}", resp.status());
    }
    let envelope: PulseEnvelope = resp.json().context("Failed to parse beacon response")?;

    let outcome = draw::select_winner(&envelope.pulse.output_value, participants)
        .map_err(|e| anyhow::anyhow!("Selection failed: {:?}", e))?;
    let digest = envelope.pulse.output_value.to_lowercase();

    if json {
        let out = DrawOutput {
            date: &date,
            time,
            timestamp_millis,
            participants,
            digest,
            winner_index: outcome.winner_index,
            source_url: &url,
            recipe: &outcome.recipe,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Pulse:  {}", url);
        println!("Digest: {}", digest);
        println!("Winner: #{} of {}", outcome.winner_index, participants);
        println!();
        println!("Reproduce with any big-integer evaluator:");
        print!("{}", outcome.recipe);
    }
    Ok(())
}
