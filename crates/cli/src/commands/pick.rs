use anyhow::Result;
use serde::Serialize;
use veridraw_kernel::draw;

#[derive(Serialize)]
struct PickOutput<'a> {
    digest: String,
    participants: u64,
    winner_index: u64,
    recipe: &'a str,
}

/// Offline draw: the caller already has the published digest in hand.
pub fn run(digest: &str, participants: u64, json: bool) -> Result<()> {
    let outcome = draw::select_winner(digest, participants)
        .map_err(|e| anyhow::anyhow!("Selection failed: {:?}", e))?;

    if json {
        let out = PickOutput {
            digest: digest.to_lowercase(),
            participants,
            winner_index: outcome.winner_index,
            recipe: &outcome.recipe,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Winner: #{} of {}", outcome.winner_index, participants);
        println!();
        println!("Reproduce with any big-integer evaluator:");
        print!("{}", outcome.recipe);
    }
    Ok(())
}
