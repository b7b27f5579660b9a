use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use veridraw_kernel::draw;

/// Independent re-verification of a published draw: recomputes the winner
/// from the public inputs alone and compares it against the operator's
/// claim. Needs nothing from the operator but the beacon digest.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The 128-hex-char beacon output value (copy it from the pulse URL).
    digest: String,

    /// Number of participants in the draw.
    participants: u64,

    /// The winner index the draw operator announced.
    #[arg(long)]
    claimed: Option<u64>,
}

#[derive(Serialize, Debug)]
struct Verdict {
    digest: String,
    participants: u64,
    winner_index: u64,
    claimed: Option<u64>,
    matches: Option<bool>,
    recipe: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    eprintln!("veridraw verifier v0.1.0");

    let outcome = draw::select_winner(&args.digest, args.participants)
        .map_err(|e| anyhow::anyhow!("Recomputation failed: {:?}", e))?;

    let verdict = Verdict {
        digest: args.digest.to_lowercase(),
        participants: args.participants,
        winner_index: outcome.winner_index,
        claimed: args.claimed,
        matches: args.claimed.map(|c| c == outcome.winner_index),
        recipe: outcome.recipe,
    };

    let json = serde_json::to_string_pretty(&verdict)?;
    println!("{}", json);

    if verdict.matches == Some(false) {
        anyhow::bail!(
            "Claimed winner {} does not match recomputed winner {}",
            args.claimed.unwrap_or_default(),
            verdict.winner_index
        );
    }

    Ok(())
}
