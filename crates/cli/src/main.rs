use clap::{Parser, Subcommand};
use veridraw_cli::commands::{draw, pick, recipe};

#[derive(Parser)]
#[command(name = "veridraw")]
#[command(about = "Verifiable winner selection from the NIST randomness beacon", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a draw against the live beacon for a given instant.
    Draw {
        /// Draw date, YYYY-MM-DD (UTC). Defaults to today.
        #[arg(long, short)]
        date: Option<String>,

        /// Draw time, HH:MM (24-hour, UTC).
        #[arg(long, short)]
        time: String,

        /// Number of participants (>= 1).
        #[arg(long, short)]
        participants: u64,

        /// Base URL of the randomness beacon.
        #[arg(long, default_value = "https://beacon.nist.gov")]
        beacon_url: String,

        /// Emit machine-readable JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Compute a winner from a digest you already have (no network).
    Pick {
        /// The 128-hex-char beacon output value.
        digest: String,

        /// Number of participants (>= 1).
        participants: u64,

        /// Emit machine-readable JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print only the verification transcript for a digest and count.
    Recipe {
        /// The 128-hex-char beacon output value.
        digest: String,

        /// Number of participants (>= 1).
        participants: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Draw {
            date,
            time,
            participants,
            beacon_url,
            json,
        } => draw::run(date, &time, participants, &beacon_url, json),
        Commands::Pick {
            digest,
            participants,
            json,
        } => pick::run(&digest, participants, json),
        Commands::Recipe {
            digest,
            participants,
        } => recipe::run(&digest, participants),
    }
}
