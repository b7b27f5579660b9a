use anyhow::Result;
use veridraw_kernel::draw;

/// Print only the verification transcript, for pasting next to a draw
/// announcement.
pub fn run(digest: &str, participants: u64) -> Result<()> {
    let outcome = draw::select_winner(digest, participants)
        .map_err(|e| anyhow::anyhow!("Selection failed: {:?}", e))?;
    print!("{}", outcome.recipe);
    Ok(())
}
