//! questlog reset command

use clap::Args;

use crate::Session;

#[derive(Debug, Args)]
pub struct ResetCommand {}

impl ResetCommand {
    pub fn run(&self, session: &mut Session) -> anyhow::Result<()> {
        // Session start already ran the check for onboarded games
        if session.reset_daily_progress() {
            println!("✓ New day: completions cleared");
        } else {
            println!(
                "Already up to date for {}",
                session.state().last_active_date()
            );
        }
        Ok(())
    }
}
