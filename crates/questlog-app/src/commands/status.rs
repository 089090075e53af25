//! questlog status command

use clap::Args;

use crate::render::print_dashboard;
use crate::Session;

#[derive(Debug, Default, Args)]
pub struct StatusCommand {}

impl StatusCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        if !session.state().is_initialized() {
            println!("No game yet. Run `questlog init` to choose your objectives.");
            return Ok(());
        }
        print_dashboard(session.state());
        Ok(())
    }
}
