//! questlog init command

use anyhow::bail;
use clap::Args;
use console::Term;
use dialoguer::MultiSelect;
use questlog_domain::OBJECTIVE_TEMPLATES;

use crate::render::{print_dashboard, template_line};
use crate::Session;

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Objectives to track (see `questlog templates`); asks when omitted
    pub names: Vec<String>,

    /// Start over even if a game already exists
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self, session: &mut Session) -> anyhow::Result<()> {
        if session.state().is_initialized() && !self.force {
            bail!("A game already exists; pass --force to start over");
        }

        let names = if self.names.is_empty() {
            self.pick_interactively()?
        } else {
            self.names.clone()
        };

        if !session.initialize_game(&names) {
            bail!("Choose at least one objective");
        }

        println!("✓ Adventure started with {} objectives", session.state().objectives().len());
        println!();
        print_dashboard(session.state());
        Ok(())
    }

    fn pick_interactively(&self) -> anyhow::Result<Vec<String>> {
        if !Term::stdout().is_term() {
            bail!("No objectives given; pass names or run in a terminal");
        }

        let items: Vec<String> = OBJECTIVE_TEMPLATES.iter().map(template_line).collect();
        let chosen = MultiSelect::new()
            .with_prompt("Choose your objectives (space to toggle, enter to confirm)")
            .items(&items)
            .interact()?;

        Ok(chosen
            .into_iter()
            .map(|i| OBJECTIVE_TEMPLATES[i].name.to_string())
            .collect())
    }
}
