//! questlog complete command

use anyhow::bail;
use clap::Args;
use questlog_domain::{GameState, ObjectiveId};

use crate::render::print_events;
use crate::Session;

#[derive(Debug, Args)]
pub struct CompleteCommand {
    /// Objective id, or its name
    pub objective: String,
}

impl CompleteCommand {
    pub fn run(&self, session: &mut Session) -> anyhow::Result<()> {
        let Some(id) = resolve(session.state(), &self.objective) else {
            bail!("No objective matches '{}'", self.objective);
        };

        let events = session.complete_objective(id.as_str());
        if events.is_empty() {
            println!("Already completed today. Come back tomorrow!");
        } else {
            print_events(&events);
        }
        Ok(())
    }
}

/// Match by id first, then by exact name
fn resolve(state: &GameState, query: &str) -> Option<ObjectiveId> {
    let by_id = ObjectiveId::new(query);
    if state.find_objective(&by_id).is_some() {
        return Some(by_id);
    }
    state
        .objectives()
        .iter()
        .find(|o| o.name() == query)
        .map(|o| o.id().clone())
}
