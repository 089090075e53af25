//! questlog templates command

use clap::Args;
use questlog_domain::OBJECTIVE_TEMPLATES;

use crate::render::template_line;

#[derive(Debug, Args)]
pub struct TemplatesCommand {}

impl TemplatesCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        println!("Available objectives:");
        for template in &OBJECTIVE_TEMPLATES {
            println!("  {}", template_line(template));
        }
        Ok(())
    }
}
