//! CLI Commands

pub mod complete;
pub mod init;
pub mod reset;
pub mod status;
pub mod templates;

pub use complete::CompleteCommand;
pub use init::InitCommand;
pub use reset::ResetCommand;
pub use status::StatusCommand;
pub use templates::TemplatesCommand;
