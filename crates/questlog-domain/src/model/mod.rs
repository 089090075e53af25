//! Domain Models - The vocabulary of Questlog
//!
//! These types represent the "Ubiquitous Language" of the game.
//! Every name here should match how we talk about the system.

pub mod game_state;
pub mod level_curve;
pub mod mission;
pub mod objective;
pub mod player_stats;
pub mod template;
