//! Domain Services - Business logic that doesn't belong to a single entity
//!
//! Services are the "verbs" of the domain. All of them are pure: they
//! read the current value and return the next one.

pub mod daily_reset;
pub mod onboarding;
pub mod progression;
