//! Matching System - in-memory matchmaking service
//!
//! People register with a height, a gender and the number of dates they want.
//! Each newcomer is greedily paired with compatible people already waiting,
//! and anyone whose wanted dates reach zero leaves the registry.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{is_compatible, MatchResult, Registry};
pub use crate::models::{Gender, Match, NewPerson, Person};
