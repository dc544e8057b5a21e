//! Guild War scouting: finds a crew by name, pulls its round history and roster,
//! compares it against our own crew and renders fixed-width reports.

pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod network;
pub mod ops;
pub mod refinery;
pub mod sink;

pub use error::ScoutError;
