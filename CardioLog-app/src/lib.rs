// CardioLog app lib.rs
//
// Command-line host for the CardioLog journal: configuration, logging,
// command parsing and plain-text rendering.

// Public modules
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;

pub use commands::{execute, Command, CommandError};
pub use config::AppConfig;
