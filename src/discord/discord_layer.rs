// Discord layer - slash commands and the framework error hook.

#[path = "commands/command_catalog.rs"]
pub mod commands;

// Re-export command types for convenience
pub use commands::{Context, Data, Error};
