// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "charts/mod.rs"]
pub mod charts;

#[path = "config/mod.rs"]
pub mod config;

#[path = "contests/mod.rs"]
pub mod contests;
