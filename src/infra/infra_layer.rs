// The infra module contains implementations of core traits.
// Each feature implementation goes in its own submodule.

#[path = "charts/mod.rs"]
pub mod charts;

#[path = "config/mod.rs"]
pub mod config;

#[path = "domjudge/mod.rs"]
pub mod domjudge;
