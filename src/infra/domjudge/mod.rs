// DomJudge infra layer.
// - `domjudge_client.rs` talks to the DomJudge REST API.

#[path = "domjudge_client.rs"]
pub mod domjudge_client;

pub use domjudge_client::DomJudgeClient;
