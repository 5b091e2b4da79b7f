use std::env;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8765";

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub verbose: bool,
}

impl Config {
    /// Read configuration once at startup. `ANKI_CONNECT_URL` selects the
    /// upstream endpoint; everything else about the upstream contract is fixed.
    pub fn from_env() -> Self {
        let endpoint = env::var("ANKI_CONNECT_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        // Diagnostics go to stderr only; stdout carries the protocol.
        let verbose = env::var("ANKI_MCP_VERBOSE")
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false);

        Config { endpoint, verbose }
    }
}
