use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins accepted at the WebSocket upgrade. Empty means any origin
    /// (development default).
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Gate applied before the upgrade. A connection without an `Origin`
    /// header only passes when the allow-list is empty.
    pub fn origin_allowed(&self, origin: Option<&str>) -> bool {
        if self.allowed_origins.is_empty() {
            return true;
        }
        origin.is_some_and(|o| self.allowed_origins.iter().any(|allowed| allowed == o))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4123,
            allowed_origins: Vec::new(),
        }
    }
}
