use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: Option<String>,
    /// Extra per-target directives appended to the base level, in
    /// `EnvFilter` syntax, e.g. `"hyper=warn,axum=info"`.
    pub filters: Option<String>,
}

impl LoggingConfig {
    /// Renders the full `EnvFilter` directive string: the base level
    /// (defaulting to `info`) followed by any per-target filters.
    pub fn directives(&self) -> String {
        let level = self.level.as_deref().unwrap_or("info");
        match self.filters.as_deref() {
            Some(filters) if !filters.is_empty() => format!("{},{}", level, filters),
            _ => level.to_string(),
        }
    }
}
