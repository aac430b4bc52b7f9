use serde::{Deserialize, Serialize};

/// Module-level tunables, merged from the application config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostsConfig {
    /// Page size used when the caller does not ask for one.
    pub default_limit: u64,
    /// Hard cap on the page size; larger requests are clamped, not refused.
    pub max_limit: u64,
    /// Longest accepted post body, in characters.
    pub max_body_len: usize,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            default_limit: 25,
            max_limit: 100,
            max_body_len: 1_000,
        }
    }
}

impl PostsConfig {
    /// Clamp a requested page size into `[1, max_limit]`, defaulting when
    /// absent.
    #[must_use]
    pub fn clamp_limit(&self, requested: Option<u64>) -> u64 {
        let mut limit = requested.unwrap_or(self.default_limit);
        if limit == 0 {
            limit = 1;
        }
        if limit > self.max_limit {
            limit = self.max_limit;
        }
        limit
    }
}
