//! API server configuration.

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Default upper bound on a chat message, in characters.
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 1000;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:5000").
    pub bind_addr: String,
    /// Longest accepted chat message, in characters.
    pub max_message_len: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_message_len: DEFAULT_MAX_MESSAGE_LEN,
        }
    }
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable          | Default          |
    /// |-------------------|------------------|
    /// | `BIND_ADDR`       | `127.0.0.1:5000` |
    /// | `MAX_MESSAGE_LEN` | `1000`           |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            max_message_len: lookup("MAX_MESSAGE_LEN")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_message_len),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ApiConfig::from_lookup(lookup_in(&[]));
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.max_message_len, DEFAULT_MAX_MESSAGE_LEN);
    }

    #[test]
    fn env_values_override_defaults() {
        let config = ApiConfig::from_lookup(lookup_in(&[
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("MAX_MESSAGE_LEN", "250"),
        ]));
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.max_message_len, 250);
    }

    #[test]
    fn unparsable_length_falls_back_to_default() {
        let config = ApiConfig::from_lookup(lookup_in(&[("MAX_MESSAGE_LEN", "lots")]));
        assert_eq!(config.max_message_len, DEFAULT_MAX_MESSAGE_LEN);
    }
}
