//! Runtime configuration from the environment (and `.env` via dotenv).

use crate::codec::{ParseOptions, SuffixPolicy};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_FILE: &str = "allowlist.json";
pub const DEFAULT_NAME: &str = "default";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Allow-list JSON file (`ALLOWLIST_FILE`).
    pub file: PathBuf,
    /// Name given to a newly created allow-list (`ALLOWLIST_NAME`).
    pub name: String,
    /// `ALLOWLIST_SUFFIX_POLICY`, `strict` or `lenient`.
    pub suffix_policy: SuffixPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file: PathBuf::from(DEFAULT_FILE),
            name: DEFAULT_NAME.to_string(),
            suffix_policy: SuffixPolicy::Strict,
        }
    }
}

impl Config {
    /// Load from the process environment, after reading `.env` if present.
    pub fn from_env() -> Result<Config, ConfigError> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(file) = lookup("ALLOWLIST_FILE").filter(|v| !v.trim().is_empty()) {
            config.file = PathBuf::from(file.trim());
        }
        if let Some(name) = lookup("ALLOWLIST_NAME").filter(|v| !v.trim().is_empty()) {
            config.name = name.trim().to_string();
        }
        if let Some(policy) = lookup("ALLOWLIST_SUFFIX_POLICY") {
            config.suffix_policy =
                policy
                    .parse()
                    .map_err(|reason| ConfigError::InvalidValue {
                        key: "ALLOWLIST_SUFFIX_POLICY",
                        value: policy.clone(),
                        reason,
                    })?;
        }
        log::debug!("Config loaded: {config:?}");
        Ok(config)
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            suffix_policy: self.suffix_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.file, PathBuf::from("allowlist.json"));
        assert_eq!(config.parse_options().suffix_policy, SuffixPolicy::Strict);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("ALLOWLIST_FILE", "/var/lib/panel/allow.json"),
            ("ALLOWLIST_NAME", "office"),
            ("ALLOWLIST_SUFFIX_POLICY", "lenient"),
        ]))
        .unwrap();
        assert_eq!(config.file, PathBuf::from("/var/lib/panel/allow.json"));
        assert_eq!(config.name, "office");
        assert_eq!(config.suffix_policy, SuffixPolicy::Lenient);
    }

    #[test]
    fn test_invalid_policy() {
        let err = Config::from_lookup(lookup_from(&[("ALLOWLIST_SUFFIX_POLICY", "loose")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 'loose' for ALLOWLIST_SUFFIX_POLICY: unknown suffix policy 'loose'"
        );
    }
}
