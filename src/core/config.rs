//! Environment-driven bot configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Token, guild scope, log level, cooldown default and prefix strictness

use std::env;
use std::time::Duration;

use super::error::ConfigError;

/// Cooldown applied to commands that don't declare their own
pub const DEFAULT_COOLDOWN_SECONDS: u64 = 3;

/// Longest cooldown window accepted anywhere (one day)
pub const MAX_COOLDOWN_SECONDS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    /// When set, application commands are registered to this guild only
    pub discord_guild_id: Option<String>,
    pub log_level: String,
    pub default_cooldown: Duration,
    pub reject_prefix_collisions: bool,
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        let discord_guild_id = lookup("DISCORD_GUILD_ID").filter(|id| !id.trim().is_empty());

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let default_cooldown = match lookup("DEFAULT_COOLDOWN_SECONDS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs <= MAX_COOLDOWN_SECONDS)
                    .ok_or_else(|| ConfigError::Invalid {
                        key: "DEFAULT_COOLDOWN_SECONDS",
                        value: raw.clone(),
                    })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_COOLDOWN_SECONDS),
        };

        let reject_prefix_collisions = match lookup("REJECT_PREFIX_COLLISIONS") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                key: "REJECT_PREFIX_COLLISIONS",
                value: raw,
            })?,
            None => true,
        };

        Ok(Config {
            discord_token,
            discord_guild_id,
            log_level,
            default_cooldown,
            reject_prefix_collisions,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
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
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "abc")])).unwrap();

        assert_eq!(config.discord_token, "abc");
        assert!(config.discord_guild_id.is_none());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.default_cooldown, Duration::from_secs(3));
        assert!(config.reject_prefix_collisions);
    }

    #[test]
    fn test_config_missing_token() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DISCORD_TOKEN")));
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("DISCORD_GUILD_ID", "1234"),
            ("LOG_LEVEL", "debug"),
            ("DEFAULT_COOLDOWN_SECONDS", "10"),
            ("REJECT_PREFIX_COLLISIONS", "off"),
        ]))
        .unwrap();

        assert_eq!(config.discord_guild_id.as_deref(), Some("1234"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.default_cooldown, Duration::from_secs(10));
        assert!(!config.reject_prefix_collisions);
    }

    #[test]
    fn test_config_rejects_bad_cooldown() {
        let err = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("DEFAULT_COOLDOWN_SECONDS", "soon"),
        ]))
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Invalid { key: "DEFAULT_COOLDOWN_SECONDS", .. }
        ));
    }

    #[test]
    fn test_config_rejects_out_of_range_cooldown() {
        for raw in ["18446744073709551615", "86401"] {
            let err = Config::from_lookup(lookup_from(&[
                ("DISCORD_TOKEN", "abc"),
                ("DEFAULT_COOLDOWN_SECONDS", raw),
            ]))
            .unwrap_err();

            assert!(matches!(
                err,
                ConfigError::Invalid { key: "DEFAULT_COOLDOWN_SECONDS", ref value } if value == raw
            ));
        }

        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("DEFAULT_COOLDOWN_SECONDS", "86400"),
        ]))
        .unwrap();
        assert_eq!(config.default_cooldown, Duration::from_secs(MAX_COOLDOWN_SECONDS));
    }
}
