use std::env;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::LegalHelpError;

const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_WEB_HOST: &str = "0.0.0.0";
const DEFAULT_WEB_PORT: u16 = 8501;
const DEFAULT_SESSION_TTL_MINUTES: u64 = 120;

/// Application configuration loaded from environment variables (and a local
/// `.env` file, if present).
#[derive(Debug, Clone)]
pub struct Config {
    // Language model
    pub api_key: Option<String>,
    pub model: String,
    pub openai_base_url: Option<String>,

    // Web server
    pub web_host: String,
    pub web_port: u16,

    // Sessions
    pub session_secret: Option<String>,
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, LegalHelpError> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| env::var(key).ok())?;
        config.log_keys();
        Ok(config)
    }

    /// Build a config from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LegalHelpError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let web_port = match get("WEB_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| LegalHelpError::Config(format!("WEB_PORT must be a number, got {raw:?}")))?,
            None => DEFAULT_WEB_PORT,
        };

        let ttl_minutes = match get("SESSION_TTL_MINUTES") {
            Some(raw) => raw.parse::<u64>().ok().filter(|m| *m > 0).ok_or_else(|| {
                LegalHelpError::Config(format!(
                    "SESSION_TTL_MINUTES must be a positive number, got {raw:?}"
                ))
            })?,
            None => DEFAULT_SESSION_TTL_MINUTES,
        };

        Ok(Self {
            api_key: get("API_KEY").or_else(|| get("OPENAI_API_KEY")),
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: get("OPENAI_BASE_URL"),
            web_host: get("WEB_HOST").unwrap_or_else(|| DEFAULT_WEB_HOST.to_string()),
            web_port,
            session_secret: get("SESSION_SECRET"),
            session_ttl: Duration::from_secs(ttl_minutes * 60),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn log_keys(&self) {
        fn preview_opt(val: &Option<String>) -> String {
            match val {
                Some(v) => {
                    let head: String = v.chars().take(5).collect();
                    format!("{head}...({} chars)", v.chars().count())
                }
                None => "<not set>".to_string(),
            }
        }

        info!("Config loaded:");
        info!("  API_KEY: {}", preview_opt(&self.api_key));
        info!("  OPENAI_MODEL: {}", self.model);
        info!("  OPENAI_BASE_URL: {}", self.openai_base_url.as_deref().unwrap_or("<default>"));
        info!("  SESSION_SECRET: {}", if self.session_secret.is_some() { "<set>" } else { "<random>" });

        if !self.has_api_key() {
            warn!("API key not found; set API_KEY. Case generation will fail until it is configured.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_key, None);
        assert!(!config.has_api_key());
        assert_eq!(config.model, "gpt-4");
        assert_eq!(config.openai_base_url, None);
        assert_eq!(config.web_host, "0.0.0.0");
        assert_eq!(config.web_port, 8501);
        assert_eq!(config.session_secret, None);
        assert_eq!(config.session_ttl, Duration::from_secs(120 * 60));
    }

    #[test]
    fn api_key_prefers_api_key_over_openai_api_key() {
        let config =
            Config::from_lookup(lookup(&[("API_KEY", "sk-a"), ("OPENAI_API_KEY", "sk-b")])).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-a"));

        let config = Config::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-b")])).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-b"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = Config::from_lookup(lookup(&[("API_KEY", "  "), ("OPENAI_MODEL", "")])).unwrap();
        assert_eq!(config.api_key, None);
        assert_eq!(config.model, "gpt-4");
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup(&[
            ("OPENAI_MODEL", "gpt-4o"),
            ("OPENAI_BASE_URL", "http://localhost:4000/v1"),
            ("WEB_PORT", "3000"),
            ("SESSION_TTL_MINUTES", "5"),
            ("SESSION_SECRET", "s3cret"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.openai_base_url.as_deref(), Some("http://localhost:4000/v1"));
        assert_eq!(config.web_port, 3000);
        assert_eq!(config.session_ttl, Duration::from_secs(300));
        assert_eq!(config.session_secret.as_deref(), Some("s3cret"));
    }

    #[test]
    fn invalid_numbers_are_config_errors() {
        let err = Config::from_lookup(lookup(&[("WEB_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, LegalHelpError::Config(_)));

        let err = Config::from_lookup(lookup(&[("SESSION_TTL_MINUTES", "0")])).unwrap_err();
        assert!(matches!(err, LegalHelpError::Config(_)));
    }
}
