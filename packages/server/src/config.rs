use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::kernel::GPT_4O_MINI;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub figma_token: String,
    pub figma_api_base: String,
    /// Deadline for each outbound call to OpenAI or Figma
    pub upstream_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup (environment, test maps).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("{} must be set", key))
        };
        let optional = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            port: optional("PORT", "3000")
                .parse()
                .context("PORT must be a valid number")?,
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_model: optional("OPENAI_MODEL", GPT_4O_MINI),
            openai_base_url: optional("OPENAI_BASE_URL", "https://api.openai.com/v1"),
            figma_token: required("FIGMA_TOKEN")?,
            figma_api_base: optional("FIGMA_API_BASE", "https://api.figma.com/v1"),
            upstream_timeout: Duration::from_secs(
                optional("UPSTREAM_TIMEOUT_SECS", "60")
                    .parse()
                    .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }
}

/// Shortest secret whose prefix may appear in logs.
const MIN_PREFIXED_SECRET_LEN: usize = 16;

/// Show only the first few characters of a credential in logs. Short
/// credentials are hidden entirely.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "missing".to_string();
    }
    if secret.chars().count() < MIN_PREFIXED_SECRET_LEN {
        return "***".to_string();
    }
    let prefix: String = secret.chars().take(6).collect();
    format!("{}...", prefix)
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let config =
            Config::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-1"), ("FIGMA_TOKEN", "figd-1")]))
                .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.figma_api_base, "https://api.figma.com/v1");
        assert_eq!(config.upstream_timeout, Duration::from_secs(60));
    }

    #[test]
    fn missing_credentials_fail() {
        let err = Config::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-1")])).unwrap_err();
        assert!(err.to_string().contains("FIGMA_TOKEN must be set"));

        let err = Config::from_lookup(lookup(&[("OPENAI_API_KEY", " "), ("FIGMA_TOKEN", "f")]))
            .unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY must be set"));
    }

    #[test]
    fn invalid_port_fails() {
        let err = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-1"),
            ("FIGMA_TOKEN", "figd-1"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT must be a valid number"));
    }

    #[test]
    fn overrides_apply() {
        let config = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-1"),
            ("FIGMA_TOKEN", "figd-1"),
            ("PORT", "8080"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("UPSTREAM_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.openai_model, "gpt-4o");
        assert_eq!(config.upstream_timeout, Duration::from_secs(5));
    }

    #[test]
    fn masks_secrets() {
        assert_eq!(mask_secret("sk-proj-abcdef123"), "sk-pro...");
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret("figd_abc"), "***");
        assert!(!mask_secret("short-token-15c").contains("short"));
        assert_eq!(mask_secret(""), "missing");
    }
}
