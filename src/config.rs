use std::{env, time::Duration};

use secrecy::SecretString;
use thiserror::Error;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL_NAMES: &str = "gemini-2.0-flash,gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("GEMINI_MODELS must name at least one model")]
    NoModels,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: SecretString,
    pub gemini_base_url: String,
    pub model_names: Vec<String>,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub chat_timeout_secs: u64,
    pub quiz_timeout_secs: u64,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    /// Reads configuration from the process environment. The API key has no
    /// fallback; startup is refused without it.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("GEMINI_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let model_names = parse_model_names(
            &lookup("GEMINI_MODELS").unwrap_or_else(|| DEFAULT_MODEL_NAMES.to_string()),
        );
        if model_names.is_empty() {
            return Err(ConfigError::NoModels);
        }

        Ok(Self {
            gemini_api_key: SecretString::from(api_key),
            gemini_base_url: lookup("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            model_names,
            web_server_host: lookup("WEB_SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            web_server_port: lookup("WEB_SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            chat_timeout_secs: lookup("CHAT_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            quiz_timeout_secs: lookup("QUIZ_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN").filter(|origin| !origin.is_empty()),
        })
    }

    /// Configuration with every default applied and the given credential.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            gemini_api_key: SecretString::from(api_key.into()),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model_names: parse_model_names(DEFAULT_MODEL_NAMES),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            chat_timeout_secs: 30,
            quiz_timeout_secs: 20,
            cors_allowed_origin: None,
        }
    }

    pub fn chat_timeout(&self) -> Duration {
        Duration::from_secs(self.chat_timeout_secs)
    }

    pub fn quiz_timeout(&self) -> Duration {
        Duration::from_secs(self.quiz_timeout_secs)
    }
}

fn parse_model_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_blank_api_key_is_rejected() {
        let err = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_empty_model_list_is_rejected() {
        let vars = [("GEMINI_API_KEY", "key"), ("GEMINI_MODELS", " , ")];
        let err = Config::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::NoModels));
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let vars = [
            ("GEMINI_API_KEY", " key "),
            ("CHAT_TIMEOUT_SECS", "soon"),
            ("WEB_SERVER_PORT", "http"),
            ("QUIZ_TIMEOUT_SECS", "5"),
            ("GEMINI_MODELS", "gemini-x"),
        ];
        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.gemini_api_key.expose_secret(), "key");
        assert_eq!(config.chat_timeout(), Duration::from_secs(30));
        assert_eq!(config.quiz_timeout(), Duration::from_secs(5));
        assert_eq!(config.web_server_port, 8080);
        assert_eq!(config.model_names, vec!["gemini-x".to_string()]);
        assert_eq!(config.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
    }

    #[test]
    fn test_with_api_key_defaults() {
        let config = Config::with_api_key("test-key");

        assert_eq!(config.gemini_api_key.expose_secret(), "test-key");
        assert_eq!(
            config.model_names,
            vec!["gemini-2.0-flash".to_string(), "gemini-2.5-flash".to_string()]
        );
        assert_eq!(config.chat_timeout(), Duration::from_secs(30));
        assert_eq!(config.quiz_timeout(), Duration::from_secs(20));
        assert!(config.cors_allowed_origin.is_none());
    }

    #[test]
    fn test_parse_model_names_skips_blanks() {
        assert_eq!(
            parse_model_names(" gemini-a , ,gemini-b,"),
            vec!["gemini-a".to_string(), "gemini-b".to_string()]
        );
        assert!(parse_model_names(" , ").is_empty());
    }

    #[test]
    fn test_debug_output_redacts_api_key() {
        let config = Config::with_api_key("super-secret-value");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-value"));
    }
}
