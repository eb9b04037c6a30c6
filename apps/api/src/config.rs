use anyhow::{Context, Result};

/// Generation mode — stateless one-shot calls, or a persisted per-visit chat
/// session. A configuration choice, not a code fork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Stateless,
    Session,
}

impl GenerationMode {
    fn parse(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stateless" => Ok(GenerationMode::Stateless),
            "session" => Ok(GenerationMode::Session),
            other => anyhow::bail!(
                "GENERATION_MODE must be 'stateless' or 'session', got '{other}'"
            ),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub generation_mode: GenerationMode,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            generation_mode: std::env::var("GENERATION_MODE")
                .map(|s| GenerationMode::parse(&s))
                .unwrap_or(Ok(GenerationMode::Stateless))?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parses_both_variants() {
        assert_eq!(
            GenerationMode::parse("stateless").unwrap(),
            GenerationMode::Stateless
        );
        assert_eq!(
            GenerationMode::parse("Session").unwrap(),
            GenerationMode::Session
        );
    }

    #[test]
    fn test_mode_rejects_unknown_value() {
        assert!(GenerationMode::parse("chat").is_err());
    }
}
