use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use url::Url;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://quiz_results.db";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_AI_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: SocketAddr,
    pub database_url: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: Url,
    pub ai_timeout: Duration,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any key lookup; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        Ok(Self {
            server_address: vars.parse_or("SERVER_ADDRESS", default_server_address())?,
            database_url: vars.get_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            gemini_api_key: vars.get("GEMINI_API_KEY"),
            gemini_model: vars.get_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_base_url: parse_base_url(&vars.get_or("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL))?,
            ai_timeout: Duration::from_secs(vars.parse_or("AI_TIMEOUT_SECS", DEFAULT_AI_TIMEOUT_SECS)?),
            log_format: parse_log_format(&vars.get_or("LOG_FORMAT", "text"))?,
        })
    }

    /// Settings for running against a given store without touching the
    /// process environment. The AI credential is left unset.
    pub fn for_database(database_url: impl Into<String>) -> Self {
        Self {
            server_address: default_server_address(),
            database_url: database_url.into(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: Url::parse(DEFAULT_GEMINI_BASE_URL).expect("default base url is valid"),
            ai_timeout: Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS),
            log_format: LogFormat::Text,
        }
    }

    pub fn ai_configured(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

fn default_server_address() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT))
}

struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Blank values count as unset.
    fn get(&self, name: &str) -> Option<String> {
        (self.0)(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn get_or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }

    fn parse_or<T>(&self, name: &str, default: T) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(name) {
            Some(raw) => raw
                .parse()
                .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
            None => Ok(default),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    // Url::join drops the last path segment unless the base ends with '/'.
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&normalized)
        .map_err(|e| Error::Config(format!("Invalid value for GEMINI_BASE_URL: {}", e)))
}

fn parse_log_format(raw: &str) -> Result<LogFormat> {
    match raw.to_ascii_lowercase().as_str() {
        "text" | "pretty" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(Error::Config(format!("Invalid value for LOG_FORMAT: {}", other))),
    }
}
