use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("PORT must be a number, got '{0}'")]
    InvalidPort(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("SUPABASE_URL is set but SUPABASE_KEY (or SUPABASE_SERVICE_ROLE_KEY) is missing")]
    MissingApiKey,

    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum VocabSource {
    File(PathBuf),
    Rest {
        url: String,
        api_key: String,
        table: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub assets_dir: PathBuf,
    pub static_dir: PathBuf,
    pub vocab: VocabSource,
    pub cors: CorsOrigins,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port_raw = var("PORT", "8000");
        let port: u16 = port_raw
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port_raw.clone()))?;
        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(format!("{}:{}", host, port)))?;

        let assets_dir = PathBuf::from(var("ASSETS_DIR", "./assets"));
        let static_dir = PathBuf::from(var("STATIC_DIR", "./static"));

        let vocab = match lookup("SUPABASE_URL").filter(|u| !u.is_empty()) {
            Some(url) => VocabSource::Rest {
                url,
                api_key: ["SUPABASE_KEY", "SUPABASE_SERVICE_ROLE_KEY"]
                    .into_iter()
                    .find_map(|key| lookup(key).filter(|k| !k.is_empty()))
                    .ok_or(ConfigError::MissingApiKey)?,
                table: var("VOCAB_TABLE", "flashcards"),
            },
            None => VocabSource::File(
                lookup("VOCAB_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| assets_dir.join("words.json")),
            ),
        };

        let cors = parse_origins(&var("CORS_ORIGINS", "*"))?;

        Ok(Self {
            addr,
            assets_dir,
            static_dir,
            vocab,
            cors,
        })
    }
}

/// `*` allows every origin; otherwise a comma-separated list of origins.
pub fn parse_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "*" {
        return Ok(CorsOrigins::Any);
    }

    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| {
            let scheme_ok = o.starts_with("http://") || o.starts_with("https://");
            if scheme_ok && HeaderValue::from_str(o).is_ok() {
                Ok(o.trim_end_matches('/').to_string())
            } else {
                Err(ConfigError::InvalidOrigin(o.to_string()))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsOrigins::List(origins))
}
