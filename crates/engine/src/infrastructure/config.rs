//! Engine configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `GAMEDB_DATA_DIR` | `data` |
//! | `SERVER_HOST` | `0.0.0.0` |
//! | `SERVER_PORT` (or `PORT`) | `3000` |
//! | `CORS_ALLOWED_ORIGINS` | unset (CORS disabled) |

use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub data_dir: PathBuf,
    pub server_host: String,
    pub server_port: u16,
    /// Comma-separated origins, or `*`
    pub cors_allowed_origins: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid listen address {0}: {1}")]
    InvalidAddress(String, std::net::AddrParseError),
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; used by `from_env` and by tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup("GAMEDB_DATA_DIR")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "data".into());
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let server_port: u16 = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .unwrap_or_else(|| "3000".into())
            .parse()
            .unwrap_or(3000);
        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            data_dir: PathBuf::from(data_dir),
            server_host,
            server_port,
            cors_allowed_origins,
        }
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.server_host, self.server_port);
        raw.parse()
            .map_err(|e| ConfigError::InvalidAddress(raw.clone(), e))
    }
}

/// Load `.env.local` then `.env` from the repo root. Values already in the
/// environment win, and the first file to set a key wins.
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
