//! Configuration loading for Reelex.
//!
//! Everything comes from the process environment, optionally seeded from a
//! `.env` file. The parsing itself is driven by a plain key/value map so
//! tests never have to touch process-global state.

use std::collections::HashMap;
use std::path::Path;

/// Bearer credential for the listing endpoint. Required.
pub const ENV_API_TOKEN: &str = "TMDB_API_TOKEN";
/// Listing API base URL override.
pub const ENV_API_BASE: &str = "TMDB_API_BASE";
/// Poster hosting base URL override.
pub const ENV_IMAGE_BASE: &str = "TMDB_IMAGE_BASE";
/// Number of listing pages aggregated at startup.
pub const ENV_FETCH_PAGES: &str = "REELEX_FETCH_PAGES";

const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";
const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
const DEFAULT_FETCH_PAGES: u32 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {key}: {value}")]
    InvalidVar { key: &'static str, value: String },

    #[error("failed to read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    pub api_base: String,
    pub image_base: String,
    pub fetch_pages: u32,
}

impl Config {
    /// Load from the process environment, seeding it from `./.env` when one
    /// exists. A missing `.env` file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env file");
        }
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::from_env_map(&env)
    }

    /// Load from the process environment seeded from an explicit env file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        dotenvy::from_path(path)?;
        tracing::debug!(path = %path.display(), "loaded env file");
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::from_env_map(&env)
    }

    /// Parse configuration out of a key/value snapshot.
    pub fn from_env_map(
        env: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let api_token = env
            .get(ENV_API_TOKEN)
            .filter(|v| !v.is_empty())
            .cloned()
            .ok_or(ConfigError::MissingVar(ENV_API_TOKEN))?;

        let api_base = env
            .get(ENV_API_BASE)
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let image_base = env
            .get(ENV_IMAGE_BASE)
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_IMAGE_BASE.to_string());

        let fetch_pages = match env.get(ENV_FETCH_PAGES) {
            Some(value) => value.parse::<u32>().map_err(|_| {
                ConfigError::InvalidVar {
                    key: ENV_FETCH_PAGES,
                    value: value.clone(),
                }
            })?,
            None => DEFAULT_FETCH_PAGES,
        };

        Ok(Self {
            api_token,
            api_base,
            image_base,
            fetch_pages,
        })
    }
}
