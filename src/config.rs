//! Runtime configuration for the risk service.

use std::{collections::HashMap, env, path::Path};

use anyhow::{anyhow, Context};

use crate::risk::{LevelUnit, ThresholdProfile};

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Address the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Unit levels are reported in; selects the threshold profile.
    pub level_unit: LevelUnit,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl Settings {
    /// Load configuration from `.env` and the process environment.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from a specific env file without touching the process environment.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let vars = dotenvy::from_path_iter(path)
            .with_context(|| format!("opening {}", path.display()))?
            .collect::<Result<HashMap<_, _>, _>>()
            .with_context(|| format!("parsing {}", path.display()))?;
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => 8080,
        };
        let level_unit = match lookup("LEVEL_UNIT") {
            Some(raw) => raw.parse().map_err(|e: String| anyhow!(e))?,
            None => LevelUnit::MicromolPerLitre,
        };
        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            level_unit,
            cors_origins,
        })
    }

    /// Threshold profile for the configured unit.
    pub fn profile(&self) -> &'static ThresholdProfile {
        self.level_unit.profile()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            level_unit: LevelUnit::MicromolPerLitre,
            cors_origins: Vec::new(),
        }
    }
}
