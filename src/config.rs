use crate::cache::{RevalidationPolicy, DEFAULT_REVALIDATE_SECS};
use anyhow::{anyhow, Context, Result};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

pub const TMDB_BASE: &str = "https://api.themoviedb.org/3";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub revalidate: RevalidationPolicy,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("TMDB_API_KEY")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| anyhow!("TMDB_API_KEY is not set in environment variables"))?;

        let base_url = lookup("TMDB_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| TMDB_BASE.to_string());

        let revalidate_secs = match lookup("TMDB_REVALIDATE_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("TMDB_REVALIDATE_SECS must be a number, got '{raw}'"))?,
            None => DEFAULT_REVALIDATE_SECS,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            base_url,
            revalidate: RevalidationPolicy::new(Duration::from_secs(revalidate_secs)),
            port,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
