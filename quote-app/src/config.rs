//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

use quote_hex::{Deadlines, outbound::DEFAULT_PROVIDER_URL};
use quote_types::CurrencyPair;

/// Application configuration.
///
/// Every field has a default, so the server starts with no environment at all.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub database_path: PathBuf,
    pub provider_url: String,
    /// Always USD-BRL: the client labels every quote as dollars.
    pub pair: CurrencyPair,
    pub deadlines: Deadlines,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .context("PORT must be a valid port number")?;

        let database_path = lookup("DATABASE_PATH")
            .unwrap_or_else(|| "storage/cotation.db".to_string())
            .into();

        let provider_url = lookup("PROVIDER_URL").unwrap_or_else(|| DEFAULT_PROVIDER_URL.to_string());

        let defaults = Deadlines::default();
        let deadlines = Deadlines {
            upstream: millis(&lookup, "UPSTREAM_TIMEOUT_MS")?.unwrap_or(defaults.upstream),
            storage: millis(&lookup, "STORAGE_TIMEOUT_MS")?.unwrap_or(defaults.storage),
        };

        Ok(Self {
            port,
            database_path,
            provider_url,
            pair: CurrencyPair::default(),
            deadlines,
        })
    }
}

fn millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> anyhow::Result<Option<Duration>> {
    lookup(key)
        .map(|raw| {
            raw.parse()
                .map(Duration::from_millis)
                .with_context(|| format!("{} must be a whole number of milliseconds", key))
        })
        .transpose()
}
