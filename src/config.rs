//! Trace runner configuration.
//!
//! Read from environment variables:
//!
//! - `TWENTY48_HEIGHT`: board rows (default: 4)
//! - `TWENTY48_WIDTH`: board columns (default: 4)
//! - `TWENTY48_SEED`: spawn RNG seed (default: 1)
//! - `TWENTY48_TRACE_FORMAT`: "text" (default) or "json"

use anyhow::{bail, ensure, Context, Result};

use tui_2048::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// How each board state is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceFormat {
    /// Space/newline separated grid dump
    Text,
    /// One JSON snapshot per line
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    pub height: usize,
    pub width: usize,
    pub seed: u64,
    pub format: TraceFormat,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            seed: 1,
            format: TraceFormat::Text,
        }
    }
}

impl TraceConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let height = match var("TWENTY48_HEIGHT") {
            Some(s) => s.parse::<usize>().context("TWENTY48_HEIGHT must be a number")?,
            None => defaults.height,
        };
        let width = match var("TWENTY48_WIDTH") {
            Some(s) => s.parse::<usize>().context("TWENTY48_WIDTH must be a number")?,
            None => defaults.width,
        };
        let seed = match var("TWENTY48_SEED") {
            Some(s) => s.parse::<u64>().context("TWENTY48_SEED must be a number")?,
            None => defaults.seed,
        };
        let format = match var("TWENTY48_TRACE_FORMAT").map(|s| s.to_lowercase()) {
            None => defaults.format,
            Some(s) if s == "text" => TraceFormat::Text,
            Some(s) if s == "json" => TraceFormat::Json,
            Some(other) => bail!("unknown TWENTY48_TRACE_FORMAT {:?} (expected text or json)", other),
        };

        ensure!(
            height > 0 && width > 0,
            "board dimensions must be positive, got {}x{}",
            height,
            width
        );

        Ok(Self {
            height,
            width,
            seed,
            format,
        })
    }
}
