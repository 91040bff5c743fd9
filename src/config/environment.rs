// ABOUTME: Environment-based benchmark configuration with defaults and validation
// ABOUTME: Controls entropy path, read and chunk sizes, slow-read delay and string pieces
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-driven fixture configuration
//!
//! Every value has a default; [`BenchConfig::validate`] rejects combinations
//! the read benchmarks cannot use.

use crate::constants::{env_keys, reads, strings};
use crate::errors::{BenchError, BenchResult};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};

/// Fixture configuration shared by every benchmark family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Entropy device opened read-only by the read benchmarks
    pub entropy_path: PathBuf,
    /// Bytes assembled per iteration
    pub read_size: usize,
    /// Bytes per task in the parallel chunked read
    pub chunk_size: usize,
    /// Initial length of the growing buffers
    pub grow_start: usize,
    /// Delay injected before each slow read
    pub slow_read_delay: Duration,
    /// Highest string piece index
    pub string_pieces: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            entropy_path: PathBuf::from(reads::ENTROPY_PATH),
            read_size: reads::READ_SIZE,
            chunk_size: reads::PARALLEL_CHUNK,
            grow_start: reads::GROW_START,
            slow_read_delay: Duration::from_millis(reads::SLOW_READ_DELAY_MS),
            string_pieces: strings::STRING_PIECES,
        }
    }
}

impl BenchConfig {
    /// Load configuration from environment variables
    ///
    /// Unparseable values fall back to the default with a warning.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the resulting configuration fails [`Self::validate`]
    pub fn from_env() -> BenchResult<Self> {
        let defaults = Self::default();
        let config = Self {
            entropy_path: env::var(env_keys::ENTROPY_PATH)
                .map_or(defaults.entropy_path, PathBuf::from),
            read_size: env_parse_or(env_keys::READ_SIZE, defaults.read_size),
            chunk_size: env_parse_or(env_keys::CHUNK_SIZE, defaults.chunk_size),
            grow_start: env_parse_or(env_keys::GROW_START, defaults.grow_start),
            slow_read_delay: Duration::from_millis(env_parse_or(
                env_keys::SLOW_READ_DELAY_MS,
                reads::SLOW_READ_DELAY_MS,
            )),
            string_pieces: env_parse_or(env_keys::STRING_PIECES, defaults.string_pieces),
        };
        config.validate()?;
        debug!(?config, "Benchmark configuration loaded");
        Ok(config)
    }

    /// Check that sizes are usable and mutually consistent
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for zero sizes or a chunk size that does not
    /// evenly divide the read size
    pub fn validate(&self) -> BenchResult<()> {
        if self.read_size == 0 {
            return Err(BenchError::config("read size must be greater than zero"));
        }
        if self.grow_start == 0 {
            return Err(BenchError::config(
                "initial buffer size must be greater than zero",
            ));
        }
        if self.chunk_size == 0 || self.read_size % self.chunk_size != 0 {
            return Err(BenchError::config(format!(
                "chunk size {} must evenly divide read size {}",
                self.chunk_size, self.read_size
            )));
        }
        Ok(())
    }

    /// Number of tasks the parallel chunked read spawns
    #[must_use]
    pub const fn chunk_count(&self) -> usize {
        self.read_size / self.chunk_size
    }
}

/// Parse an environment variable, falling back to `default` when unset or invalid
fn env_parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Ignoring unparseable configuration value");
            default
        }),
        Err(_) => default,
    }
}
