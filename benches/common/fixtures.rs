// ABOUTME: Benchmark fixtures for configuration, entropy sources and key batches
// ABOUTME: Setup failures abort the benchmark before any measurement window opens
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Benchmark fixtures.
//!
//! Everything here runs before a measurement window opens.

use std::sync::Once;
use strategy_bench::config::BenchConfig;
use strategy_bench::entropy::{EntropySource, SlowReader};
use strategy_bench::harness::{setup_or_abort, BenchSizes};
use strategy_bench::logging;

static LOGGING: Once = Once::new();

/// Install logging once per benchmark binary
pub fn init_logging() {
    LOGGING.call_once(logging::init_for_benches);
}

/// Load and validate the benchmark configuration
///
/// Aborts on invalid values; callers load it inside `isolate` so only the
/// affected benchmark is skipped.
pub fn bench_config() -> BenchConfig {
    init_logging();
    setup_or_abort("config", BenchConfig::from_env())
}

/// Open the configured entropy device for `bench`
pub fn open_entropy(bench: &str, config: &BenchConfig) -> EntropySource {
    setup_or_abort(bench, EntropySource::open(&config.entropy_path))
}

/// Open the configured entropy device behind the artificial latency wrapper
pub fn open_slow_entropy(bench: &str, config: &BenchConfig) -> SlowReader<EntropySource> {
    SlowReader::new(open_entropy(bench, config), config.slow_read_delay)
}

/// Predefined key batch sizes for container benchmarks
#[derive(Debug, Clone, Copy)]
pub enum KeyBatchSize {
    /// 100 keys
    Small,
    /// 1,000 keys
    Medium,
    /// 10,000 keys
    Large,
}

impl KeyBatchSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => BenchSizes::SMALL,
            Self::Medium => BenchSizes::MEDIUM,
            Self::Large => BenchSizes::LARGE,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "100",
            Self::Medium => "1K",
            Self::Large => "10K",
        }
    }
}
