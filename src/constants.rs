// ABOUTME: Fixed sizes, fixture vocabularies and environment keys for the benchmark battery
// ABOUTME: Keeps every comparative family on identical, deterministic fixture shapes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Constants Module
//!
//! Fixture shapes shared by the library, the benchmark targets and the tests.
//! Sizes that make sense to tune live in [`crate::config`] with these values as
//! defaults.

/// Bounded-read defaults
pub mod reads {
    /// Bytes assembled per iteration by every read strategy
    pub const READ_SIZE: usize = 1024;
    /// Initial length of the doubling and appending buffers
    pub const GROW_START: usize = 10;
    /// Bytes requested per call by the appending strategy
    pub const APPEND_CHUNK: usize = 10;
    /// Bytes per task in the parallel chunked read
    pub const PARALLEL_CHUNK: usize = 64;
    /// Artificial delay injected before every slow read, in milliseconds
    pub const SLOW_READ_DELAY_MS: u64 = 1;
    /// Default entropy device
    pub const ENTROPY_PATH: &str = "/dev/urandom";
}

/// Associative-container fixtures
pub mod maps {
    /// Entries pre-filled into the map that keeps growing across iterations
    pub const PREFILL_ENTRIES: usize = 100;
    /// Capacity hints measured by the initialization benchmark
    pub const CAPACITY_HINTS: [usize; 6] = [10, 100, 1_000, 10_000, 100_000, 1_000_000];
    /// Entries in each lookup map
    pub const LOOKUP_ENTRIES: usize = 50;
    /// Exclusive upper bound of the random lookup components
    pub const LOOKUP_KEY_RANGE: usize = 50;
    /// Value stored under every lookup key
    pub const LOOKUP_VALUE: &str = "ddd";
    /// Separator joining the two lookup components into one string key
    pub const KEY_SEPARATOR: char = '_';
    /// Entries cleared and re-inserted by the reuse benchmark
    pub const REUSE_ENTRIES: usize = 1_000;
}

/// String-assembly fixtures
pub mod strings {
    /// Highest piece index; pieces are `0..=STRING_PIECES`
    pub const STRING_PIECES: usize = 4;
    /// Decimal renderings accumulated into the text-vs-bytes fixture
    pub const ACCUMULATED_NUMBERS: usize = 1_000_000;
}

/// Membership fixtures
pub mod matching {
    /// Strings searched by both membership strategies
    pub const HAYSTACK: [&str; 9] = ["abc", "def", "ghi", "jkl", "mno", "pqr", "stu", "vwx", "yz"];
    /// Substrings looked for in every haystack entry
    pub const NEEDLES: [&str; 3] = ["a", "d", "g"];
    /// Haystack entries containing at least one needle
    pub const EXPECTED_MATCHES: usize = 3;
}

/// Error-aggregation fixtures
pub mod teardown {
    /// Probability that a single teardown step fails
    pub const STEP_FAILURE_RATE: f64 = 0.5;
    /// Seed for the teardown failure sequence
    pub const FAILURE_SEED: u64 = 0x5eed;
}

/// Seeds for randomized fixtures
pub mod seeds {
    /// Seed for the lookup key sequence
    pub const LOOKUP_SEED: u64 = 42;
}

/// Environment variable names read by [`crate::config::BenchConfig::from_env`]
pub mod env_keys {
    /// Path of the entropy device
    pub const ENTROPY_PATH: &str = "STRATEGY_BENCH_ENTROPY_PATH";
    /// Bytes per bounded read
    pub const READ_SIZE: &str = "STRATEGY_BENCH_READ_SIZE";
    /// Bytes per parallel chunk
    pub const CHUNK_SIZE: &str = "STRATEGY_BENCH_CHUNK_SIZE";
    /// Initial size of the growing buffers
    pub const GROW_START: &str = "STRATEGY_BENCH_GROW_START";
    /// Slow reader delay in milliseconds
    pub const SLOW_READ_DELAY_MS: &str = "STRATEGY_BENCH_SLOW_READ_DELAY_MS";
    /// Highest string piece index
    pub const STRING_PIECES: &str = "STRATEGY_BENCH_STRING_PIECES";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported in the logging startup summary
    pub const STRATEGY_BENCH: &str = "strategy-bench";
}
