// ABOUTME: Library entry point for the comparative micro-benchmark battery
// ABOUTME: Candidate operations, fixtures and the measurement harness used by benches/
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Strategy Bench
//!
//! Micro-benchmarks comparing low-level implementation choices. Each family
//! measures one logical outcome reached through different strategies, on
//! identical fixtures:
//!
//! - **Bounded reads**: pre-sized, doubling, appending and parallel chunked
//!   buffers, with and without artificial read latency
//! - **Associative containers**: capacity hints, initialization sizes, clearing
//!   for reuse and composite versus joined keys
//! - **String assembly**: immutable concatenation versus a builder, text versus
//!   raw bytes
//! - **Membership**: substring loops versus a compiled alternation, string
//!   statuses versus bitflags
//! - **Gauge registration** and **teardown error aggregation**
//!
//! The candidate operations live here as plain functions so `tests/` can check
//! that every strategy of a family produces the same result. The Criterion
//! targets in `benches/` put them inside measurement windows through
//! [`harness`].
//!
//! ## Example Usage
//!
//! ```rust
//! use strategy_bench::matching::{count_matches_loop, NeedlePattern};
//! use strategy_bench::constants::matching::{HAYSTACK, NEEDLES};
//!
//! let pattern = NeedlePattern::compile(&NEEDLES).unwrap();
//! assert_eq!(count_matches_loop(&HAYSTACK, &NEEDLES), pattern.count_matches(&HAYSTACK));
//! ```

/// Bounded-read strategies and the parallel chunked read
pub mod buffer;

/// Environment-only fixture configuration
pub mod config;

/// Fixture sizes, vocabularies and environment keys
pub mod constants;

/// Entropy source, slow-read decorator and shared serialized handle
pub mod entropy;

/// Unified error type with fatal and non-fatal codes
pub mod errors;

/// Measurement windows, hard-failure handling and benchmark isolation
pub mod harness;

/// Structured logging setup
pub mod logging;

/// Associative-container sizing strategies and lookup fixture
pub mod maps;

/// Substring membership and status classification strategies
pub mod matching;

/// Gauge registration strategies
pub mod registry;

/// String-assembly strategies
pub mod strings;

/// Teardown error aggregation strategies
pub mod teardown;
