// ABOUTME: Configuration module for benchmark fixture sizes and data sources
// ABOUTME: Environment-only configuration with validated defaults
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration for the benchmark battery
//!
//! Configuration is read from environment variables only; there are no
//! configuration files and no command-line flags beyond Criterion's own.

/// Environment-driven fixture configuration
pub mod environment;

pub use environment::BenchConfig;
