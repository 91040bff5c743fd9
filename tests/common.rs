// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides quiet logging and a deterministic on-disk entropy source
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `strategy_bench`

use anyhow::Result;
use std::io::Write;
use std::sync::Once;
use strategy_bench::config::BenchConfig;
use tempfile::NamedTempFile;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Bytes with no run of equal neighbours, so misplaced chunks are detectable
pub fn patterned_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 % 251) as u8).collect()
}

/// Write `len` patterned bytes to a temporary file standing in for the entropy device
pub fn entropy_file(len: usize) -> Result<(NamedTempFile, Vec<u8>)> {
    init_test_logging();
    let data = patterned_bytes(len);
    let mut file = NamedTempFile::new()?;
    file.write_all(&data)?;
    file.flush()?;
    Ok((file, data))
}

/// Default configuration reading from `file` without artificial latency
pub fn config_for(file: &NamedTempFile) -> BenchConfig {
    BenchConfig {
        entropy_path: file.path().to_path_buf(),
        slow_read_delay: std::time::Duration::ZERO,
        ..BenchConfig::default()
    }
}
