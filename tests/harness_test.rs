// ABOUTME: Integration tests for the measurement harness failure policy
// ABOUTME: Fatal errors stop the window, fixture misses only warn, aborts stay isolated
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use std::io;
use strategy_bench::buffer::ReadStrategy;
use strategy_bench::entropy::EntropySource;
use strategy_bench::errors::{BenchError, ErrorCode};
use strategy_bench::harness::{
    abort, isolate, measure, measure_with_setup, report_misses, setup_or_abort,
};

#[test]
fn test_short_read_aborts_window_at_failing_iteration() -> Result<()> {
    let (file, _) = common::entropy_file(3000)?;
    let config = common::config_for(&file);

    let mut completed = 0;
    let err = measure_with_setup(
        10,
        || EntropySource::open(&config.entropy_path),
        |source, _| {
            ReadStrategy::Preallocated.read(source, &config)?;
            completed += 1;
            Ok(())
        },
    )
    .unwrap_err();

    // 3000 bytes hold two full 1024-byte reads
    assert_eq!(completed, 2);
    assert_eq!(err.code, ErrorCode::ShortRead);
    assert_eq!(err.iteration, Some(2));
    assert!(err.to_string().contains("iteration 2"));
    Ok(())
}

#[test]
fn test_missing_device_fails_before_window() {
    common::init_test_logging();
    let mut calls = 0;
    let err = measure_with_setup(
        5,
        || EntropySource::open("/nonexistent/entropy"),
        |_, _| {
            calls += 1;
            Ok(())
        },
    )
    .unwrap_err();
    assert_eq!(calls, 0);
    assert_eq!(err.code, ErrorCode::SetupFailed);
}

#[test]
fn test_inconsistent_fixture_never_aborts() -> Result<()> {
    common::init_test_logging();
    let mut calls = 0;
    measure(20, |i| {
        calls += 1;
        if i % 2 == 0 {
            return Err(BenchError::inconsistent("random key missed"));
        }
        Ok(())
    })?;
    assert_eq!(calls, 20);
    report_misses("harness_test", 10, 20);
    Ok(())
}

#[test]
fn test_abort_is_contained_and_run_continues() {
    common::init_test_logging();
    let mut ran = Vec::new();
    for bench in ["first", "failing", "last"] {
        let outcome = isolate(bench, || {
            if bench == "failing" {
                let err = BenchError::from(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
                abort(bench, &err);
            }
            bench
        });
        if let Some(name) = outcome {
            ran.push(name);
        }
    }
    assert_eq!(ran, vec!["first", "last"]);
}

#[test]
fn test_setup_or_abort_passes_values_through() {
    assert_eq!(setup_or_abort("ok", Ok::<_, BenchError>(3)), 3);
    assert!(isolate("bad", || setup_or_abort("bad", Err::<u8, _>(BenchError::setup("x")))).is_none());
}
