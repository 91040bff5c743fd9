// ABOUTME: Integration tests for the gauge registry collaborator
// ABOUTME: Covers both registration strategies and concurrent get-or-register
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use gauge_registry::{Gauge, Registry};
use std::sync::Arc;
use std::thread;

#[test]
fn test_pre_registered_and_looked_up_gauges_agree() {
    let registry = Registry::new();
    let pre: Vec<Arc<Gauge>> = (0..10)
        .map(|i| {
            let gauge = Arc::new(Gauge::new());
            registry.register(&i.to_string(), Arc::clone(&gauge)).unwrap();
            gauge
        })
        .collect();

    for (i, gauge) in pre.iter().enumerate() {
        gauge.update(i as i64);
    }

    for i in 0..10_i64 {
        assert_eq!(registry.get_or_register_gauge(&i.to_string()).value(), i);
    }
    assert_eq!(registry.len(), 10);
}

#[test]
fn test_concurrent_get_or_register_creates_one_gauge_per_name() {
    let registry = Registry::new();
    thread::scope(|scope| {
        for worker in 0..4 {
            let registry = registry.clone();
            scope.spawn(move || {
                for i in 0..100 {
                    registry.get_or_register_gauge(&i.to_string()).update(worker);
                }
            });
        }
    });
    assert_eq!(registry.len(), 100);
}
