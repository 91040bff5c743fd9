// ABOUTME: Concurrent gauge registry with get-or-register and explicit registration
// ABOUTME: Handles are passed explicitly; there is no process-wide default registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Gauge Registry
//!
//! A small metrics collaborator offering the two registration strategies the
//! benchmarks compare:
//!
//! - **get-or-register by name**: every update looks the gauge up (and creates
//!   it on first use) through [`Registry::get_or_register_gauge`]
//! - **pre-register then update**: callers hold an `Arc<Gauge>` obtained once
//!   and call [`Gauge::update`] directly
//!
//! ```rust
//! use gauge_registry::Registry;
//!
//! let registry = Registry::new();
//! registry.get_or_register_gauge("queue_depth").update(7);
//! assert_eq!(registry.get("queue_depth").map(|g| g.value()), Some(7));
//! ```

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors returned by explicit registration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A metric with this name is already registered
    #[error("metric '{name}' is already registered")]
    DuplicateMetric {
        /// Name that collided
        name: String,
    },
}

/// Last-value gauge holding a signed 64-bit reading
#[derive(Debug, Default)]
pub struct Gauge {
    value: AtomicI64,
}

impl Gauge {
    /// Create a gauge reading zero
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: AtomicI64::new(0),
        }
    }

    /// Replace the current reading
    pub fn update(&self, value: i64) {
        self.value.store(value, Ordering::Relaxed);
    }

    /// Current reading
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }
}

/// Name-indexed gauge registry
///
/// Cloning is cheap and yields a handle to the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    gauges: Arc<DashMap<String, Arc<Gauge>>>,
}

impl Registry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look a gauge up by name, registering a fresh one on first use
    #[must_use]
    pub fn get_or_register_gauge(&self, name: &str) -> Arc<Gauge> {
        // Fast path avoids allocating the owned key on hits
        if let Some(existing) = self.gauges.get(name) {
            return Arc::clone(existing.value());
        }
        let gauge = self
            .gauges
            .entry(name.to_owned())
            .or_insert_with(|| Arc::new(Gauge::new()));
        Arc::clone(gauge.value())
    }

    /// Register an existing gauge under `name`
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateMetric`] if the name is taken
    pub fn register(&self, name: &str, gauge: Arc<Gauge>) -> Result<(), RegistryError> {
        match self.gauges.entry(name.to_owned()) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateMetric {
                name: name.to_owned(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(gauge);
                Ok(())
            }
        }
    }

    /// Fetch a registered gauge without creating it
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Gauge>> {
        self.gauges.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Remove every registered gauge
    pub fn clear(&self) {
        debug!(gauges = self.gauges.len(), "Clearing gauge registry");
        self.gauges.clear();
    }

    /// Number of registered gauges
    #[must_use]
    pub fn len(&self) -> usize {
        self.gauges.len()
    }

    /// Whether the registry holds no gauges
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gauges.is_empty()
    }
}
