// ABOUTME: Gauge registration strategies: get-or-register per update versus pre-registered handles
// ABOUTME: The registry is an explicit handle built once per run, never a process default
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Gauge registration strategies over an explicit [`Registry`] handle

use crate::errors::{BenchError, BenchResult};
use gauge_registry::{Gauge, Registry};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Look the gauge up by name (registering it on first use), then update it
pub fn update_via_registry(registry: &Registry, name: &str, value: i64) {
    registry.get_or_register_gauge(name).update(value);
}

/// Gauges registered ahead of measurement and updated through held handles
#[derive(Debug, Clone, Default)]
pub struct PreRegistered {
    gauges: HashMap<String, Arc<Gauge>>,
}

impl PreRegistered {
    /// Register one gauge per name in `registry`, keeping the handles
    ///
    /// # Errors
    ///
    /// Returns `SetupFailed` if a name is already registered
    pub fn register_all<I>(registry: &Registry, names: I) -> BenchResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut gauges = HashMap::new();
        for name in names {
            let gauge = Arc::new(Gauge::new());
            registry
                .register(&name, Arc::clone(&gauge))
                .map_err(|e| BenchError::setup(e.to_string()).with_source(e))?;
            gauges.insert(name, gauge);
        }
        debug!(gauges = gauges.len(), "Pre-registered gauges");
        Ok(Self { gauges })
    }

    /// Update a pre-registered gauge
    ///
    /// # Errors
    ///
    /// Returns `MissingEntry` if `name` was never registered
    pub fn update(&self, name: &str, value: i64) -> BenchResult<()> {
        let gauge = self
            .gauges
            .get(name)
            .ok_or_else(|| BenchError::missing(format!("gauge '{name}' was not pre-registered")))?;
        gauge.update(value);
        Ok(())
    }

    /// Number of held handles
    #[must_use]
    pub fn len(&self) -> usize {
        self.gauges.len()
    }

    /// Whether no handles are held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gauges.is_empty()
    }
}
