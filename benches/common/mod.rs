// ABOUTME: Common benchmark utilities and fixtures shared by every Criterion target
// ABOUTME: Provides configuration loading, scoped data sources and fixture sizes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Common benchmark utilities and fixtures.
//!
//! Each benchmark imports only what it needs.

#![allow(dead_code)]

pub mod fixtures;
