// ABOUTME: Membership strategies: nested substring loop versus one compiled alternation regex
// ABOUTME: Both count haystack entries containing any needle, case-sensitively
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Membership and Classification Strategies
//!
//! For a small needle set a plain nested loop is usually cheaper than a
//! compiled alternation; both are kept here so the claim stays measurable.
//! A haystack entry counts once no matter how many needles it contains.

/// Status classification via string comparison versus bitflags
pub mod status;

use crate::errors::{BenchError, BenchResult};
use regex::Regex;

/// Count haystack entries containing at least one needle, by nested iteration
#[must_use]
pub fn count_matches_loop(haystack: &[&str], needles: &[&str]) -> usize {
    haystack
        .iter()
        .filter(|entry| needles.iter().any(|needle| entry.contains(needle)))
        .count()
}

/// Needle set compiled into a single alternation pattern
#[derive(Debug, Clone)]
pub struct NeedlePattern {
    /// `None` when there are no needles; an empty alternation would match everything
    regex: Option<Regex>,
}

impl NeedlePattern {
    /// Compile `needles` (matched literally) into `n1|n2|...`
    ///
    /// # Errors
    ///
    /// Returns `SetupFailed` if the pattern exceeds the regex size limits
    pub fn compile(needles: &[&str]) -> BenchResult<Self> {
        if needles.is_empty() {
            return Ok(Self { regex: None });
        }
        let alternation = needles
            .iter()
            .map(|needle| regex::escape(needle))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&alternation).map_err(|e| {
            BenchError::setup(format!("invalid needle pattern '{alternation}'")).with_source(e)
        })?;
        Ok(Self { regex: Some(regex) })
    }

    /// Whether `entry` contains any needle
    #[must_use]
    pub fn is_match(&self, entry: &str) -> bool {
        self.regex.as_ref().is_some_and(|regex| regex.is_match(entry))
    }

    /// Count haystack entries containing at least one needle
    #[must_use]
    pub fn count_matches(&self, haystack: &[&str]) -> usize {
        haystack.iter().filter(|entry| self.is_match(entry)).count()
    }
}
