// ABOUTME: String-assembly strategies: immutable concatenation versus an append builder
// ABOUTME: Also compares handing accumulated data on as text versus as raw bytes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! String-assembly strategies
//!
//! [`concat_pieces`] and [`build_pieces`] produce byte-identical output; the
//! consumers compare owned text against borrowed bytes.

use crate::errors::{BenchError, BenchResult};
use std::fmt::Write;

/// Assemble the decimal renderings of `0..=last` by repeated concatenation
///
/// Every step allocates a new `String` holding the previous result plus the
/// next piece.
#[must_use]
pub fn concat_pieces(last: usize) -> String {
    let mut assembled = String::new();
    for i in 0..=last {
        assembled = format!("{assembled}{i}");
    }
    assembled
}

/// Assemble the decimal renderings of `0..=last` into one growing `String`
#[must_use]
pub fn build_pieces(last: usize) -> String {
    let mut builder = String::new();
    for i in 0..=last {
        // Writing into a String cannot fail
        let _ = write!(builder, "{i}");
    }
    builder
}

/// Append the decimal renderings of `0..count` into a byte buffer
#[must_use]
pub fn accumulated_digits(count: usize) -> Vec<u8> {
    let mut input = Vec::new();
    for i in 0..count {
        input.extend_from_slice(i.to_string().as_bytes());
    }
    input
}

/// Hand accumulated data on as owned text
///
/// The text-typed path copies and validates the bytes before the consumer
/// sees them.
///
/// # Errors
///
/// Returns `InvalidData` if the bytes are not UTF-8
pub fn consume_as_text(input: &[u8]) -> BenchResult<usize> {
    let text = String::from_utf8(input.to_vec())
        .map_err(|e| BenchError::invalid_data("accumulated input is not UTF-8").with_source(e))?;
    Ok(text_consumer(&text))
}

/// Hand accumulated data on as borrowed raw bytes
#[must_use]
pub fn consume_as_bytes(input: &[u8]) -> usize {
    byte_consumer(input)
}

#[inline(never)]
fn text_consumer(text: &str) -> usize {
    std::hint::black_box(text).len()
}

#[inline(never)]
fn byte_consumer(bytes: &[u8]) -> usize {
    std::hint::black_box(bytes).len()
}
