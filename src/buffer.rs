// ABOUTME: Bounded-read strategies comparing pre-sized, doubling and appending buffers
// ABOUTME: Includes the scatter/gather parallel chunked read with index-ordered reassembly
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Bounded-Read Strategies
//!
//! Every strategy assembles exactly `read_size` bytes from a reader:
//!
//! - [`read_preallocated`]: one zeroed buffer of the final size, one `read_exact`
//! - [`read_doubling`]: a small buffer replaced by one twice its size, copying
//!   the filled prefix, whenever it runs full
//! - [`read_appending`]: small fixed reads appended to a `Vec` that amortizes
//!   its own growth
//! - [`read_parallel_chunks`]: fixed-size chunks read by concurrent blocking
//!   tasks and reassembled by chunk index
//!
//! A read returning zero bytes before the target is reached is a short read.

use crate::config::BenchConfig;
use crate::constants::reads::APPEND_CHUNK;
use crate::entropy::SharedSource;
use crate::errors::{BenchError, BenchResult};
use std::io::{self, Read};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::trace;

/// Single-reader strategies measured side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStrategy {
    /// Final-size buffer filled by one call
    Preallocated,
    /// Buffer replaced by a doubled copy when full
    Doubling,
    /// Small reads appended to a growing `Vec`
    Appending,
}

impl ReadStrategy {
    /// Every single-reader strategy, in reporting order
    pub const ALL: [Self; 3] = [Self::Preallocated, Self::Doubling, Self::Appending];

    /// Benchmark identifier
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Preallocated => "preallocated",
            Self::Doubling => "doubling",
            Self::Appending => "appending",
        }
    }

    /// Assemble `config.read_size` bytes from `reader` with this strategy
    ///
    /// # Errors
    ///
    /// Propagates the strategy's read failure
    pub fn read<R: Read>(self, reader: &mut R, config: &BenchConfig) -> BenchResult<Vec<u8>> {
        match self {
            Self::Preallocated => read_preallocated(reader, config.read_size),
            Self::Doubling => read_doubling(reader, config.read_size, config.grow_start),
            Self::Appending => read_appending(reader, config.read_size, config.grow_start),
        }
    }
}

/// Read `read_size` bytes into a buffer allocated at its final size
///
/// # Errors
///
/// Returns `ShortRead` if the reader ends early, `IoFailed` on read errors
pub fn read_preallocated<R: Read>(reader: &mut R, read_size: usize) -> BenchResult<Vec<u8>> {
    let mut buf = vec![0_u8; read_size];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

/// Read `read_size` bytes into a buffer that starts at `start_len` and doubles
///
/// Growth copies the filled prefix into a fresh allocation; the last step is
/// capped so the result is never longer than `read_size`.
///
/// # Errors
///
/// Returns `ShortRead` if the reader ends early, `IoFailed` on read errors
pub fn read_doubling<R: Read>(
    reader: &mut R,
    read_size: usize,
    start_len: usize,
) -> BenchResult<Vec<u8>> {
    let mut buf = vec![0_u8; start_len.clamp(1, read_size.max(1))];
    let mut filled = 0;

    while filled < read_size {
        if filled == buf.len() {
            let mut grown = vec![0_u8; (buf.len() * 2).min(read_size)];
            grown[..filled].copy_from_slice(&buf[..filled]);
            buf = grown;
        }
        filled += read_some(reader, &mut buf[filled..], read_size, filled)?;
    }

    buf.truncate(read_size);
    Ok(buf)
}

/// Read `read_size` bytes in small fixed reads appended to a growing `Vec`
///
/// # Errors
///
/// Returns `ShortRead` if the reader ends early, `IoFailed` on read errors
pub fn read_appending<R: Read>(
    reader: &mut R,
    read_size: usize,
    start_capacity: usize,
) -> BenchResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(start_capacity);
    let mut chunk = [0_u8; APPEND_CHUNK];

    while buf.len() < read_size {
        let wanted = (read_size - buf.len()).min(APPEND_CHUNK);
        let n = read_some(reader, &mut chunk[..wanted], read_size, buf.len())?;
        buf.extend_from_slice(&chunk[..n]);
    }

    Ok(buf)
}

/// One `read` call that treats end-of-stream as a short read and retries interrupts
fn read_some<R: Read>(
    reader: &mut R,
    dest: &mut [u8],
    expected: usize,
    filled: usize,
) -> BenchResult<usize> {
    loop {
        match reader.read(dest) {
            Ok(0) => return Err(BenchError::short_read(expected, filled)),
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
}

/// Run `task_count` blocking tasks concurrently and collect `(index, bytes)` pairs
///
/// Pairs come back in completion order. The caller must order them with
/// [`assemble_chunks`] before use.
///
/// # Errors
///
/// Returns `TaskFailed` if a task panics, or the first task error observed
pub async fn scatter<F>(task_count: usize, task: F) -> BenchResult<Vec<(usize, Vec<u8>)>>
where
    F: Fn(usize) -> BenchResult<Vec<u8>> + Send + Sync + 'static,
{
    let task = Arc::new(task);
    let mut tasks = JoinSet::new();
    for index in 0..task_count {
        let task = Arc::clone(&task);
        tasks.spawn_blocking(move || (index, task(index)));
    }

    let mut arrived = Vec::with_capacity(task_count);
    while let Some(joined) = tasks.join_next().await {
        let (index, result) =
            joined.map_err(|e| BenchError::task(format!("chunk task failed: {e}")))?;
        trace!(index, position = arrived.len(), "Chunk arrived");
        arrived.push((index, result?));
    }
    Ok(arrived)
}

/// Place chunks by originating index and concatenate them
///
/// # Errors
///
/// Returns `TaskFailed` if an index is out of range, duplicated or missing
pub fn assemble_chunks(arrived: Vec<(usize, Vec<u8>)>, chunk_count: usize) -> BenchResult<Vec<u8>> {
    let mut slots: Vec<Option<Vec<u8>>> = vec![None; chunk_count];
    for (index, chunk) in arrived {
        let slot = slots
            .get_mut(index)
            .ok_or_else(|| BenchError::task(format!("chunk index {index} out of range")))?;
        if slot.replace(chunk).is_some() {
            return Err(BenchError::task(format!("chunk {index} delivered twice")));
        }
    }

    let total = slots.iter().flatten().map(Vec::len).sum();
    let mut buf = Vec::with_capacity(total);
    for (index, slot) in slots.into_iter().enumerate() {
        let chunk = slot.ok_or_else(|| BenchError::task(format!("chunk {index} missing")))?;
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

/// Read `chunk_count * chunk_size` bytes as concurrent slow chunk reads
///
/// Each task sleeps `delay` outside the source lock, then reads its whole
/// chunk under one lock acquisition, so every chunk is one contiguous region
/// of the source. The returned future completes only after
/// every task has finished.
///
/// # Errors
///
/// Returns the first chunk failure or a reassembly failure
pub async fn read_parallel_chunks<R>(
    source: SharedSource<R>,
    delay: Duration,
    chunk_size: usize,
    chunk_count: usize,
) -> BenchResult<Vec<u8>>
where
    R: Read + Send + 'static,
{
    let arrived = scatter(chunk_count, move |_| {
        thread::sleep(delay);
        source.read_exact_chunk(chunk_size)
    })
    .await?;
    assemble_chunks(arrived, chunk_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use std::io::Cursor;

    /// Reader handing out at most `step` bytes per call
    struct Trickle {
        data: Cursor<Vec<u8>>,
        step: usize,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let len = buf.len().min(self.step);
            self.data.read(&mut buf[..len])
        }
    }

    fn numbered(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn test_doubling_handles_partial_reads() {
        let data = numbered(100);
        let mut reader = Trickle {
            data: Cursor::new(data.clone()),
            step: 3,
        };
        assert_eq!(read_doubling(&mut reader, 100, 10).unwrap(), data);
    }

    #[test]
    fn test_appending_stops_at_target() {
        let data = numbered(64);
        let mut reader = Cursor::new(data.clone());
        let buf = read_appending(&mut reader, 33, 10).unwrap();
        assert_eq!(buf, data[..33]);
    }

    #[test]
    fn test_short_source_is_fatal() {
        for strategy in ReadStrategy::ALL {
            let mut reader = Cursor::new(vec![0_u8; 5]);
            let err = strategy
                .read(&mut reader, &BenchConfig::default())
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::ShortRead, "{}", strategy.name());
            assert!(err.is_fatal());
        }
    }

    #[test]
    fn test_assemble_rejects_duplicates_and_gaps() {
        let dup = vec![(0, vec![1]), (0, vec![2])];
        assert!(assemble_chunks(dup, 2).is_err());

        let gap = vec![(1, vec![1])];
        assert!(assemble_chunks(gap, 2).is_err());

        let out_of_range = vec![(5, vec![1])];
        assert!(assemble_chunks(out_of_range, 2).is_err());
    }
}
