// ABOUTME: Entropy byte source, artificial-latency wrapper and serialized shared handle
// ABOUTME: Scoped read-only device access used by the bounded-read benchmarks
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Byte sources for the bounded-read family
//!
//! - [`EntropySource`] owns a read-only handle to a byte device and releases
//!   it on drop, including when a benchmark aborts mid-measurement
//! - [`SlowReader`] sleeps before every read to simulate slow I/O
//! - [`SharedSource`] serializes reads from many tasks over one reader

use crate::errors::{BenchError, BenchResult};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Read-only handle to an external byte device
#[derive(Debug)]
pub struct EntropySource {
    path: PathBuf,
    file: File,
}

impl EntropySource {
    /// Open `path` read-only
    ///
    /// # Errors
    ///
    /// Returns `SetupFailed` if the device cannot be opened
    pub fn open(path: impl AsRef<Path>) -> BenchResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            BenchError::setup(format!("failed to open {}", path.display())).with_source(e)
        })?;
        debug!(path = %path.display(), "Opened entropy source");
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }
}

impl Read for EntropySource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Drop for EntropySource {
    fn drop(&mut self) {
        debug!(path = %self.path.display(), "Closed entropy source");
    }
}

/// Decorator that sleeps a fixed delay before each delegated read
#[derive(Debug)]
pub struct SlowReader<R> {
    inner: R,
    delay: Duration,
}

impl<R: Read> SlowReader<R> {
    /// Wrap `inner`, delaying every read by `delay`
    pub const fn new(inner: R, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

impl<R: Read> Read for SlowReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        thread::sleep(self.delay);
        self.inner.read(buf)
    }
}

/// Cloneable handle serializing access to one reader
///
/// Each [`SharedSource::read_exact_chunk`] holds the lock for the whole chunk,
/// so bytes of concurrent chunks never interleave.
#[derive(Debug)]
pub struct SharedSource<R> {
    inner: Arc<Mutex<R>>,
}

impl<R> Clone for SharedSource<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Read> SharedSource<R> {
    /// Share `reader` between tasks
    pub fn new(reader: R) -> Self {
        Self {
            inner: Arc::new(Mutex::new(reader)),
        }
    }

    /// Read exactly `len` bytes under the lock
    ///
    /// # Errors
    ///
    /// Returns `ShortRead` if the source ends early or `IoFailed` on a read error
    pub fn read_exact_chunk(&self, len: usize) -> BenchResult<Vec<u8>> {
        let mut chunk = vec![0_u8; len];
        // A poisoned lock only means another reader panicked; the reader itself is intact
        let mut reader = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        reader.read_exact(&mut chunk)?;
        Ok(chunk)
    }
}
