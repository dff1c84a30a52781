//! Readers with awkward but legal `io::Read` behaviour

use std::io::{self, Read};

/// Reader that returns at most `max_read` bytes per call
///
/// With `interrupt_every` set, every n-th call fails with
/// `ErrorKind::Interrupted` before any data is copied.
#[derive(Debug, Clone)]
pub struct ChunkedReader {
    data: Vec<u8>,
    position: usize,
    max_read: usize,
    interrupt_every: Option<usize>,
    calls: usize,
}

impl ChunkedReader {
    pub fn new(data: impl Into<Vec<u8>>, max_read: usize) -> Self {
        Self {
            data: data.into(),
            position: 0,
            max_read: max_read.max(1),
            interrupt_every: None,
            calls: 0,
        }
    }

    /// Fail every `n`-th read with `Interrupted`
    pub fn with_interruptions(mut self, n: usize) -> Self {
        self.interrupt_every = Some(n.max(1));
        self
    }

    /// Number of `read` calls so far, interrupted ones included
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.calls += 1;
        if let Some(n) = self.interrupt_every
            && self.calls % n == 0
        {
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }

        let remaining = &self.data[self.position..];
        let len = remaining.len().min(buf.len()).min(self.max_read);
        buf[..len].copy_from_slice(&remaining[..len]);
        self.position += len;
        Ok(len)
    }
}

/// Reader that yields `data` and then fails with `kind`
#[derive(Debug, Clone)]
pub struct FailingReader {
    data: Vec<u8>,
    position: usize,
    kind: io::ErrorKind,
}

impl FailingReader {
    pub fn new(data: impl Into<Vec<u8>>, kind: io::ErrorKind) -> Self {
        Self {
            data: data.into(),
            position: 0,
            kind,
        }
    }

    /// Reader that fails on the first call
    pub fn immediately(kind: io::ErrorKind) -> Self {
        Self::new(Vec::new(), kind)
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = &self.data[self.position..];
        if remaining.is_empty() {
            return Err(io::Error::new(self.kind, "mock read failure"));
        }
        let len = remaining.len().min(buf.len());
        buf[..len].copy_from_slice(&remaining[..len]);
        self.position += len;
        Ok(len)
    }
}
