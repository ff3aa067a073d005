//! Bounded transcript of committed code bytes.
//!
//! Backed by a `heapless::Vec`, so the capacity is fixed at compile time
//! and an append at capacity is rejected instead of overflowing.

use heapless::Vec;

use crate::error::{Error, Result};

/// Ordered, bounded sequence of committed bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript<const N: usize> {
    bytes: Vec<u8, N>,
}

impl<const N: usize> Transcript<N> {
    pub const CAPACITY: usize = N;

    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Append one byte.  At capacity the byte is rejected and the stored
    /// content is left untouched.
    pub fn append(&mut self, byte: u8) -> Result<()> {
        self.bytes.push(byte).map_err(|_| Error::CapacityExceeded)
    }

    /// Zero every stored byte, then drop them.
    pub fn clear(&mut self) {
        self.bytes.iter_mut().for_each(|b| *b = 0);
        self.bytes.clear();
    }

    /// Stored bytes, verbatim.  No terminator is implied.
    pub fn as_text(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.bytes.is_full()
    }
}
