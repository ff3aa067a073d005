//! Code encoder — turns eight single-bit button presses into one byte.
//!
//! Bits arrive most-significant first.  `bits_remaining` counts down from
//! 7 to -1; at -1 the code is complete and further bits are ignored until
//! the accumulator is reset or committed.

use crate::error::{Error, Result};
use crate::transcript::Transcript;

/// Bit position of the first (most significant) bit.
const FIRST_BIT: i8 = 7;
/// `bits_remaining` value once all eight bits are in.
const COMPLETE: i8 = -1;

/// Result of feeding one bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptOutcome {
    /// Bit stored, more bits needed.
    Accepted,
    /// Bit stored and it was the eighth; fires exactly once per code.
    Completed(u8),
    /// Code was already complete, bit discarded.
    Ignored,
}

/// In-progress 8-bit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeAccumulator {
    value: u8,
    bits_remaining: i8,
}

impl Default for CodeAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeAccumulator {
    pub fn new() -> Self {
        Self {
            value: 0,
            bits_remaining: FIRST_BIT,
        }
    }

    /// Feed one bit; any non-zero `bit` counts as 1.
    pub fn accept_bit(&mut self, bit: u8) -> AcceptOutcome {
        if self.bits_remaining < 0 {
            return AcceptOutcome::Ignored;
        }

        if bit != 0 {
            self.value |= 1 << self.bits_remaining;
        }
        self.bits_remaining -= 1;

        if self.bits_remaining == COMPLETE {
            AcceptOutcome::Completed(self.value)
        } else {
            AcceptOutcome::Accepted
        }
    }

    /// Abort any partial code.
    pub fn reset_code(&mut self) {
        self.value = 0;
        self.bits_remaining = FIRST_BIT;
    }

    /// Append the completed code to `transcript` and start a new one.
    ///
    /// An incomplete code is left untouched.  When the transcript is full
    /// the byte is dropped but the accumulator still resets, so the caller
    /// gets `CapacityExceeded` and a fresh code either way.
    pub fn commit<const N: usize>(&mut self, transcript: &mut Transcript<N>) -> Result<u8> {
        if !self.is_complete() {
            return Err(Error::CodeIncomplete);
        }
        let byte = self.value;
        let appended = transcript.append(byte);
        self.reset_code();
        appended.map(|()| byte)
    }

    pub fn is_complete(&self) -> bool {
        self.bits_remaining == COMPLETE
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn bits_remaining(&self) -> i8 {
        self.bits_remaining
    }
}
