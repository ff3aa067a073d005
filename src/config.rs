//! Controller configuration parameters
//!
//! All timing in the controller is tick-counted, never wall-clock.  The
//! values here are expressed in milliseconds and converted to tick counts
//! using the period at which the outer loop calls `tick()`, so a slower
//! loop keeps the same gesture timing as long as the period is set here.

use serde::{Deserialize, Serialize};

use crate::app::ports::ButtonId;
use crate::error::{Error, Result};

/// Maximum number of committed code bytes held in the transcript.
pub const TRANSCRIPT_CAPACITY: usize = 100;

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    // --- Timing ---
    /// Period of the driving loop (milliseconds per tick)
    pub tick_period_ms: u32,

    // --- Hold gesture ---
    /// How long the hold combination must be held to interrupt (milliseconds)
    pub hold_duration_ms: u32,
    /// The two buttons that form the hold combination
    pub hold_combo: [ButtonId; 2],

    // --- Breathing animation ---
    /// Pause after entering OnHold before the animation starts (milliseconds)
    pub breath_warmup_ms: u32,
    /// Time per ±1 duty-cycle step (milliseconds)
    pub breath_step_ms: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 1, // 1 kHz

            hold_duration_ms: 3000,
            hold_combo: [ButtonId::Btn0, ButtonId::Btn1],

            breath_warmup_ms: 1000,
            breath_step_ms: 15,
        }
    }
}

impl ControllerConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the tick arithmetic cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.tick_period_ms == 0 {
            return Err(Error::Config("tick_period_ms must be non-zero"));
        }
        if self.hold_duration_ms < self.tick_period_ms {
            return Err(Error::Config("hold_duration_ms shorter than one tick"));
        }
        if self.breath_step_ms < self.tick_period_ms {
            return Err(Error::Config("breath_step_ms shorter than one tick"));
        }
        if self.hold_combo[0] == self.hold_combo[1] {
            return Err(Error::Config("hold_combo must name two distinct buttons"));
        }
        Ok(())
    }

    /// Consecutive ticks the combination must be held to trigger.
    pub fn hold_threshold_ticks(&self) -> u32 {
        self.ms_to_ticks(self.hold_duration_ms)
    }

    /// Ticks of pure delay on OnHold entry.
    pub fn breath_warmup_ticks(&self) -> u16 {
        self.ms_to_ticks(self.breath_warmup_ms).min(u32::from(u16::MAX)) as u16
    }

    /// Ticks per animation step.
    pub fn breath_step_ticks(&self) -> u16 {
        self.ms_to_ticks(self.breath_step_ms).min(u32::from(u16::MAX)) as u16
    }

    fn ms_to_ticks(&self, ms: u32) -> u32 {
        (ms / self.tick_period_ms.max(1)).max(1)
    }
}
