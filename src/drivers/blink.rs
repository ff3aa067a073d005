//! Tick-driven square-wave blink timer.
//!
//! The main loop advances the timer by the elapsed milliseconds each
//! control cycle; the timer reports the level the blinking LED should
//! show.  Half-period = 500 / rate_hz ms, so 1 Hz toggles every 500 ms
//! and 16 Hz every 31 ms.

use crate::app::ports::BlinkRate;

pub struct BlinkTimer {
    rate: BlinkRate,
    phase_ms: u32,
    lit: bool,
}

impl BlinkTimer {
    pub fn new() -> Self {
        Self {
            rate: BlinkRate::Off,
            phase_ms: 0,
            lit: false,
        }
    }

    /// Switch rate.  Restarts the wave lit so the change is visible at once.
    pub fn set_rate(&mut self, rate: BlinkRate) {
        self.rate = rate;
        self.phase_ms = 0;
        self.lit = rate.hz().is_some();
    }

    pub fn rate(&self) -> BlinkRate {
        self.rate
    }

    /// Advance by `delta_ms`.  Returns `Some(level)` while blinking,
    /// `None` when the timer is off and the LED belongs to someone else.
    pub fn advance(&mut self, delta_ms: u32) -> Option<bool> {
        let half_period = Self::half_period_ms(self.rate)?;

        self.phase_ms = self.phase_ms.saturating_add(delta_ms);
        while self.phase_ms >= half_period {
            self.phase_ms -= half_period;
            self.lit = !self.lit;
        }
        Some(self.lit)
    }

    fn half_period_ms(rate: BlinkRate) -> Option<u32> {
        rate.hz().map(|hz| (500 / hz).max(1))
    }
}

impl Default for BlinkTimer {
    fn default() -> Self {
        Self::new()
    }
}
