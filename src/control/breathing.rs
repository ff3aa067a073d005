//! Breathing animator
//!
//! Triangle-wave duty cycle for the `OnHold` state.  After a fixed warm-up
//! the duty cycle walks between 0 and 100 one percent per step, turning
//! around at each bound.  Any button held while the wave is running aborts
//! the animation.
//!
//! ```text
//!  phase_counter: warmup+step ──(count down)──▶ step ──▶ 0 ─┐
//!                                                ▲          │ duty ± 1
//!                                                └──────────┘
//! ```

/// Upper bound of the duty cycle (percent).
pub const DUTY_MAX: u8 = 100;

/// What the animator did on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathStep {
    /// Still in the warm-up delay; duty unchanged.
    WarmingUp,
    /// Oscillating (the duty may or may not have moved this tick).
    Running,
    /// A button was held during oscillation; duty reset to 0.
    Aborted,
}

/// Breathing animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingAnimator {
    duty_cycle: u8,
    /// -1 falling, 1 rising, 0 not yet started.
    direction: i8,
    phase_counter: u16,
    warmup_ticks: u16,
    step_ticks: u16,
}

impl BreathingAnimator {
    pub fn new(warmup_ticks: u16, step_ticks: u16) -> Self {
        Self {
            duty_cycle: 0,
            direction: 0,
            phase_counter: 0,
            warmup_ticks,
            step_ticks: step_ticks.max(1),
        }
    }

    /// Arm the warm-up delay.  The duty cycle carries over from the last run.
    pub fn begin(&mut self) {
        self.direction = 0;
        self.phase_counter = self.warmup_ticks.saturating_add(self.step_ticks);
    }

    /// Advance one tick.  `any_button_held` is only consulted once the
    /// warm-up has elapsed.
    pub fn tick(&mut self, any_button_held: bool) -> BreathStep {
        if self.phase_counter > self.step_ticks {
            self.phase_counter -= 1;
            return BreathStep::WarmingUp;
        }

        if any_button_held {
            self.duty_cycle = 0;
            self.phase_counter = 0;
            self.direction = 0;
            return BreathStep::Aborted;
        }

        self.phase_counter = self.phase_counter.saturating_sub(1);
        if self.phase_counter == 0 {
            self.step();
            self.phase_counter = self.step_ticks;
        }
        BreathStep::Running
    }

    pub fn duty_cycle(&self) -> u8 {
        self.duty_cycle
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn phase_counter(&self) -> u16 {
        self.phase_counter
    }

    /// True once the warm-up is over.
    pub fn is_oscillating(&self) -> bool {
        self.phase_counter <= self.step_ticks
    }

    fn step(&mut self) {
        if self.direction == 0 {
            self.direction = if self.duty_cycle >= DUTY_MAX { -1 } else { 1 };
        }

        let mut next = i16::from(self.duty_cycle) + i16::from(self.direction);
        if !(0..=i16::from(DUTY_MAX)).contains(&next) {
            self.direction = -self.direction;
            next = i16::from(self.duty_cycle) + i16::from(self.direction);
        }
        self.duty_cycle = next as u8;
    }
}
