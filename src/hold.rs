//! Hold detector.
//!
//! Runs **every tick before the FSM** (except while the machine is already
//! in `OnHold`) and counts consecutive ticks on which both buttons of the
//! configured combination are held.  Reaching the threshold produces a
//! single [`HoldEvent::Triggered`]; the counter keeps running past it, so
//! the event cannot fire again until the combination is released.

use log::debug;

/// Outcome of one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldEvent {
    None,
    Triggered,
}

/// Consecutive-tick counter for the hold combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldDetector {
    threshold_ticks: u32,
    combo_duration: u32,
    triggered: bool,
}

impl HoldDetector {
    pub fn new(threshold_ticks: u32) -> Self {
        Self {
            threshold_ticks: threshold_ticks.max(1),
            combo_duration: 0,
            triggered: false,
        }
    }

    /// Feed one tick's worth of button levels.
    pub fn observe(&mut self, btn_a_held: bool, btn_b_held: bool) -> HoldEvent {
        if !(btn_a_held && btn_b_held) {
            if self.combo_duration > 0 {
                debug!("hold: combo released after {} ticks", self.combo_duration);
            }
            self.combo_duration = 0;
            self.triggered = false;
            return HoldEvent::None;
        }

        self.combo_duration = self.combo_duration.saturating_add(1);

        if !self.triggered && self.combo_duration >= self.threshold_ticks {
            self.triggered = true;
            return HoldEvent::Triggered;
        }

        HoldEvent::None
    }

    /// Forget any partial or completed hold.
    pub fn reset(&mut self) {
        self.combo_duration = 0;
        self.triggered = false;
    }

    pub fn combo_duration(&self) -> u32 {
        self.combo_duration
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    pub fn threshold_ticks(&self) -> u32 {
        self.threshold_ticks
    }
}
