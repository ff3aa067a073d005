//! Polled button bank with press-edge latches.
//!
//! ## Hardware
//!
//! Four active-low momentary switches with pull-ups (button connects to
//! GND).  Debouncing is left to the hardware RC network; `poll()` is
//! called once per control tick from the main loop and samples every pin.
//!
//! ## Edge latching
//!
//! | Previous | Now      | Effect                     |
//! |----------|----------|----------------------------|
//! | released | pressed  | latch set                  |
//! | pressed  | pressed  | —                          |
//! | *        | released | — (latch kept until read)  |
//!
//! `consume_edge()` returns the latch and clears it, so a press is
//! reported at most once no matter how long it is held.

use embedded_hal::digital::InputPin;

use crate::app::ports::ButtonId;

pub struct ButtonBank<P> {
    pins: [P; ButtonId::COUNT],
    levels: [bool; ButtonId::COUNT],
    latched: [bool; ButtonId::COUNT],
}

impl<P> ButtonBank<P>
where
    P: InputPin,
{
    /// Wrap four pins, ordered `Btn0..=Btn3`.  Pins must already be
    /// configured as pull-up inputs.
    pub fn new(pins: [P; ButtonId::COUNT]) -> Self {
        Self {
            pins,
            levels: [false; ButtonId::COUNT],
            latched: [false; ButtonId::COUNT],
        }
    }

    /// Sample every pin and latch new presses.  A pin read error counts
    /// as released.
    pub fn poll(&mut self) {
        for (i, pin) in self.pins.iter_mut().enumerate() {
            let pressed = pin.is_low().unwrap_or(false);
            if pressed && !self.levels[i] {
                self.latched[i] = true;
            }
            self.levels[i] = pressed;
        }
    }

    /// Level from the last `poll()`.
    pub fn is_held(&self, id: ButtonId) -> bool {
        self.levels[id.index()]
    }

    /// Report a latched press once, then clear it.
    pub fn consume_edge(&mut self, id: ButtonId) -> bool {
        core::mem::take(&mut self.latched[id.index()])
    }
}
