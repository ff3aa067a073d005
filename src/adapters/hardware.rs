//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`ButtonBank`] and [`IndicatorLeds`] drivers, exposing them
//! through [`ButtonPort`] and [`LedPort`].  This is the only module in the
//! system that touches pins.  Drivers are generic over `embedded-hal`
//! traits, so host tests plug in fake pins.

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::pwm::SetDutyCycle;

use crate::app::ports::{BlinkRate, ButtonId, ButtonPort, LedId, LedPort};
use crate::drivers::button::ButtonBank;
use crate::drivers::indicator::IndicatorLeds;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<I, O, D> {
    buttons: ButtonBank<I>,
    leds: IndicatorLeds<O, D>,
}

impl<I, O, D> HardwareAdapter<I, O, D>
where
    I: InputPin,
    O: OutputPin,
    D: SetDutyCycle,
{
    pub fn new(buttons: ButtonBank<I>, leds: IndicatorLeds<O, D>) -> Self {
        Self { buttons, leds }
    }

    /// Sample the buttons.  Call once per control cycle, before `tick()`.
    pub fn poll(&mut self) {
        self.buttons.poll();
    }

    /// Advance LED blinking.  Call once per control cycle, after `tick()`.
    pub fn refresh(&mut self, delta_ms: u32) {
        self.leds.refresh(delta_ms);
    }

    pub fn leds(&self) -> &IndicatorLeds<O, D> {
        &self.leds
    }
}

// ── ButtonPort implementation ─────────────────────────────────

impl<I, O, D> ButtonPort for HardwareAdapter<I, O, D>
where
    I: InputPin,
    O: OutputPin,
    D: SetDutyCycle,
{
    fn is_held(&mut self, id: ButtonId) -> bool {
        self.buttons.is_held(id)
    }

    fn consume_edge(&mut self, id: ButtonId) -> bool {
        self.buttons.consume_edge(id)
    }
}

// ── LedPort implementation ────────────────────────────────────

impl<I, O, D> LedPort for HardwareAdapter<I, O, D>
where
    I: InputPin,
    O: OutputPin,
    D: SetDutyCycle,
{
    fn set(&mut self, id: LedId, on: bool) {
        self.leds.set(id, on);
    }

    fn set_duty_cycle(&mut self, id: LedId, percent: u8) {
        self.leds.set_duty_cycle(id, percent);
    }

    fn blink(&mut self, id: LedId, rate: BlinkRate) {
        self.leds.blink(id, rate);
    }
}
