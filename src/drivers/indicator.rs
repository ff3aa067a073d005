//! Indicator LED driver.
//!
//! LED0–LED2 are plain GPIO outputs; LED3 sits on a PWM channel so it can
//! be dimmed by the breathing animation and square-waved by the blink
//! timer.
//!
//! ```text
//!  LED0 ── GPIO   (btn0 mirror)
//!  LED1 ── GPIO   (btn1 mirror)
//!  LED2 ── GPIO   (code complete)
//!  LED3 ── LEDC   (blink signature / breathing)
//! ```

use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::pwm::SetDutyCycle;
use log::{debug, warn};

use crate::app::ports::{BlinkRate, LedId};
use crate::drivers::blink::BlinkTimer;

/// Binary LEDs light when asked for at least this duty (percent).
const BINARY_ON_THRESHOLD: u8 = 50;

const BINARY_COUNT: usize = 3;

pub struct IndicatorLeds<O, D> {
    binary: [O; BINARY_COUNT],
    dimmable: D,
    blink: BlinkTimer,
    levels: [bool; BINARY_COUNT],
    duty: u8,
}

impl<O, D> IndicatorLeds<O, D>
where
    O: OutputPin,
    D: SetDutyCycle,
{
    /// `binary` is ordered `Led0..=Led2`; `dimmable` drives `Led3`.
    pub fn new(binary: [O; BINARY_COUNT], dimmable: D) -> Self {
        let mut leds = Self {
            binary,
            dimmable,
            blink: BlinkTimer::new(),
            levels: [false; BINARY_COUNT],
            duty: 0,
        };
        for id in [LedId::Led0, LedId::Led1, LedId::Led2] {
            leds.set(id, false);
        }
        leds.drive_dimmable(0);
        leds
    }

    pub fn set(&mut self, id: LedId, on: bool) {
        match id {
            LedId::Led3 => self.drive_dimmable(if on { 100 } else { 0 }),
            _ => {
                let i = id.index();
                if self.binary[i].set_state(PinState::from(on)).is_err() {
                    warn!("LED{} write failed", i);
                }
                self.levels[i] = on;
            }
        }
    }

    /// Binary LEDs approximate the duty cycle as on/off.
    pub fn set_duty_cycle(&mut self, id: LedId, percent: u8) {
        match id {
            LedId::Led3 => self.drive_dimmable(percent.min(100)),
            _ => self.set(id, percent >= BINARY_ON_THRESHOLD),
        }
    }

    pub fn blink(&mut self, id: LedId, rate: BlinkRate) {
        if id != LedId::Led3 {
            debug!("{:?} cannot blink, ignoring {:?}", id, rate);
            return;
        }
        self.blink.set_rate(rate);
        if let Some(lit) = self.blink.advance(0) {
            self.drive_dimmable(if lit { 100 } else { 0 });
        }
    }

    /// Advance the blink timer.  Call once per control cycle.
    pub fn refresh(&mut self, delta_ms: u32) {
        if let Some(lit) = self.blink.advance(delta_ms) {
            let percent = if lit { 100 } else { 0 };
            if percent != self.duty {
                self.drive_dimmable(percent);
            }
        }
    }

    pub fn is_on(&self, id: LedId) -> bool {
        match id {
            LedId::Led3 => self.duty > 0,
            _ => self.levels[id.index()],
        }
    }

    pub fn duty(&self) -> u8 {
        self.duty
    }

    pub fn blink_rate(&self) -> BlinkRate {
        self.blink.rate()
    }

    fn drive_dimmable(&mut self, percent: u8) {
        if self.dimmable.set_duty_cycle_percent(percent).is_err() {
            warn!("LED3 duty write failed");
        }
        self.duty = percent;
    }
}
