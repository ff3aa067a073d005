//! Mock hardware for integration tests.
//!
//! `MockPad` scripts button levels and press edges and records every LED
//! call so tests can assert on the full output history without touching
//! real GPIO/PWM registers.  `Rig` bundles it with an `AppService`, a
//! capturing text sink and an event log.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use codepad::adapters::console::ConsoleSink;
use codepad::app::events::AppEvent;
use codepad::app::ports::{BlinkRate, ButtonId, ButtonPort, EventSink, LedId, LedPort};
use codepad::app::service::AppService;
use codepad::config::ControllerConfig;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use embedded_hal::pwm::{ErrorType as PwmErrorType, SetDutyCycle};

// ── LED call record ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LedCall {
    Set(LedId, bool),
    Duty(LedId, u8),
    Blink(LedId, BlinkRate),
}

// ── MockPad ───────────────────────────────────────────────────

#[derive(Default)]
pub struct MockPad {
    held: [bool; ButtonId::COUNT],
    edges: [bool; ButtonId::COUNT],
    pub calls: Vec<LedCall>,
}

#[allow(dead_code)]
impl MockPad {
    /// Button goes down: level high and one press edge latched.
    pub fn press(&mut self, id: ButtonId) {
        if !self.held[id.index()] {
            self.edges[id.index()] = true;
        }
        self.held[id.index()] = true;
    }

    pub fn release(&mut self, id: ButtonId) {
        self.held[id.index()] = false;
    }

    pub fn release_all(&mut self) {
        self.held = [false; ButtonId::COUNT];
    }

    pub fn edge_pending(&self, id: ButtonId) -> bool {
        self.edges[id.index()]
    }

    pub fn last_blink(&self) -> Option<BlinkRate> {
        self.calls.iter().rev().find_map(|c| match c {
            LedCall::Blink(LedId::Led3, rate) => Some(*rate),
            _ => None,
        })
    }

    pub fn last_duty(&self, id: LedId) -> Option<u8> {
        self.calls.iter().rev().find_map(|c| match c {
            LedCall::Duty(led, d) if *led == id => Some(*d),
            _ => None,
        })
    }

    /// Level from the most recent `set` call for `id`.
    pub fn level(&self, id: LedId) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                LedCall::Set(led, on) if *led == id => Some(*on),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl ButtonPort for MockPad {
    fn is_held(&mut self, id: ButtonId) -> bool {
        self.held[id.index()]
    }

    fn consume_edge(&mut self, id: ButtonId) -> bool {
        std::mem::take(&mut self.edges[id.index()])
    }
}

impl LedPort for MockPad {
    fn set(&mut self, id: LedId, on: bool) {
        self.calls.push(LedCall::Set(id, on));
    }

    fn set_duty_cycle(&mut self, id: LedId, percent: u8) {
        self.calls.push(LedCall::Duty(id, percent));
    }

    fn blink(&mut self, id: LedId, rate: BlinkRate) {
        self.calls.push(LedCall::Blink(id, rate));
    }
}

// ── EventLog ──────────────────────────────────────────────────

#[derive(Default)]
pub struct EventLog {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl EventLog {
    pub fn count(&self, event: &AppEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}

// ── Rig ───────────────────────────────────────────────────────

pub struct Rig {
    pub app: AppService,
    pub pad: MockPad,
    pub text: ConsoleSink<Vec<u8>>,
    pub log: EventLog,
}

#[allow(dead_code)]
impl Rig {
    pub fn new() -> Self {
        Self::with_config(ControllerConfig::default())
    }

    pub fn with_config(config: ControllerConfig) -> Self {
        let mut rig = Self {
            app: AppService::new(config),
            pad: MockPad::default(),
            text: ConsoleSink::new(Vec::new()),
            log: EventLog::default(),
        };
        rig.app.start(&mut rig.pad, &mut rig.log);
        rig
    }

    pub fn tick(&mut self) {
        self.app.tick(&mut self.pad, &mut self.text, &mut self.log);
    }

    pub fn idle(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Press for one tick, release for one tick.
    pub fn tap(&mut self, id: ButtonId) {
        self.pad.press(id);
        self.tick();
        self.pad.release(id);
        self.tick();
    }

    /// Tap btn0 for each `0` and btn1 for each `1`.
    pub fn enter_bits(&mut self, bits: &[u8]) {
        for &bit in bits {
            self.tap(if bit == 0 { ButtonId::Btn0 } else { ButtonId::Btn1 });
        }
    }

    /// Tap in the eight bits of `byte`, MSB first.
    pub fn enter_byte(&mut self, byte: u8) {
        let bits: Vec<u8> = (0..8).rev().map(|i| (byte >> i) & 1).collect();
        self.enter_bits(&bits);
    }

    /// Hold the default combo (btn0 + btn1) for `ticks` ticks.
    pub fn hold_combo(&mut self, ticks: u32) {
        self.pad.press(ButtonId::Btn0);
        self.pad.press(ButtonId::Btn1);
        self.idle(ticks);
    }

    pub fn exported(&self) -> &[u8] {
        self.text.get_ref()
    }
}

// ── Fake pins for the real driver stack ───────────────────────

/// Input pin driven through a shared cell; `true` pulls it low (pressed).
#[derive(Clone, Default)]
pub struct FakeButton(pub Rc<Cell<bool>>);

impl ErrorType for FakeButton {
    type Error = Infallible;
}

impl InputPin for FakeButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }
}

/// Output pin mirrored into a shared cell.
#[derive(Clone, Default)]
pub struct FakeLed(pub Rc<Cell<bool>>);

impl ErrorType for FakeLed {
    type Error = Infallible;
}

impl OutputPin for FakeLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set(true);
        Ok(())
    }
}

/// PWM channel with a 0..=100 range so raw duty equals percent.
#[derive(Clone, Default)]
pub struct FakePwm(pub Rc<Cell<u16>>);

impl PwmErrorType for FakePwm {
    type Error = Infallible;
}

impl SetDutyCycle for FakePwm {
    fn max_duty_cycle(&self) -> u16 {
        100
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.0.set(duty);
        Ok(())
    }
}
