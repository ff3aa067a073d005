//! Port traits — the hexagonal boundary between the controller and the
//! outside world.
//!
//! ```text
//!   ButtonPort ──▶ ┌──────────────┐ ──▶ LedPort
//!                  │  AppService  │ ──▶ TextSink
//!                  └──────────────┘ ──▶ EventSink
//! ```
//!
//! Driven adapters (button bank, indicator LEDs, console, logger)
//! implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics, so the state machine never touches
//! hardware directly.

use serde::{Deserialize, Serialize};

// ───────────────────────────────────────────────────────────────
// Identifiers
// ───────────────────────────────────────────────────────────────

/// The four momentary buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ButtonId {
    Btn0 = 0,
    Btn1 = 1,
    Btn2 = 2,
    Btn3 = 3,
}

impl ButtonId {
    pub const COUNT: usize = 4;
    pub const ALL: [ButtonId; Self::COUNT] = [Self::Btn0, Self::Btn1, Self::Btn2, Self::Btn3];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The four indicator LEDs.  `Led3` is the dimmable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LedId {
    Led0 = 0,
    Led1 = 1,
    Led2 = 2,
    Led3 = 3,
}

impl LedId {
    pub const COUNT: usize = 4;
    pub const ALL: [LedId; Self::COUNT] = [Self::Led0, Self::Led1, Self::Led2, Self::Led3];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Blink rates used as a per-state visual signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkRate {
    Off,
    Hz1,
    Hz4,
    Hz16,
}

impl BlinkRate {
    /// Frequency in Hz, `None` when blinking is disabled.
    pub const fn hz(self) -> Option<u32> {
        match self {
            Self::Off => None,
            Self::Hz1 => Some(1),
            Self::Hz4 => Some(4),
            Self::Hz16 => Some(16),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Button port (driven adapter: hardware → controller)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the four buttons.
///
/// The two queries are deliberately distinct: `is_held` is a plain level
/// read, while `consume_edge` reports each physical press at most once.
pub trait ButtonPort {
    /// Current level of the button (`true` while pressed).
    fn is_held(&mut self, id: ButtonId) -> bool;

    /// Returns `true` once per press, then clears the latch until the
    /// next press.
    fn consume_edge(&mut self, id: ButtonId) -> bool;
}

// ───────────────────────────────────────────────────────────────
// LED port (driven adapter: controller → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the indicator LEDs.  All calls are fire-and-forget.
pub trait LedPort {
    /// Switch a binary indicator on or off.
    fn set(&mut self, id: LedId, on: bool);

    /// Drive an LED at the given duty cycle (0–100).
    fn set_duty_cycle(&mut self, id: LedId, percent: u8);

    /// Start (or stop, with [`BlinkRate::Off`]) free-running blinking.
    fn blink(&mut self, id: LedId, rate: BlinkRate);
}

// ───────────────────────────────────────────────────────────────
// Text sink port (driven adapter: controller → monitor)
// ───────────────────────────────────────────────────────────────

/// Destination for the transcript export.  No acknowledgement, no
/// backpressure.
pub trait TextSink {
    fn write(&mut self, bytes: &[u8]);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: controller → logging)
// ───────────────────────────────────────────────────────────────

/// The controller emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
