//! Shared mutable context threaded through every FSM handler.
//!
//! `MachineContext` is the single struct that state handlers read from and
//! write to: the latest button snapshot, the code accumulator, the
//! transcript, the hold detector, the breathing animator, and the output
//! commands the service applies after the tick.

use crate::app::ports::{BlinkRate, ButtonId, LedId};
use crate::codec::CodeAccumulator;
use crate::config::{ControllerConfig, TRANSCRIPT_CAPACITY};
use crate::control::breathing::BreathingAnimator;
use crate::hold::HoldDetector;
use crate::transcript::Transcript;

use super::StateId;

// ---------------------------------------------------------------------------
// Input snapshot (read-only to state handlers; written by the service)
// ---------------------------------------------------------------------------

/// Button levels and consumed press edges for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Level of each button, indexed by [`ButtonId::index`].
    pub held: [bool; ButtonId::COUNT],
    /// Press edges consumed from the button source this tick.
    pub pressed: [bool; ButtonId::COUNT],
}

impl InputSnapshot {
    pub fn is_held(&self, id: ButtonId) -> bool {
        self.held[id.index()]
    }

    pub fn was_pressed(&self, id: ButtonId) -> bool {
        self.pressed[id.index()]
    }

    pub fn any_held(&self) -> bool {
        self.held.iter().any(|&h| h)
    }
}

// ---------------------------------------------------------------------------
// Edge latches
// ---------------------------------------------------------------------------

/// Whether btn0/btn1 have already been counted as pressed.  Comparing
/// these against the current level turns a level source into press and
/// release edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeLatches {
    pub btn0_latched: bool,
    pub btn1_latched: bool,
}

// ---------------------------------------------------------------------------
// Output commands (written by state handlers; consumed by the service)
// ---------------------------------------------------------------------------

/// What the service should do to the outside world after the tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputCommands {
    /// Desired level of each binary indicator.
    pub leds: [bool; LedId::COUNT],
    /// Blink rate requested by a state entry action, applied once.
    pub blink: Option<BlinkRate>,
    /// Duty cycle to push to every LED this tick.
    pub duty: Option<u8>,
    /// Export the transcript to the text sink.
    pub export: bool,
}

impl OutputCommands {
    pub fn set_led(&mut self, id: LedId, on: bool) {
        self.leds[id.index()] = on;
    }

    pub fn led(&self, id: LedId) -> bool {
        self.leds[id.index()]
    }
}

// ---------------------------------------------------------------------------
// Notices (handlers → service, turned into AppEvents)
// ---------------------------------------------------------------------------

/// One-tick notices raised by handlers for the event sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Notices {
    pub code_completed: Option<u8>,
    pub code_committed: Option<u8>,
    pub transcript_full: bool,
    pub transcript_cleared: bool,
}

// ---------------------------------------------------------------------------
// MachineContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct MachineContext {
    // -- State bookkeeping --
    /// State to resume when `OnHold` ends.  Written only on entry to `OnHold`.
    pub previous_state: StateId,

    // -- Inputs --
    pub inputs: InputSnapshot,
    pub edges: EdgeLatches,

    // -- Core data --
    pub accumulator: CodeAccumulator,
    pub transcript: Transcript<TRANSCRIPT_CAPACITY>,
    pub hold: HoldDetector,
    pub anim: BreathingAnimator,

    // -- Outputs --
    pub commands: OutputCommands,
    pub notices: Notices,

    // -- Configuration --
    pub config: ControllerConfig,
}

impl MachineContext {
    /// Create a new context with the given configuration.
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            previous_state: StateId::EnterCode,
            inputs: InputSnapshot::default(),
            edges: EdgeLatches::default(),
            accumulator: CodeAccumulator::new(),
            transcript: Transcript::new(),
            hold: HoldDetector::new(config.hold_threshold_ticks()),
            anim: BreathingAnimator::new(config.breath_warmup_ticks(), config.breath_step_ticks()),
            commands: OutputCommands::default(),
            notices: Notices::default(),
            config,
        }
    }

    /// Turn LED0/LED1 off and re-seed both latches from the current
    /// levels.  A bit button still held stays latched, so it is not read
    /// as a fresh press until it has been released.
    pub fn reseat_latches(&mut self) {
        self.edges = EdgeLatches {
            btn0_latched: self.inputs.is_held(ButtonId::Btn0),
            btn1_latched: self.inputs.is_held(ButtonId::Btn1),
        };
        self.commands.set_led(LedId::Led0, false);
        self.commands.set_led(LedId::Led1, false);
    }
}
