//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the FSM and the shared machine context.  It exposes
//! a clean, hardware-agnostic API.  All I/O flows through port traits
//! injected at call sites, making the entire service testable with mock
//! adapters.
//!
//! ```text
//!  ButtonPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │       AppService        │
//!     LedPort ◀── │  Hold · FSM · Breathing │ ──▶ TextSink
//!                 └────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::{ControllerConfig, TRANSCRIPT_CAPACITY};
use crate::fsm::context::{InputSnapshot, MachineContext, Notices};
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};
use crate::hold::HoldEvent;
use crate::transcript::Transcript;

use super::events::AppEvent;
use super::ports::{ButtonId, ButtonPort, EventSink, LedId, LedPort, TextSink};

/// Buttons whose presses are consumed as edges.  btn0/btn1 are level-read
/// and turned into edges by the context latches.
const EDGE_BUTTONS: [ButtonId; 2] = [ButtonId::Btn2, ButtonId::Btn3];

/// LEDs driven as binary indicators.  LED3 is owned by the blink timer.
const BINARY_LEDS: [LedId; 3] = [LedId::Led0, LedId::Led1, LedId::Led2];

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    fsm: Fsm,
    ctx: MachineContext,
    tick_count: u64,
    /// Binary LED levels last written to the port.
    applied_leds: [bool; LedId::COUNT],
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** start the FSM — call [`start`](Self::start) next.
    pub fn new(config: ControllerConfig) -> Self {
        let ctx = MachineContext::new(config);
        let fsm = Fsm::new(build_state_table(), StateId::EnterCode);

        Self {
            fsm,
            ctx,
            tick_count: 0,
            applied_leds: [false; LedId::COUNT],
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Run the initial `EnterCode` entry action and switch every
    /// indicator to a known level.
    pub fn start(&mut self, leds: &mut impl LedPort, sink: &mut impl EventSink) {
        self.fsm.start(&mut self.ctx);
        self.apply_outputs(leds, true);
        sink.emit(&AppEvent::Started(self.fsm.current_state()));
        info!("AppService started in {:?}", self.fsm.current_state());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full cycle: levels → hold detector → edges → FSM → outputs.
    ///
    /// The `hw` parameter satisfies **both** [`ButtonPort`] and
    /// [`LedPort`] — this avoids a double mutable borrow while keeping the
    /// port boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl ButtonPort + LedPort),
        text: &mut impl TextSink,
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;
        let prev_state = self.fsm.current_state();

        // 1. Sample levels
        self.ctx.inputs = Self::sample(hw);
        self.ctx.notices = Notices::default();
        self.ctx.commands.duty = None;
        self.ctx.commands.export = false;

        // 2. Hold detector (never while already interrupted)
        if prev_state != StateId::OnHold {
            let [a, b] = self.ctx.config.hold_combo;
            let event = self
                .ctx
                .hold
                .observe(self.ctx.inputs.is_held(a), self.ctx.inputs.is_held(b));

            if event == HoldEvent::Triggered {
                info!(
                    "Hold combo {:?}+{:?} held for {} ticks, interrupting {:?}",
                    a,
                    b,
                    self.ctx.hold.combo_duration(),
                    prev_state
                );
                self.ctx.previous_state = prev_state;
                self.ctx.hold.reset();
                self.fsm.force_transition(StateId::OnHold, &mut self.ctx);
                sink.emit(&AppEvent::HoldTriggered {
                    interrupted: prev_state,
                });
            }
        }

        // 3. Press edges, left queued if the hold just interrupted
        if self.fsm.current_state().reads_edges() {
            for id in EDGE_BUTTONS {
                self.ctx.inputs.pressed[id.index()] = hw.consume_edge(id);
            }
        }

        // 4. FSM tick (pure state logic)
        self.fsm.tick(&mut self.ctx);

        // 5. Apply output commands via the ports
        let new_state = self.fsm.current_state();
        let resumed = prev_state == StateId::OnHold && new_state != StateId::OnHold;
        if resumed {
            Self::drain_edges(hw);
        }
        self.apply_outputs(hw, resumed);

        if self.ctx.commands.export {
            text.write(self.ctx.transcript.as_text());
        }

        // 6. Emit events
        if new_state != prev_state {
            sink.emit(&AppEvent::StateChanged {
                from: prev_state,
                to: new_state,
            });
        }
        self.emit_notices(sink);
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current FSM state.
    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// State the last hold interrupted (or will resume to).
    pub fn previous_state(&self) -> StateId {
        self.ctx.previous_state
    }

    /// Read-only view of the machine context.
    pub fn context(&self) -> &MachineContext {
        &self.ctx
    }

    /// Total ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn transcript(&self) -> &Transcript<TRANSCRIPT_CAPACITY> {
        &self.ctx.transcript
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.ctx.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn sample(buttons: &mut impl ButtonPort) -> InputSnapshot {
        let mut snap = InputSnapshot::default();
        for id in ButtonId::ALL {
            snap.held[id.index()] = buttons.is_held(id);
        }
        snap
    }

    /// Throw away presses that happened while the animation ran.
    fn drain_edges(buttons: &mut impl ButtonPort) {
        let mut drained = 0;
        for id in ButtonId::ALL {
            if buttons.consume_edge(id) {
                drained += 1;
            }
        }
        if drained > 0 {
            debug!("Dropped {} button presses queued during OnHold", drained);
        }
    }

    /// Translate FSM output commands into port calls.
    fn apply_outputs(&mut self, leds: &mut impl LedPort, force: bool) {
        let cmds = &mut self.ctx.commands;

        // ── Breathing: same duty on every LED ────────────────
        if let Some(percent) = cmds.duty {
            for id in LedId::ALL {
                leds.set_duty_cycle(id, percent);
            }
        }

        // ── Blink-rate signature (once per state entry) ──────
        if let Some(rate) = cmds.blink.take() {
            leds.blink(LedId::Led3, rate);
        }

        // ── Binary indicators, only on change ────────────────
        if self.fsm.current_state() == StateId::OnHold {
            return;
        }
        for id in BINARY_LEDS {
            let on = cmds.led(id);
            if force || self.applied_leds[id.index()] != on {
                leds.set(id, on);
                self.applied_leds[id.index()] = on;
            }
        }
    }

    fn emit_notices(&self, sink: &mut impl EventSink) {
        let notices = self.ctx.notices;

        if let Some(value) = notices.code_completed {
            sink.emit(&AppEvent::CodeCompleted(value));
        }
        if let Some(byte) = notices.code_committed {
            sink.emit(&AppEvent::CodeCommitted {
                byte,
                len: self.ctx.transcript.len(),
            });
        }
        if notices.transcript_full {
            sink.emit(&AppEvent::TranscriptFull);
        }
        if notices.transcript_cleared {
            sink.emit(&AppEvent::TranscriptCleared);
        }
        if self.ctx.commands.export {
            sink.emit(&AppEvent::TranscriptExported {
                len: self.ctx.transcript.len(),
            });
        }
    }
}
