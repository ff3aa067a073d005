//! Concrete state handler functions and table builder.
//!
//! Each state is defined by plain `fn` pointers — no closures, no dynamic
//! dispatch, no heap.
//!
//! ```text
//!               ┌──[btn0/btn1 edge]──┐
//!               ▼                    │
//!  ENTER_CODE ──[btn3, code done]──▶ SAVE_STRING ──[btn3]──▶ SEND_MONITOR
//!      ▲  ▲                              │                      │  ▲
//!      │  └────────────[btn2: clear]─────┘                      │  │ [btn3: export]
//!      └───────────────────────────────[btn2: clear]────────────┘  │
//!                                                                  │
//!  Any state ──[hold combo]──▶ ON_HOLD ──[any button held]──▶ previous state
//! ```

use super::context::MachineContext;
use super::{StateDescriptor, StateId};
use crate::app::ports::{BlinkRate, ButtonId, LedId};
use crate::codec::AcceptOutcome;
use crate::control::breathing::BreathStep;
use crate::error::Error;
use log::{debug, info, warn};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0 — EnterCode
        StateDescriptor {
            id: StateId::EnterCode,
            name: "EnterCode",
            on_enter: Some(enter_code_enter),
            on_exit: None,
            on_update: enter_code_update,
        },
        // Index 1 — SaveString
        StateDescriptor {
            id: StateId::SaveString,
            name: "SaveString",
            on_enter: Some(save_string_enter),
            on_exit: None,
            on_update: save_string_update,
        },
        // Index 2 — SendMonitor
        StateDescriptor {
            id: StateId::SendMonitor,
            name: "SendMonitor",
            on_enter: Some(send_monitor_enter),
            on_exit: None,
            on_update: send_monitor_update,
        },
        // Index 3 — OnHold
        StateDescriptor {
            id: StateId::OnHold,
            name: "OnHold",
            on_enter: Some(on_hold_enter),
            on_exit: Some(on_hold_exit),
            on_update: on_hold_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  Shared helpers
// ═══════════════════════════════════════════════════════════════════════════

/// Mirror btn0/btn1 onto LED0/LED1 and feed a bit on each rising edge.
/// Returns `true` if at least one bit was fed.
fn scan_bit_buttons(ctx: &mut MachineContext) -> bool {
    let mut fed = false;

    let btn0 = ctx.inputs.is_held(ButtonId::Btn0);
    if btn0 && !ctx.edges.btn0_latched {
        ctx.edges.btn0_latched = true;
        ctx.commands.set_led(LedId::Led0, true);
        feed_bit(ctx, 0);
        fed = true;
    } else if !btn0 && ctx.edges.btn0_latched {
        ctx.edges.btn0_latched = false;
        ctx.commands.set_led(LedId::Led0, false);
    }

    let btn1 = ctx.inputs.is_held(ButtonId::Btn1);
    if btn1 && !ctx.edges.btn1_latched {
        ctx.edges.btn1_latched = true;
        ctx.commands.set_led(LedId::Led1, true);
        feed_bit(ctx, 1);
        fed = true;
    } else if !btn1 && ctx.edges.btn1_latched {
        ctx.edges.btn1_latched = false;
        ctx.commands.set_led(LedId::Led1, false);
    }

    fed
}

/// Clear LED0/LED1 on release without feeding bits.
fn release_bit_buttons(ctx: &mut MachineContext) {
    if ctx.edges.btn0_latched && !ctx.inputs.is_held(ButtonId::Btn0) {
        ctx.edges.btn0_latched = false;
        ctx.commands.set_led(LedId::Led0, false);
    }
    if ctx.edges.btn1_latched && !ctx.inputs.is_held(ButtonId::Btn1) {
        ctx.edges.btn1_latched = false;
        ctx.commands.set_led(LedId::Led1, false);
    }
}

fn feed_bit(ctx: &mut MachineContext, bit: u8) {
    match ctx.accumulator.accept_bit(bit) {
        AcceptOutcome::Accepted => {
            debug!(
                "code: bit {} accepted, {} to go",
                bit,
                ctx.accumulator.bits_remaining() + 1
            );
        }
        AcceptOutcome::Completed(value) => {
            ctx.commands.set_led(LedId::Led2, true);
            ctx.notices.code_completed = Some(value);
            info!("code: complete 0x{:02X}", value);
        }
        AcceptOutcome::Ignored => {
            debug!("code: already complete, bit {} ignored", bit);
        }
    }
}

fn reset_code(ctx: &mut MachineContext) {
    ctx.accumulator.reset_code();
    ctx.commands.set_led(LedId::Led2, false);
}

fn clear_transcript(ctx: &mut MachineContext) {
    ctx.transcript.clear();
    reset_code(ctx);
    ctx.notices.transcript_cleared = true;
    info!("transcript cleared");
}

// ═══════════════════════════════════════════════════════════════════════════
//  ENTER_CODE state — accumulating bits
// ═══════════════════════════════════════════════════════════════════════════

fn enter_code_enter(ctx: &mut MachineContext) {
    ctx.commands.blink = Some(BlinkRate::Hz1);
    info!(
        "ENTER_CODE: {} bits pending",
        ctx.accumulator.bits_remaining() + 1
    );
}

fn enter_code_update(ctx: &mut MachineContext) -> Option<StateId> {
    scan_bit_buttons(ctx);

    if ctx.inputs.was_pressed(ButtonId::Btn2) {
        reset_code(ctx);
        info!("ENTER_CODE: code aborted");
    }

    if ctx.inputs.was_pressed(ButtonId::Btn3) {
        if !ctx.accumulator.is_complete() {
            debug!("ENTER_CODE: commit ignored, code incomplete");
            return None;
        }

        match ctx.accumulator.commit(&mut ctx.transcript) {
            Ok(byte) => {
                ctx.notices.code_committed = Some(byte);
                info!(
                    "ENTER_CODE: committed 0x{:02X} ({}/{})",
                    byte,
                    ctx.transcript.len(),
                    crate::config::TRANSCRIPT_CAPACITY
                );
            }
            Err(Error::CapacityExceeded) => {
                ctx.notices.transcript_full = true;
                warn!("ENTER_CODE: transcript full, code dropped");
            }
            Err(e) => warn!("ENTER_CODE: commit failed: {e}"),
        }
        ctx.commands.set_led(LedId::Led2, false);
        return Some(StateId::SaveString);
    }

    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  SAVE_STRING state — code committed, waiting for the next move
// ═══════════════════════════════════════════════════════════════════════════

fn save_string_enter(ctx: &mut MachineContext) {
    ctx.commands.blink = Some(BlinkRate::Hz4);
    info!("SAVE_STRING: {} bytes stored", ctx.transcript.len());
}

fn save_string_update(ctx: &mut MachineContext) -> Option<StateId> {
    // A new bit starts the next code straight away.
    if scan_bit_buttons(ctx) {
        return Some(StateId::EnterCode);
    }

    if ctx.inputs.was_pressed(ButtonId::Btn2) {
        clear_transcript(ctx);
        return Some(StateId::EnterCode);
    }

    if ctx.inputs.was_pressed(ButtonId::Btn3) {
        return Some(StateId::SendMonitor);
    }

    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  SEND_MONITOR state — exporting the transcript
// ═══════════════════════════════════════════════════════════════════════════

fn send_monitor_enter(ctx: &mut MachineContext) {
    ctx.commands.blink = Some(BlinkRate::Hz16);
    info!("SEND_MONITOR: btn3 exports, btn2 clears");
}

fn send_monitor_update(ctx: &mut MachineContext) -> Option<StateId> {
    release_bit_buttons(ctx);

    if ctx.inputs.was_pressed(ButtonId::Btn2) {
        clear_transcript(ctx);
        return Some(StateId::EnterCode);
    }

    if ctx.inputs.was_pressed(ButtonId::Btn3) {
        ctx.commands.export = true;
        info!("SEND_MONITOR: exporting {} bytes", ctx.transcript.len());
    }

    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  ON_HOLD state — breathing animation until a button is held
// ═══════════════════════════════════════════════════════════════════════════

fn on_hold_enter(ctx: &mut MachineContext) {
    ctx.anim.begin();
    ctx.commands.blink = Some(BlinkRate::Off);
    info!(
        "ON_HOLD: interrupted {:?}, breathing from {}%",
        ctx.previous_state,
        ctx.anim.duty_cycle()
    );
}

fn on_hold_exit(ctx: &mut MachineContext) {
    info!("ON_HOLD: resuming {:?}", ctx.previous_state);
}

fn on_hold_update(ctx: &mut MachineContext) -> Option<StateId> {
    match ctx.anim.tick(ctx.inputs.any_held()) {
        BreathStep::Aborted => {
            ctx.commands.duty = Some(0);
            ctx.reseat_latches();
            Some(ctx.previous_state)
        }
        BreathStep::WarmingUp | BreathStep::Running => {
            ctx.commands.duty = Some(ctx.anim.duty_cycle());
            None
        }
    }
}
