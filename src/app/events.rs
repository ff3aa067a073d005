//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them (log to serial, count them in tests).

use crate::fsm::StateId;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The application service has started (carries initial state).
    Started(StateId),

    /// The FSM transitioned between states.
    StateChanged { from: StateId, to: StateId },

    /// The eighth bit of a code was accepted.
    CodeCompleted(u8),

    /// A completed code was appended to the transcript.
    CodeCommitted { byte: u8, len: usize },

    /// A commit found the transcript at capacity; the code was dropped.
    TranscriptFull,

    /// The transcript and any partial code were discarded.
    TranscriptCleared,

    /// The transcript was written to the text sink.
    TranscriptExported { len: usize },

    /// The hold combination interrupted `interrupted`.
    HoldTriggered { interrupted: StateId },
}
