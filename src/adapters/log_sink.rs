//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (the ESP-IDF logger on the device, which goes to
//! UART / USB-CDC).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(state) => {
                info!("START | initial_state={:?}", state);
            }
            AppEvent::StateChanged { from, to } => {
                info!("STATE | {:?} -> {:?}", from, to);
            }
            AppEvent::CodeCompleted(value) => {
                info!("CODE  | complete 0x{:02X} (0b{:08b})", value, value);
            }
            AppEvent::CodeCommitted { byte, len } => {
                info!("CODE  | committed 0x{:02X}, transcript len={}", byte, len);
            }
            AppEvent::TranscriptFull => {
                warn!("CODE  | transcript full, code dropped");
            }
            AppEvent::TranscriptCleared => {
                info!("TEXT  | cleared");
            }
            AppEvent::TranscriptExported { len } => {
                info!("TEXT  | exported {} bytes", len);
            }
            AppEvent::HoldTriggered { interrupted } => {
                info!("HOLD  | interrupted {:?}", interrupted);
            }
        }
    }
}
