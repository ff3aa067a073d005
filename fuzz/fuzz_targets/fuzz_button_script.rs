//! Fuzz target: `AppService::tick`
//!
//! Treats each input byte as one step of a button script: the low nibble
//! is the level of btn0..btn3, the high nibble how many ticks to hold it.
//! Asserts the transcript never overflows, the duty cycle stays in range
//! and `OnHold` is never recorded as a state to resume.
//!
//! cargo fuzz run fuzz_button_script

#![no_main]

use codepad::app::events::AppEvent;
use codepad::app::ports::{BlinkRate, ButtonId, ButtonPort, EventSink, LedId, LedPort, TextSink};
use codepad::app::service::AppService;
use codepad::config::{ControllerConfig, TRANSCRIPT_CAPACITY};
use codepad::fsm::StateId;
use libfuzzer_sys::fuzz_target;

#[derive(Default)]
struct Pad {
    held: [bool; ButtonId::COUNT],
    edges: [bool; ButtonId::COUNT],
    max_duty: u8,
}

impl ButtonPort for Pad {
    fn is_held(&mut self, id: ButtonId) -> bool {
        self.held[id.index()]
    }
    fn consume_edge(&mut self, id: ButtonId) -> bool {
        std::mem::take(&mut self.edges[id.index()])
    }
}

impl LedPort for Pad {
    fn set(&mut self, _id: LedId, _on: bool) {}
    fn set_duty_cycle(&mut self, _id: LedId, percent: u8) {
        self.max_duty = self.max_duty.max(percent);
    }
    fn blink(&mut self, _id: LedId, _rate: BlinkRate) {}
}

struct Sinks {
    exported: usize,
}

impl TextSink for Sinks {
    fn write(&mut self, bytes: &[u8]) {
        assert!(bytes.len() <= TRANSCRIPT_CAPACITY);
        self.exported += bytes.len();
    }
}

impl EventSink for Sinks {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    // Short gestures so the hold and the animation are reachable.
    let config = ControllerConfig {
        hold_duration_ms: 20,
        breath_warmup_ms: 8,
        breath_step_ms: 1,
        ..ControllerConfig::default()
    };
    let mut app = AppService::new(config);
    let mut pad = Pad::default();
    let mut text = Sinks { exported: 0 };
    let mut events = Sinks { exported: 0 };
    app.start(&mut pad, &mut events);

    for &step in data {
        for id in ButtonId::ALL {
            let down = step & (1 << id.index()) != 0;
            if down && !pad.held[id.index()] {
                pad.edges[id.index()] = true;
            }
            pad.held[id.index()] = down;
        }
        for _ in 0..=(step >> 4) {
            app.tick(&mut pad, &mut text, &mut events);
            assert!(app.transcript().len() <= TRANSCRIPT_CAPACITY);
            assert!(pad.max_duty <= 100);
            assert_ne!(app.previous_state(), StateId::OnHold);
        }
    }
    assert!(text.exported <= data.len() * 16 * TRANSCRIPT_CAPACITY);
});
