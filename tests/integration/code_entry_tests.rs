//! Integration tests for code entry: buttons → accumulator → transcript.

use codepad::app::events::AppEvent;
use codepad::app::ports::{BlinkRate, ButtonId, LedId};
use codepad::config::TRANSCRIPT_CAPACITY;
use codepad::fsm::StateId;

use crate::mock_hw::{LedCall, Rig};

#[test]
fn alternating_bits_commit_85() {
    let mut rig = Rig::new();
    assert_eq!(rig.app.state(), StateId::EnterCode);

    rig.enter_bits(&[0, 1, 0, 1, 0, 1, 0, 1]);
    assert!(rig.app.context().accumulator.is_complete());
    assert_eq!(rig.app.context().accumulator.value(), 85);

    rig.tap(ButtonId::Btn3);
    assert_eq!(rig.app.state(), StateId::SaveString);
    assert_eq!(rig.app.transcript().as_text(), &[85]);

    assert_eq!(rig.log.count(&AppEvent::CodeCompleted(85)), 1);
    assert_eq!(rig.log.count(&AppEvent::CodeCommitted { byte: 85, len: 1 }), 1);
    assert_eq!(
        rig.log.count(&AppEvent::StateChanged {
            from: StateId::EnterCode,
            to: StateId::SaveString,
        }),
        1
    );
}

#[test]
fn first_bit_is_most_significant() {
    let mut rig = Rig::new();
    rig.enter_bits(&[1, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(rig.app.context().accumulator.value(), 0x80);
}

#[test]
fn bits_past_completion_are_ignored() {
    let mut rig = Rig::new();
    rig.enter_byte(0x3C);
    rig.enter_bits(&[1, 1, 1]);
    assert_eq!(rig.app.context().accumulator.value(), 0x3C);
    assert_eq!(rig.log.count(&AppEvent::CodeCompleted(0x3C)), 1);
}

#[test]
fn bit_buttons_mirror_onto_leds() {
    let mut rig = Rig::new();
    rig.pad.press(ButtonId::Btn0);
    rig.tick();
    assert!(rig.pad.level(LedId::Led0));
    rig.pad.release(ButtonId::Btn0);
    rig.tick();
    assert!(!rig.pad.level(LedId::Led0));
}

#[test]
fn completion_indicator_follows_code() {
    let mut rig = Rig::new();
    rig.enter_bits(&[1; 7]);
    assert!(!rig.pad.level(LedId::Led2));
    rig.enter_bits(&[0]);
    assert!(rig.pad.level(LedId::Led2));
    rig.tap(ButtonId::Btn3);
    assert!(!rig.pad.level(LedId::Led2));
}

#[test]
fn btn2_aborts_partial_code() {
    let mut rig = Rig::new();
    rig.enter_bits(&[1, 1, 0, 1]);
    rig.tap(ButtonId::Btn2);
    assert_eq!(rig.app.context().accumulator.bits_remaining(), 7);
    assert_eq!(rig.app.context().accumulator.value(), 0);
    assert_eq!(rig.app.state(), StateId::EnterCode);
}

#[test]
fn btn2_clears_completion_indicator() {
    let mut rig = Rig::new();
    rig.enter_byte(0xFF);
    assert!(rig.pad.level(LedId::Led2));
    rig.tap(ButtonId::Btn2);
    assert!(!rig.pad.level(LedId::Led2));
}

#[test]
fn commit_before_completion_does_nothing() {
    let mut rig = Rig::new();
    rig.enter_bits(&[0, 1, 1]);
    rig.tap(ButtonId::Btn3);
    assert_eq!(rig.app.state(), StateId::EnterCode);
    assert!(rig.app.transcript().is_empty());
}

#[test]
fn next_bit_from_save_string_starts_new_code() {
    let mut rig = Rig::new();
    rig.enter_byte(b'H');
    rig.tap(ButtonId::Btn3);
    assert_eq!(rig.app.state(), StateId::SaveString);

    rig.enter_byte(b'i');
    assert_eq!(rig.app.state(), StateId::EnterCode);
    rig.tap(ButtonId::Btn3);
    assert_eq!(rig.app.transcript().as_text(), b"Hi");
}

#[test]
fn save_string_btn2_clears_transcript() {
    let mut rig = Rig::new();
    rig.enter_byte(7);
    rig.tap(ButtonId::Btn3);
    rig.tap(ButtonId::Btn2);
    assert_eq!(rig.app.state(), StateId::EnterCode);
    assert!(rig.app.transcript().is_empty());
    assert_eq!(rig.log.count(&AppEvent::TranscriptCleared), 1);
}

#[test]
fn full_transcript_drops_extra_codes() {
    let mut rig = Rig::new();
    for i in 0..=TRANSCRIPT_CAPACITY {
        rig.enter_byte(i as u8);
        rig.tap(ButtonId::Btn3);
        assert_eq!(rig.app.state(), StateId::SaveString);
    }

    let text = rig.app.transcript().as_text();
    assert_eq!(text.len(), TRANSCRIPT_CAPACITY);
    assert_eq!(text[TRANSCRIPT_CAPACITY - 1], (TRANSCRIPT_CAPACITY - 1) as u8);
    assert_eq!(rig.log.count(&AppEvent::TranscriptFull), 1);
    assert!(!rig.app.context().accumulator.is_complete());
}

#[test]
fn each_state_entry_sets_blink_rate() {
    let mut rig = Rig::new();
    assert_eq!(rig.pad.last_blink(), Some(BlinkRate::Hz1));

    rig.enter_byte(1);
    rig.tap(ButtonId::Btn3);
    assert_eq!(rig.pad.last_blink(), Some(BlinkRate::Hz4));

    rig.tap(ButtonId::Btn3);
    assert_eq!(rig.pad.last_blink(), Some(BlinkRate::Hz16));

    rig.tap(ButtonId::Btn2);
    assert_eq!(rig.pad.last_blink(), Some(BlinkRate::Hz1));

    let blinks = rig
        .pad
        .calls
        .iter()
        .filter(|c| matches!(c, LedCall::Blink(..)))
        .count();
    assert_eq!(blinks, 4);
}
