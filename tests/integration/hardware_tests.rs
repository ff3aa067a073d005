//! End-to-end tests through the real driver stack: fake pins →
//! `ButtonBank` / `IndicatorLeds` → `HardwareAdapter` → `AppService`.

use std::cell::Cell;
use std::rc::Rc;

use codepad::adapters::console::ConsoleSink;
use codepad::adapters::hardware::HardwareAdapter;
use codepad::adapters::log_sink::LogEventSink;
use codepad::app::ports::{BlinkRate, ButtonId, LedId};
use codepad::app::service::AppService;
use codepad::config::ControllerConfig;
use codepad::drivers::button::ButtonBank;
use codepad::drivers::indicator::IndicatorLeds;
use codepad::fsm::StateId;

use crate::mock_hw::{FakeButton, FakeLed, FakePwm};

struct Board {
    buttons: [Rc<Cell<bool>>; 4],
    leds: [Rc<Cell<bool>>; 3],
    pwm: Rc<Cell<u16>>,
    hw: HardwareAdapter<FakeButton, FakeLed, FakePwm>,
    app: AppService,
    console: ConsoleSink<Vec<u8>>,
    log: LogEventSink,
    period_ms: u32,
}

impl Board {
    fn new() -> Self {
        let buttons: [FakeButton; 4] = Default::default();
        let leds: [FakeLed; 3] = Default::default();
        let pwm = FakePwm::default();

        let button_cells = buttons.clone().map(|b| b.0);
        let led_cells = leds.clone().map(|l| l.0);
        let pwm_cell = pwm.0.clone();

        let config = ControllerConfig::default();
        let period_ms = config.tick_period_ms;
        let mut hw = HardwareAdapter::new(ButtonBank::new(buttons), IndicatorLeds::new(leds, pwm));
        let mut log = LogEventSink::new();
        let mut app = AppService::new(config);
        app.start(&mut hw, &mut log);

        Self {
            buttons: button_cells,
            leds: led_cells,
            pwm: pwm_cell,
            hw,
            app,
            console: ConsoleSink::new(Vec::new()),
            log,
            period_ms,
        }
    }

    /// One pass of the firmware loop.
    fn cycle(&mut self) {
        self.hw.poll();
        self.app.tick(&mut self.hw, &mut self.console, &mut self.log);
        self.hw.refresh(self.period_ms);
    }

    fn cycles(&mut self, n: u32) {
        for _ in 0..n {
            self.cycle();
        }
    }

    fn tap(&mut self, id: ButtonId) {
        self.buttons[id.index()].set(true);
        self.cycle();
        self.buttons[id.index()].set(false);
        self.cycle();
    }
}

#[test]
fn typed_code_reaches_transcript_and_console() {
    let mut board = Board::new();
    for bit in [0, 1, 0, 1, 0, 1, 0, 1] {
        board.tap(if bit == 0 { ButtonId::Btn0 } else { ButtonId::Btn1 });
    }
    assert!(board.leds[LedId::Led2.index()].get());

    board.tap(ButtonId::Btn3);
    assert_eq!(board.app.state(), StateId::SaveString);
    assert!(!board.leds[LedId::Led2.index()].get());
    assert_eq!(board.hw.leds().blink_rate(), BlinkRate::Hz4);

    board.tap(ButtonId::Btn3);
    board.tap(ButtonId::Btn3);
    assert_eq!(board.app.state(), StateId::SendMonitor);
    assert_eq!(board.console.get_ref(), &vec![85]);
}

#[test]
fn held_bit_button_lights_its_led() {
    let mut board = Board::new();
    board.buttons[ButtonId::Btn1.index()].set(true);
    board.cycles(20);
    assert!(board.leds[LedId::Led1.index()].get());
    assert_eq!(board.app.context().accumulator.bits_remaining(), 6);
    board.buttons[ButtonId::Btn1.index()].set(false);
    board.cycle();
    assert!(!board.leds[LedId::Led1.index()].get());
}

#[test]
fn led3_blinks_at_one_hz_in_enter_code() {
    let mut board = Board::new();
    assert_eq!(board.pwm.get(), 100);
    board.cycles(500);
    assert_eq!(board.pwm.get(), 0);
    board.cycles(500);
    assert_eq!(board.pwm.get(), 100);
}

#[test]
fn breathing_drives_pwm_then_blink_resumes() {
    let mut board = Board::new();
    board.buttons[ButtonId::Btn0.index()].set(true);
    board.buttons[ButtonId::Btn1.index()].set(true);
    board.cycles(3000);
    assert_eq!(board.app.state(), StateId::OnHold);
    assert_eq!(board.hw.leds().blink_rate(), BlinkRate::Off);

    board.buttons[ButtonId::Btn0.index()].set(false);
    board.buttons[ButtonId::Btn1.index()].set(false);
    board.cycles(1000 + 20 * 15 - 1);
    assert_eq!(board.pwm.get(), 20);
    assert!(!board.leds[LedId::Led0.index()].get());

    board.buttons[ButtonId::Btn2.index()].set(true);
    board.cycle();
    assert_eq!(board.app.state(), StateId::EnterCode);
    assert_eq!(board.hw.leds().blink_rate(), BlinkRate::Hz1);
    assert_eq!(board.pwm.get(), 100);
}
