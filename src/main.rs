//! Code pad firmware — main entry point.
//!
//! Hexagonal architecture with a fixed-period control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter        LogEventSink        ConsoleSink        │
//! │  (Button+Led ports)     (EventSink)         (TextSink, UART0)  │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  Hold detector · FSM · Breathing animator              │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, IOPin, Input, OutputPin, PinDriver, Pull};
use esp_idf_hal::ledc::config::TimerConfig;
use esp_idf_hal::ledc::{LedcDriver, LedcTimerDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;
use log::{info, warn};

use embedded_hal::pwm::SetDutyCycle;

use codepad::Error;
use codepad::adapters::console::ConsoleSink;
use codepad::adapters::hardware::HardwareAdapter;
use codepad::adapters::log_sink::LogEventSink;
use codepad::app::service::AppService;
use codepad::config::ControllerConfig;
use codepad::drivers::button::ButtonBank;
use codepad::drivers::indicator::IndicatorLeds;
use codepad::pins;

/// Optional build-time override, e.g.
/// `CODEPAD_CONFIG='{"tick_period_ms":2,...}' cargo build --features espidf`.
const CONFIG_JSON: Option<&str> = option_env!("CODEPAD_CONFIG");

fn load_config() -> ControllerConfig {
    let Some(json) = CONFIG_JSON else {
        return ControllerConfig::default();
    };
    match ControllerConfig::from_json(json) {
        Ok(cfg) => {
            info!("Config loaded from CODEPAD_CONFIG");
            cfg
        }
        Err(e) => {
            warn!("CODEPAD_CONFIG rejected ({}), using defaults", e);
            ControllerConfig::default()
        }
    }
}

fn button(pin: AnyIOPin) -> Result<PinDriver<'static, AnyIOPin, Input>> {
    let mut driver = PinDriver::input(pin)?;
    driver.set_pull(Pull::Up)?;
    Ok(driver)
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Code pad v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = load_config();
    let period_ms = config.tick_period_ms;
    info!(
        "Tick {} ms, hold {} ticks, breathing {}+{} ticks",
        period_ms,
        config.hold_threshold_ticks(),
        config.breath_warmup_ticks(),
        config.breath_step_ticks()
    );

    // ── 3. Peripherals ────────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let io = peripherals.pins;
    info!(
        "Buttons on GPIO {:?}, LEDs on GPIO {:?}",
        pins::BUTTON_GPIOS,
        pins::LED_GPIOS
    );

    let buttons = ButtonBank::new([
        button(io.gpio4.downgrade())?,
        button(io.gpio5.downgrade())?,
        button(io.gpio6.downgrade())?,
        button(io.gpio7.downgrade())?,
    ]);

    let binary = [
        PinDriver::output(io.gpio11.downgrade_output())?,
        PinDriver::output(io.gpio12.downgrade_output())?,
        PinDriver::output(io.gpio13.downgrade_output())?,
    ];
    let timer = LedcTimerDriver::new(
        peripherals.ledc.timer0,
        &TimerConfig::default().frequency(Hertz(pins::LED_PWM_FREQ_HZ)),
    )?;
    let dimmable = LedcDriver::new(peripherals.ledc.channel0, timer, io.gpio14)?;
    if SetDutyCycle::max_duty_cycle(&dimmable) == 0 {
        return Err(Error::Init("LEDC channel has no duty range").into());
    }

    // ── 4. Adapters + app service ─────────────────────────────
    let mut hw = HardwareAdapter::new(buttons, IndicatorLeds::new(binary, dimmable));
    let mut log_sink = LogEventSink::new();
    let mut console = ConsoleSink::new(std::io::stdout());

    let mut app = AppService::new(config);
    app.start(&mut hw, &mut log_sink);

    info!("System ready. Entering control loop.");

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        hw.poll();
        app.tick(&mut hw, &mut console, &mut log_sink);
        hw.refresh(period_ms);
        FreeRtos::delay_ms(period_ms);
    }
}
