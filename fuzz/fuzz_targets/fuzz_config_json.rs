//! Fuzz target: `ControllerConfig::from_json`
//!
//! Arbitrary text must either be rejected with a typed error or produce a
//! config that validates and survives a serde_json round trip.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use codepad::config::ControllerConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = ControllerConfig::from_json(text) else {
        return;
    };

    assert!(config.validate().is_ok());
    assert!(config.hold_threshold_ticks() >= 1);
    assert!(config.breath_step_ticks() >= 1);

    let json = serde_json::to_string(&config).expect("serialize");
    let back = ControllerConfig::from_json(&json).expect("round trip");
    assert_eq!(back, config);
});
