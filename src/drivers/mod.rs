//! Peripheral drivers: button bank, indicator LEDs, blink timer.

pub mod blink;
pub mod button;
pub mod indicator;
