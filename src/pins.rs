//! GPIO / peripheral pin assignments for the code pad board.
//!
//! Single source of truth for the wiring.  `main.rs` claims the matching
//! typed pins from `Peripherals` and logs this table at boot so a wiring
//! mismatch shows up on the console.

// ---------------------------------------------------------------------------
// Buttons (active-low, internal pull-up)
// ---------------------------------------------------------------------------

/// btn0 — enters a `0` bit.
pub const BTN0_GPIO: i32 = 4;
/// btn1 — enters a `1` bit.
pub const BTN1_GPIO: i32 = 5;
/// btn2 — abort / clear.
pub const BTN2_GPIO: i32 = 6;
/// btn3 — commit / advance / export.
pub const BTN3_GPIO: i32 = 7;

pub const BUTTON_GPIOS: [i32; 4] = [BTN0_GPIO, BTN1_GPIO, BTN2_GPIO, BTN3_GPIO];

// ---------------------------------------------------------------------------
// Indicator LEDs (active-high)
// ---------------------------------------------------------------------------

pub const LED0_GPIO: i32 = 11;
pub const LED1_GPIO: i32 = 12;
/// Code-complete indicator.
pub const LED2_GPIO: i32 = 13;
/// Dimmable LED on LEDC channel 0.
pub const LED3_GPIO: i32 = 14;

pub const LED_GPIOS: [i32; 4] = [LED0_GPIO, LED1_GPIO, LED2_GPIO, LED3_GPIO];

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC frequency for the dimmable LED (1 kHz — flicker-free).
pub const LED_PWM_FREQ_HZ: u32 = 1_000;
