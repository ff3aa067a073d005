//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements  | Connects to                    |
//! |------------|-------------|--------------------------------|
//! | `hardware` | ButtonPort  | Button bank (GPIO inputs)      |
//! |            | LedPort     | Indicator LEDs (GPIO + LEDC)   |
//! | `log_sink` | EventSink   | Serial log output              |
//! | `console`  | TextSink    | Any `std::io::Write` (UART0)   |

pub mod console;
pub mod hardware;
pub mod log_sink;
