//! Code pad firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection.  Nothing here depends on ESP-IDF; the drivers are generic
//! over `embedded-hal` traits and the firmware binary supplies the pins.

#![deny(unused_must_use)]

pub mod app;
pub mod codec;
pub mod config;
pub mod control;
pub mod error;
pub mod fsm;
pub mod hold;
pub mod pins;
pub mod transcript;

pub mod adapters;
pub mod drivers;

pub use error::{Error, Result};
