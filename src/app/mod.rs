//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the orchestration for the code pad: sampling
//! buttons, running the hold detector, dispatching the FSM and pushing the
//! results to the LEDs.  All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
