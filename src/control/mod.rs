//! Output generators that run inside a state handler.

pub mod breathing;
