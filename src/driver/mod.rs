//! The smoke-test driver.
//!
//! Wires the engine to the filesystem for one end-to-end run: a text goes in,
//! a WAV file and a single completion line come out.

mod smoke;

pub use smoke::{DriverError, SmokeTest};
