//! Randomock Core — shared randomness abstractions.
//!
//! This crate defines the capability contract that both the production
//! passthrough and the scripted test double implement, plus a couple of
//! stateless numeric helpers. It contains no mocking code.

pub mod math;
pub mod rng;

pub use rng::{Randomizer, ThreadRandomizer};
