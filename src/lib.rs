//! adcraft: ad-creative prompt assembly and generation.
//!
//! Turns structured marketing context (persona, mass desire, strategy
//! pillars, locked copy, format, voice archetype) into instruction prompts
//! for a hosted generative model, and parses the replies back into typed
//! data.
//!
//! See `DESIGN.md` for the module map.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod creative;
pub mod generation;
pub mod logging;
pub mod prompt;
pub mod providers;
