//! Core domain types for lazyload.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod branch;
mod message;

pub use branch::{Branch, Roll, RollError, Threshold, ThresholdError};
pub use message::{GREETING, Message, SKIP_MESSAGE, START_MESSAGE};
