//! Core domain + application logic for the MLB Scoring Plays Bot.
//!
//! This crate is intentionally framework-agnostic. The LINE webhook surface
//! and the MLB Stats API live behind ports (traits) implemented in adapter
//! crates.

pub mod compose;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod ports;
pub mod teams;

pub use errors::{Error, Result};
