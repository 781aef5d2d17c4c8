//! Shared layer for the `kunai` contacts-synchronization toolkit.
//!
//! Keeps the dependency surface minimal: error taxonomy, configuration,
//! and protocol constants used by the other workspace crates.

pub mod config;
pub mod constants;
pub mod error;
