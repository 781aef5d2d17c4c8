//! Service layer for the `kunai` contacts toolkit.
//!
//! Applies the pure filter engine over candidate records (query
//! execution with limits and stable enumeration order) and retrieves
//! stored address objects through the storage abstraction.

pub mod carddav;
