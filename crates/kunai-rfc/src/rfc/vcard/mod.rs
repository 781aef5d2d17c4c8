//! vCard record model (RFC 6350).
//!
//! The filter engine only needs named-property and parameter lookup on an
//! already-parsed record. Parsing and serialization of vCard text are
//! external collaborators and are not implemented here; builder
//! constructors exist for programmatic construction.

pub mod core;

pub use core::{VCard, VCardParameter, VCardProperty, names};
