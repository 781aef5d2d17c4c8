//! RFC-domain types and pure logic for the `kunai` contacts toolkit.
//!
//! Covers the vCard record model (RFC 6350), the `CardDAV` query/filter
//! model and its evaluation (RFC 6352 §10.5), RFC 4790 collations, and
//! address-data partial retrieval. Wire parsing and serialization are
//! external collaborators; everything in this crate is in-memory and pure.

pub mod rfc;
