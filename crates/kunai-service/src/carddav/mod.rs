//! `CardDAV` services.

pub mod service;
