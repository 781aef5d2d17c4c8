pub mod carddav;
pub mod collation;
pub mod vcard;
