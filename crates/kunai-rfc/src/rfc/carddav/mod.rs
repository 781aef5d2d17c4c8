//! `CardDAV` types and filter evaluation (RFC 6352).

mod addressbook;
pub mod data;
pub mod filter;
mod query;

pub use addressbook::{AddressDataType, AddressObject, Addressbook};
pub use query::{
    AddressDataRequest, AddressbookMultiget, AddressbookQuery, FilterTest, MatchType, ParamFilter,
    ParamPredicate, PropFilter, PropPredicate, SyncQuery, SyncResponse, TextMatch,
};
