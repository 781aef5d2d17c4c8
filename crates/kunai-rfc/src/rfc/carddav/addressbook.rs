//! Address book and address object descriptors (RFC 6352).

use chrono::{DateTime, Utc};
use kunai_core::constants::{DEFAULT_VCARD_CONTENT_TYPE, DEFAULT_VCARD_VERSION};

use crate::rfc::vcard::VCard;

/// An address data type a collection can store: a (content-type, version) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressDataType {
    pub content_type: String,
    pub version: String,
}

impl AddressDataType {
    #[must_use]
    pub fn new(content_type: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            version: version.into(),
        }
    }
}

/// An address book collection descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Addressbook {
    /// Virtual path of the collection.
    pub path: String,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Maximum allowed resource size in bytes (0 = no limit advertised).
    pub max_resource_size: u64,
    /// Supported address data types; empty means the vCard 3.0 fallback.
    pub supported_address_data: Vec<AddressDataType>,
    /// Address book home set path.
    pub home_set: String,
    /// Principal URL of the owner.
    pub principal_url: String,
    /// Current user principal path.
    pub current_user_principal: String,
}

impl Addressbook {
    /// ## Summary
    /// Checks whether the collection accepts the given address data type.
    ///
    /// A collection that declares no supported types accepts exactly
    /// vCard 3.0 (`text/vcard`), the pre-4.0 interoperability fallback.
    #[must_use]
    pub fn supports_address_data(&self, content_type: &str, version: &str) -> bool {
        if self.supported_address_data.is_empty() {
            return content_type == DEFAULT_VCARD_CONTENT_TYPE && version == DEFAULT_VCARD_VERSION;
        }
        self.supported_address_data
            .iter()
            .any(|t| t.content_type == content_type && t.version == version)
    }
}

/// A stored address object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressObject {
    /// Virtual path of the resource.
    pub path: String,
    /// Last modification time.
    pub mod_time: DateTime<Utc>,
    /// Opaque entity tag; changes whenever the content changes.
    pub etag: String,
    /// Parsed record payload.
    pub card: VCard,
}

impl AddressObject {
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        mod_time: DateTime<Utc>,
        etag: impl Into<String>,
        card: VCard,
    ) -> Self {
        Self {
            path: path.into(),
            mod_time,
            etag: etag.into(),
            card,
        }
    }
}
