/// Address data type advertised when a collection declares none.
///
/// RFC 6352 predates vCard 4.0 adoption; collections without an explicit
/// supported-address-data set are treated as vCard 3.0 only.
pub const DEFAULT_VCARD_CONTENT_TYPE: &str = "text/vcard";
pub const DEFAULT_VCARD_VERSION: &str = "3.0";

/// File extension for stored address object resources.
pub const VCARD_EXTENSION: &str = ".vcf";
