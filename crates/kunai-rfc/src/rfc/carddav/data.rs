//! Address-data partial retrieval (RFC 6352 §10.4).

use crate::rfc::carddav::AddressDataRequest;
use crate::rfc::vcard::{VCard, names};

/// ## Summary
/// Selects the requested properties from a record.
///
/// If the request asks for all properties, or names none, the full record
/// is returned. Otherwise the result carries VERSION and FN (always
/// retained; a vCard without them is not usable by clients) plus the
/// requested properties, matched case-insensitively.
#[must_use]
pub fn select_address_data(card: &VCard, request: &AddressDataRequest) -> VCard {
    if request.all_prop || request.props.is_empty() {
        return card.clone();
    }

    let requested: Vec<String> = request
        .props
        .iter()
        .map(|p| p.to_ascii_uppercase())
        .collect();

    let properties = card
        .properties
        .iter()
        .filter(|p| {
            p.name == names::VERSION || p.name == names::FN || requested.contains(&p.name)
        })
        .cloned()
        .collect();

    VCard { properties }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::VCardProperty;

    fn john() -> VCard {
        VCard::new()
            .with_property(VCardProperty::new("VERSION", "4.0"))
            .with_property(VCardProperty::new("FN", "John Doe"))
            .with_property(VCardProperty::new("EMAIL", "john@example.com"))
            .with_property(VCardProperty::new("TEL", "555-1234"))
    }

    #[test]
    fn full_record_when_nothing_requested() {
        let card = john();
        assert_eq!(select_address_data(&card, &AddressDataRequest::default()), card);
        assert_eq!(select_address_data(&card, &AddressDataRequest::full()), card);
    }

    #[test]
    fn selected_properties_only() {
        let card = john();
        let request = AddressDataRequest::with_props(vec!["email".to_string()]);
        let selected = select_address_data(&card, &request);

        // VERSION and FN are always retained; EMAIL was requested; TEL was not
        assert!(selected.has_property("VERSION"));
        assert_eq!(selected.formatted_name(), Some("John Doe"));
        assert!(selected.has_property("EMAIL"));
        assert!(!selected.has_property("TEL"));
    }
}
