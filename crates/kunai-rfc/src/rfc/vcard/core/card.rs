//! vCard record type (RFC 6350).

use super::property::{VCardProperty, names};

/// A parsed vCard record.
///
/// Properties keep their order of appearance. Lookups by name are
/// case-insensitive and may yield multiple instances (repeated
/// properties such as EMAIL or TEL).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VCard {
    /// Properties in order of appearance.
    pub properties: Vec<VCardProperty>,
}

impl VCard {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property.
    pub fn add_property(&mut self, property: VCardProperty) {
        self.properties.push(property);
    }

    /// Adds a property, builder style.
    #[must_use]
    pub fn with_property(mut self, property: VCardProperty) -> Self {
        self.properties.push(property);
        self
    }

    /// Returns all instances of the named property.
    pub fn properties_named(&self, name: &str) -> impl Iterator<Item = &VCardProperty> {
        let name_upper = name.to_ascii_uppercase();
        self.properties.iter().filter(move |p| p.name == name_upper)
    }

    /// Returns the first instance of the named property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&VCardProperty> {
        self.properties_named(name).next()
    }

    /// Returns whether the record has at least one instance of the named property.
    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the FN (formatted name) value.
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.get(names::FN).map(|p| p.value.as_str())
    }

    /// Returns the UID value.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.get(names::UID).map(|p| p.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let card = VCard::new().with_property(VCardProperty::new("FN", "John Doe"));
        assert!(card.has_property("fn"));
        assert_eq!(card.formatted_name(), Some("John Doe"));
    }

    #[test]
    fn repeated_properties_all_returned() {
        let card = VCard::new()
            .with_property(VCardProperty::new("EMAIL", "a@example.com"))
            .with_property(VCardProperty::new("EMAIL", "b@example.com"));
        let values: Vec<&str> = card
            .properties_named("EMAIL")
            .map(|p| p.value.as_str())
            .collect();
        assert_eq!(values, vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn missing_property() {
        let card = VCard::new();
        assert!(!card.has_property("EMAIL"));
        assert!(card.uid().is_none());
    }
}
