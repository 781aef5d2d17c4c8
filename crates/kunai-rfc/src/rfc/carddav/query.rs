//! `CardDAV` query and filter request types (RFC 6352 §10.5).
//!
//! These are immutable request descriptors: the transport layer builds
//! them from parsed wire input and the filter engine consumes them
//! read-only. Defaults (`anyof`, `contains`, `i;unicode-casemap`) are
//! supplied by the constructors, never by zero-value fallbacks.

use crate::rfc::collation::Casemap;

/// Combinator applied across a set of sub-predicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterTest {
    /// At least one sub-predicate must hold (logical OR).
    #[default]
    AnyOf,
    /// Every sub-predicate must hold (logical AND).
    AllOf,
}

impl FilterTest {
    /// Returns the wire attribute value for this combinator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AnyOf => "anyof",
            Self::AllOf => "allof",
        }
    }
}

/// Match kind for a text-match predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchType {
    Equals,
    #[default]
    Contains,
    StartsWith,
    EndsWith,
}

/// A string predicate over a property or parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatch {
    /// Comparison literal.
    pub value: String,
    /// Match kind; defaults to `Contains`.
    pub match_type: MatchType,
    /// Inverts the boolean result when set.
    pub negate: bool,
    /// Collation the comparison runs under; defaults to `i;unicode-casemap`.
    pub collation: Casemap,
}

impl TextMatch {
    /// Creates a text match with an explicit match kind.
    #[must_use]
    pub fn new(value: impl Into<String>, match_type: MatchType) -> Self {
        Self {
            value: value.into(),
            match_type,
            negate: false,
            collation: Casemap::default(),
        }
    }

    /// Creates an `equals` match.
    #[must_use]
    pub fn equals(value: impl Into<String>) -> Self {
        Self::new(value, MatchType::Equals)
    }

    /// Creates a `contains` match (the wire default).
    #[must_use]
    pub fn contains(value: impl Into<String>) -> Self {
        Self::new(value, MatchType::Contains)
    }

    /// Creates a `starts-with` match.
    #[must_use]
    pub fn starts_with(value: impl Into<String>) -> Self {
        Self::new(value, MatchType::StartsWith)
    }

    /// Creates an `ends-with` match.
    #[must_use]
    pub fn ends_with(value: impl Into<String>) -> Self {
        Self::new(value, MatchType::EndsWith)
    }

    /// Inverts the match result.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.negate = true;
        self
    }

    /// Sets the collation.
    #[must_use]
    pub fn with_collation(mut self, collation: Casemap) -> Self {
        self.collation = collation;
        self
    }
}

/// Predicate over one named parameter of a property instance.
///
/// A parameter filter is either an absence-assertion or a
/// presence-assertion, never both; the variant makes the
/// mutual exclusion structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamPredicate {
    /// The named parameter must be absent from the property instance.
    IsNotDefined,
    /// The named parameter must be present and, if a text match is set,
    /// at least one of its values must satisfy it.
    Defined { text_match: Option<TextMatch> },
}

/// A predicate over one named parameter of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamFilter {
    /// Parameter name (matched case-insensitively).
    pub name: String,
    pub predicate: ParamPredicate,
}

impl ParamFilter {
    /// Creates a presence filter without a text match.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            predicate: ParamPredicate::Defined { text_match: None },
        }
    }

    /// Creates an absence filter.
    #[must_use]
    pub fn is_not_defined(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            predicate: ParamPredicate::IsNotDefined,
        }
    }

    /// Sets the text match. Has no effect on an absence filter.
    #[must_use]
    pub fn with_text_match(mut self, text_match: TextMatch) -> Self {
        if let ParamPredicate::Defined { text_match: tm } = &mut self.predicate {
            *tm = Some(text_match);
        }
        self
    }
}

/// Predicate over one named property of a record.
///
/// Same structural mutual exclusion as [`ParamPredicate`]: a property
/// filter asserts absence or presence, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropPredicate {
    /// No property with this name may exist on the record.
    IsNotDefined,
    /// The property must exist and at least one instance must satisfy
    /// the `test` combinator over the child predicates. Zero children
    /// match on mere presence.
    Defined {
        /// Combinator over the text matches and parameter filters;
        /// defaults to `anyof`.
        test: FilterTest,
        text_matches: Vec<TextMatch>,
        param_filters: Vec<ParamFilter>,
    },
}

/// A predicate over one named property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropFilter {
    /// Property name (matched case-insensitively).
    pub name: String,
    pub predicate: PropPredicate,
}

impl PropFilter {
    /// Creates a presence filter with no child predicates.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            predicate: PropPredicate::Defined {
                test: FilterTest::default(),
                text_matches: Vec::new(),
                param_filters: Vec::new(),
            },
        }
    }

    /// Creates an absence filter.
    #[must_use]
    pub fn is_not_defined(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            predicate: PropPredicate::IsNotDefined,
        }
    }

    /// Sets the child combinator. Has no effect on an absence filter.
    #[must_use]
    pub fn with_test(mut self, filter_test: FilterTest) -> Self {
        if let PropPredicate::Defined { test, .. } = &mut self.predicate {
            *test = filter_test;
        }
        self
    }

    /// Adds a text match child. Has no effect on an absence filter.
    #[must_use]
    pub fn with_text_match(mut self, text_match: TextMatch) -> Self {
        if let PropPredicate::Defined { text_matches, .. } = &mut self.predicate {
            text_matches.push(text_match);
        }
        self
    }

    /// Adds a parameter filter child. Has no effect on an absence filter.
    #[must_use]
    pub fn with_param_filter(mut self, param_filter: ParamFilter) -> Self {
        if let PropPredicate::Defined { param_filters, .. } = &mut self.predicate {
            param_filters.push(param_filter);
        }
        self
    }
}

/// Which parts of the address data a report should return.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressDataRequest {
    /// Requested property names; empty means the full record.
    pub props: Vec<String>,
    /// Requests the full record regardless of `props`.
    pub all_prop: bool,
}

impl AddressDataRequest {
    /// Requests the full record.
    #[must_use]
    pub fn full() -> Self {
        Self {
            props: Vec::new(),
            all_prop: true,
        }
    }

    /// Requests specific properties.
    #[must_use]
    pub fn with_props(props: Vec<String>) -> Self {
        Self {
            props,
            all_prop: false,
        }
    }
}

/// An addressbook-query search request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressbookQuery {
    pub data_request: AddressDataRequest,
    /// Ordered property filters.
    pub prop_filters: Vec<PropFilter>,
    /// Top-level combinator over `prop_filters`; defaults to `anyof`.
    pub test: FilterTest,
    /// Result cap; `None` means unlimited.
    pub limit: Option<u32>,
}

impl AddressbookQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property filter.
    #[must_use]
    pub fn with_prop_filter(mut self, prop_filter: PropFilter) -> Self {
        self.prop_filters.push(prop_filter);
        self
    }

    /// Sets the top-level combinator.
    #[must_use]
    pub fn with_test(mut self, test: FilterTest) -> Self {
        self.test = test;
        self
    }

    /// Sets the result cap.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the data selection.
    #[must_use]
    pub fn with_data_request(mut self, data_request: AddressDataRequest) -> Self {
        self.data_request = data_request;
        self
    }
}

/// An addressbook-multiget batch-fetch request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressbookMultiget {
    /// Virtual paths of the requested resources.
    pub paths: Vec<String>,
    pub data_request: AddressDataRequest,
}

impl AddressbookMultiget {
    #[must_use]
    pub fn new(paths: Vec<String>) -> Self {
        Self {
            paths,
            data_request: AddressDataRequest::default(),
        }
    }
}

/// A sync-collection request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncQuery {
    pub data_request: AddressDataRequest,
    /// Opaque token from the previous sync; empty for an initial sync.
    pub sync_token: String,
    /// Result cap; `None` means unlimited.
    pub limit: Option<u32>,
}

/// The result of a sync-collection request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncResponse {
    /// Token to present on the next sync.
    pub sync_token: String,
    /// Objects created or changed since the presented token.
    pub updated: Vec<super::AddressObject>,
    /// Virtual paths deleted since the presented token.
    pub deleted: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_test_defaults_to_anyof() {
        assert_eq!(FilterTest::default(), FilterTest::AnyOf);
        assert_eq!(FilterTest::AllOf.as_str(), "allof");
    }

    #[test]
    fn match_type_defaults_to_contains() {
        assert_eq!(MatchType::default(), MatchType::Contains);
    }

    #[test]
    fn text_match_builder_defaults() {
        let tm = TextMatch::contains("Smith");
        assert_eq!(tm.match_type, MatchType::Contains);
        assert!(!tm.negate);
        assert_eq!(tm.collation, crate::rfc::collation::Casemap::Unicode);
    }

    #[test]
    fn prop_filter_builders() {
        let filter = PropFilter::new("EMAIL")
            .with_test(FilterTest::AllOf)
            .with_text_match(TextMatch::contains("@example.com"));
        match filter.predicate {
            PropPredicate::Defined {
                test, text_matches, ..
            } => {
                assert_eq!(test, FilterTest::AllOf);
                assert_eq!(text_matches.len(), 1);
            }
            PropPredicate::IsNotDefined => panic!("expected presence filter"),
        }
    }

    #[test]
    fn absence_filter_ignores_children() {
        let filter = PropFilter::is_not_defined("NICKNAME").with_text_match(TextMatch::contains("x"));
        assert_eq!(filter.predicate, PropPredicate::IsNotDefined);
    }

    #[test]
    fn query_builder() {
        let query = AddressbookQuery::new()
            .with_prop_filter(PropFilter::new("FN").with_text_match(TextMatch::contains("Smith")))
            .with_limit(50);
        assert_eq!(query.prop_filters.len(), 1);
        assert_eq!(query.limit, Some(50));
        assert_eq!(query.test, FilterTest::AnyOf);
    }
}
