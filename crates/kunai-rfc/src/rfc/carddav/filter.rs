//! `CardDAV` filter evaluation for addressbook-query reports.
//!
//! Implements filter logic for property-filter, parameter-filter, and
//! text-match predicates against parsed vCard records (RFC 6352 §10.5).
//!
//! Evaluation is total and side-effect-free: absence of data and
//! mismatched predicates are boolean non-matches, never errors.

use crate::rfc::carddav::query::{
    AddressbookQuery, FilterTest, MatchType, ParamFilter, ParamPredicate, PropFilter,
    PropPredicate, TextMatch,
};
use crate::rfc::vcard::{VCard, VCardProperty};

/// ## Summary
/// Decides whether a record matches an addressbook-query.
///
/// Property-filter results are combined with the query's top-level
/// combinator. A query with no property filters matches every record,
/// under either combinator; this is fixed behavior, not an artifact of
/// vacuous iteration.
#[must_use]
pub fn match_query(query: &AddressbookQuery, card: &VCard) -> bool {
    if query.prop_filters.is_empty() {
        return true;
    }
    match query.test {
        FilterTest::AnyOf => query.prop_filters.iter().any(|f| match_prop_filter(f, card)),
        FilterTest::AllOf => query.prop_filters.iter().all(|f| match_prop_filter(f, card)),
    }
}

/// ## Summary
/// Evaluates a single property filter against a record.
///
/// An absence filter matches when no instance of the named property
/// exists. A presence filter requires at least one instance; a repeated
/// property matches if any one instance satisfies the combinator over
/// the filter's text-match and parameter-filter children. A presence
/// filter with no children matches on mere presence.
#[must_use]
pub fn match_prop_filter(filter: &PropFilter, card: &VCard) -> bool {
    let mut instances = card.properties_named(&filter.name).peekable();
    match &filter.predicate {
        PropPredicate::IsNotDefined => instances.peek().is_none(),
        PropPredicate::Defined {
            test,
            text_matches,
            param_filters,
        } => {
            if instances.peek().is_none() {
                return false;
            }
            if text_matches.is_empty() && param_filters.is_empty() {
                return true;
            }
            instances.any(|prop| match_instance(*test, text_matches, param_filters, prop))
        }
    }
}

/// Evaluates the child predicates of a presence filter against one
/// property instance.
fn match_instance(
    test: FilterTest,
    text_matches: &[TextMatch],
    param_filters: &[ParamFilter],
    prop: &VCardProperty,
) -> bool {
    let mut results = text_matches
        .iter()
        .map(|tm| match_text(tm, &prop.value))
        .chain(param_filters.iter().map(|pf| match_param_filter(pf, prop)));
    match test {
        FilterTest::AnyOf => results.any(|matched| matched),
        FilterTest::AllOf => results.all(|matched| matched),
    }
}

/// ## Summary
/// Evaluates a parameter filter against one property instance.
///
/// An absence filter matches when the named parameter is missing. A
/// presence filter requires the parameter; with a text match set, any
/// of the parameter's values may satisfy it (vCard parameters are
/// multi-valued, e.g. `TYPE=home,work`).
#[must_use]
pub fn match_param_filter(filter: &ParamFilter, prop: &VCardProperty) -> bool {
    let param = prop.get_param(&filter.name);
    match &filter.predicate {
        ParamPredicate::IsNotDefined => param.is_none(),
        ParamPredicate::Defined { text_match } => {
            let Some(param) = param else {
                return false;
            };
            match text_match {
                None => true,
                Some(tm) => param.values.iter().any(|v| match_text(tm, v)),
            }
        }
    }
}

/// ## Summary
/// Evaluates a text match against a candidate value.
///
/// Both sides are folded under the match's collation before comparison;
/// `negate` inverts the result.
#[must_use]
pub fn match_text(text_match: &TextMatch, value: &str) -> bool {
    let haystack = text_match.collation.fold(value);
    let needle = text_match.collation.fold(&text_match.value);
    let matched = match text_match.match_type {
        MatchType::Equals => haystack == needle,
        MatchType::Contains => haystack.contains(&needle),
        MatchType::StartsWith => haystack.starts_with(&needle),
        MatchType::EndsWith => haystack.ends_with(&needle),
    };
    matched != text_match.negate
}
