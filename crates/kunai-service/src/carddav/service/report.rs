//! `CardDAV` REPORT service layer.
//!
//! Business logic for addressbook-query, addressbook-multiget, and
//! sync-collection reports over candidate address objects. The
//! candidates themselves come from whatever store the caller uses;
//! this layer only selects and orders them.

use kunai_rfc::rfc::carddav::filter::match_query;
use kunai_rfc::rfc::carddav::{
    AddressObject, AddressbookMultiget, AddressbookQuery, SyncQuery, SyncResponse,
};

/// Result of an addressbook-multiget resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultigetOutcome {
    /// Objects resolved by path, in request order.
    pub found: Vec<AddressObject>,
    /// Requested paths that did not resolve.
    pub missing: Vec<String>,
}

/// ## Summary
/// Executes an addressbook-query report over candidate address objects.
///
/// Candidates are evaluated in lexicographic path order (the stable
/// enumeration order) and evaluation stops early once the query limit
/// has been reached.
#[must_use]
pub fn execute_addressbook_query(
    query: &AddressbookQuery,
    candidates: &[AddressObject],
) -> Vec<AddressObject> {
    tracing::debug!(
        candidate_count = candidates.len(),
        prop_filter_count = query.prop_filters.len(),
        limit = ?query.limit,
        "Executing addressbook-query"
    );

    let mut ordered: Vec<&AddressObject> = candidates.iter().collect();
    ordered.sort_by(|a, b| a.path.cmp(&b.path));

    let limit = query
        .limit
        .map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));

    let mut matched = Vec::new();
    for object in ordered {
        if matched.len() >= limit {
            break;
        }
        if match_query(query, &object.card) {
            matched.push(object.clone());
        }
    }

    tracing::debug!(matched_count = matched.len(), "Addressbook-query complete");
    matched
}

/// ## Summary
/// Executes an addressbook-multiget report.
///
/// Each requested path is resolved against the candidates; paths that do
/// not resolve are reported in the outcome's `missing` list rather than
/// as errors, so one stale path cannot fail the whole batch.
#[must_use]
pub fn execute_addressbook_multiget(
    multiget: &AddressbookMultiget,
    candidates: &[AddressObject],
) -> MultigetOutcome {
    let mut outcome = MultigetOutcome::default();
    for path in &multiget.paths {
        match candidates.iter().find(|o| o.path == *path) {
            Some(object) => outcome.found.push(object.clone()),
            None => {
                tracing::trace!(path = %path, "Multiget path did not resolve");
                outcome.missing.push(path.clone());
            }
        }
    }
    tracing::debug!(
        found_count = outcome.found.len(),
        missing_count = outcome.missing.len(),
        "Addressbook-multiget complete"
    );
    outcome
}

/// ## Summary
/// Assembles a sync-collection response.
///
/// Updated objects are ordered by path and truncated to the query limit;
/// deleted paths are always carried in full.
#[must_use]
pub fn build_sync_response(
    query: &SyncQuery,
    sync_token: impl Into<String>,
    mut updated: Vec<AddressObject>,
    deleted: Vec<String>,
) -> SyncResponse {
    updated.sort_by(|a, b| a.path.cmp(&b.path));
    if let Some(limit) = query.limit {
        updated.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }
    SyncResponse {
        sync_token: sync_token.into(),
        updated,
        deleted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kunai_rfc::rfc::carddav::{PropFilter, TextMatch};
    use kunai_rfc::rfc::vcard::{VCard, VCardProperty};

    fn object(path: &str, email: &str) -> AddressObject {
        let card = VCard::new()
            .with_property(VCardProperty::new("FN", path))
            .with_property(VCardProperty::new("EMAIL", email));
        AddressObject::new(path, Utc::now(), format!("\"{path}\""), card)
    }

    fn candidates() -> Vec<AddressObject> {
        // Deliberately out of path order
        vec![
            object("/contacts/d.vcf", "d@example.com"),
            object("/contacts/b.vcf", "b@example.com"),
            object("/contacts/a.vcf", "a@example.com"),
            object("/contacts/c.vcf", "c@other.org"),
        ]
    }

    #[test]
    fn query_returns_matches_in_path_order() {
        let query = AddressbookQuery::new().with_prop_filter(
            PropFilter::new("EMAIL").with_text_match(TextMatch::contains("example.com")),
        );
        let matched = execute_addressbook_query(&query, &candidates());
        let paths: Vec<&str> = matched.iter().map(|o| o.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/contacts/a.vcf", "/contacts/b.vcf", "/contacts/d.vcf"]
        );
    }

    #[test]
    fn limit_caps_results_in_stable_order() {
        // Four matching candidates, limit two: exactly the first two by path
        let query = AddressbookQuery::new().with_limit(2);
        let matched = execute_addressbook_query(&query, &candidates());
        let paths: Vec<&str> = matched.iter().map(|o| o.path.as_str()).collect();
        assert_eq!(paths, vec!["/contacts/a.vcf", "/contacts/b.vcf"]);
    }

    #[test]
    fn unlimited_query_returns_everything() {
        let query = AddressbookQuery::new();
        assert_eq!(execute_addressbook_query(&query, &candidates()).len(), 4);
    }

    #[test]
    fn multiget_reports_missing_paths() {
        let multiget = AddressbookMultiget::new(vec![
            "/contacts/b.vcf".to_string(),
            "/contacts/nope.vcf".to_string(),
            "/contacts/a.vcf".to_string(),
        ]);
        let outcome = execute_addressbook_multiget(&multiget, &candidates());
        let found: Vec<&str> = outcome.found.iter().map(|o| o.path.as_str()).collect();
        assert_eq!(found, vec!["/contacts/b.vcf", "/contacts/a.vcf"]);
        assert_eq!(outcome.missing, vec!["/contacts/nope.vcf".to_string()]);
    }

    #[test]
    fn sync_response_orders_and_truncates_updated() {
        let query = SyncQuery {
            limit: Some(2),
            ..SyncQuery::default()
        };
        let response = build_sync_response(
            &query,
            "sync-2",
            candidates(),
            vec!["/contacts/gone.vcf".to_string()],
        );
        let paths: Vec<&str> = response.updated.iter().map(|o| o.path.as_str()).collect();
        assert_eq!(paths, vec!["/contacts/a.vcf", "/contacts/b.vcf"]);
        assert_eq!(response.sync_token, "sync-2");
        assert_eq!(response.deleted, vec!["/contacts/gone.vcf".to_string()]);
    }
}
