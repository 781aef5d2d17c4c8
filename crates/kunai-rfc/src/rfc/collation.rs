//! RFC 4790 collation support for `CardDAV` text matching.
//!
//! A text-match element selects a collation by identifier; per RFC 6352
//! §10.5.1 the default is `i;unicode-casemap`.

use icu::casemap::CaseMapper;
use thiserror::Error;

/// Error type for collation selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollationError {
    /// The requested collation is not supported by the server.
    ///
    /// The transport layer must report this as a
    /// `CARDDAV:supported-collation` precondition failure (RFC 6352 §8.3.1).
    #[error("unsupported collation: {0}")]
    UnsupportedCollation(String),
}

/// Supported casemap modes for text matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Casemap {
    /// Case-sensitive (`i;octet`).
    Octet,
    /// ASCII-only casemap (`i;ascii-casemap`).
    Ascii,
    /// Unicode casemap (`i;unicode-casemap`), the RFC 6352 default.
    #[default]
    Unicode,
}

impl Casemap {
    /// Converts a wire collation identifier to a `Casemap`.
    ///
    /// An absent identifier selects the default `i;unicode-casemap`.
    ///
    /// ## Errors
    /// Returns [`CollationError::UnsupportedCollation`] if the collation is unknown.
    pub fn from_collation(collation: Option<&str>) -> Result<Self, CollationError> {
        match collation {
            Some("i;octet") => Ok(Self::Octet),
            Some("i;unicode-casemap") | None => Ok(Self::Unicode),
            Some("i;ascii-casemap") => Ok(Self::Ascii),
            Some(unsupported) => Err(CollationError::UnsupportedCollation(unsupported.to_owned())),
        }
    }

    /// Returns the wire identifier for this casemap.
    #[must_use]
    pub const fn as_collation(self) -> &'static str {
        match self {
            Self::Octet => "i;octet",
            Self::Ascii => "i;ascii-casemap",
            Self::Unicode => "i;unicode-casemap",
        }
    }

    /// Returns whether comparisons under this casemap are case-sensitive.
    #[must_use]
    pub const fn is_case_sensitive(self) -> bool {
        matches!(self, Self::Octet)
    }

    /// ## Summary
    /// Folds text for comparison under this casemap.
    ///
    /// For `i;unicode-casemap`, uses ICU case folding per RFC 4790, which
    /// differs from simple lowercasing in important ways:
    /// - German `ß` folds to `ss`
    /// - Greek final sigma `ς` and regular sigma `σ` fold to the same value
    ///
    /// For `i;ascii-casemap`, only ASCII letters are folded (RFC 4790
    /// §9.2.1; non-ASCII characters like `ß` are left unchanged). For
    /// `i;octet`, the text is returned as-is.
    #[must_use]
    pub fn fold(self, text: &str) -> String {
        match self {
            Self::Octet => text.to_owned(),
            Self::Ascii => text.to_ascii_lowercase(),
            Self::Unicode => CaseMapper::new().fold_string(text).into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_unicode_casemap_basic() {
        assert_eq!(Casemap::Unicode.fold("Hello World"), "hello world");
    }

    #[test]
    fn fold_unicode_casemap_german_eszett() {
        // German ß folds to ss, so "STRASSE" and "Straße" compare equal
        assert_eq!(Casemap::Unicode.fold("Straße"), "strasse");
        assert_eq!(
            Casemap::Unicode.fold("STRASSE"),
            Casemap::Unicode.fold("Straße")
        );
    }

    #[test]
    fn fold_unicode_casemap_greek_sigma() {
        assert_eq!(Casemap::Unicode.fold("Σ"), Casemap::Unicode.fold("σ"));
        assert_eq!(Casemap::Unicode.fold("ς"), Casemap::Unicode.fold("σ"));
    }

    #[test]
    fn fold_ascii_casemap_leaves_non_ascii() {
        // RFC 4790 §9.2.1: only ASCII letters are converted
        assert_eq!(Casemap::Ascii.fold("Straße"), "straße");
        assert_eq!(Casemap::Ascii.fold("Hello World"), "hello world");
    }

    #[test]
    fn fold_octet_preserves_case() {
        assert_eq!(Casemap::Octet.fold("Hello World"), "Hello World");
        assert_eq!(Casemap::Octet.fold("Straße"), "Straße");
    }

    #[test]
    fn from_collation_defaults_to_unicode() {
        assert_eq!(Casemap::from_collation(None), Ok(Casemap::Unicode));
    }

    #[test]
    fn from_collation_known_identifiers() {
        assert_eq!(Casemap::from_collation(Some("i;octet")), Ok(Casemap::Octet));
        assert_eq!(
            Casemap::from_collation(Some("i;ascii-casemap")),
            Ok(Casemap::Ascii)
        );
        assert_eq!(
            Casemap::from_collation(Some("i;unicode-casemap")),
            Ok(Casemap::Unicode)
        );
    }

    #[test]
    fn from_collation_rejects_unknown() {
        let result = Casemap::from_collation(Some("i;basic"));
        assert_eq!(
            result,
            Err(CollationError::UnsupportedCollation("i;basic".to_string()))
        );
    }

    #[test]
    fn case_sensitivity() {
        assert!(Casemap::Octet.is_case_sensitive());
        assert!(!Casemap::Ascii.is_case_sensitive());
        assert!(!Casemap::Unicode.is_case_sensitive());
    }
}
