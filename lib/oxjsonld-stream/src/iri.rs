//! Restricted IRI grammars and base resolution.
//!
//! The engine does not implement the full RFC 3987 grammar.
//! It recognizes absolute IRIs with three regular expressions and relies on
//! [`oxiri`] for relative resolution, falling back to plain concatenation.

use crate::error::MalformedIriError;
use oxiri::Iri;
use regex::Regex;
use std::sync::LazyLock;

#[expect(clippy::expect_used)]
static ABSOLUTE_HIERARCHICAL_IRI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[a-zA-Z][a-zA-Z0-9+.\-]*:",
        r"/{0,3}",
        r#"(?:[^\s<>"{}|\\^`/?#@]*@)?"#,
        r#"[^\s<>"{}|\\^`/?#:@]*"#,
        r"(?::[0-9]*)?",
        r#"[^\s<>"{}|\\^`?#]*"#,
        r#"(?:\?[^\s<>"{}|\\^`#]*)?"#,
        r#"(?:#[^\s<>"{}|\\^`]*)?$"#,
    ))
    .expect("valid hierarchical IRI regex")
});

#[expect(clippy::expect_used)]
static ABSOLUTE_OPAQUE_IRI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[a-zA-Z][a-zA-Z0-9+.\-]*:[^\s<>"{}|\\^`#/][^\s<>"{}|\\^`#]*$"#)
        .expect("valid opaque IRI regex")
});

#[expect(clippy::expect_used)]
static URN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[uU][rR][nN]:[a-zA-Z0-9\-]{2,32}:\S+$").expect("valid URN regex")
});

/// Returns `true` if `value` is a blank node reference (`_:...`).
#[inline]
pub fn is_blank_node(value: &str) -> bool {
    value.starts_with("_:")
}

/// Returns `true` if `value` matches one of the two absolute IRI grammars.
pub fn is_absolute_iri(value: &str) -> bool {
    ABSOLUTE_HIERARCHICAL_IRI.is_match(value) || ABSOLUTE_OPAQUE_IRI.is_match(value)
}

/// Returns `true` if `value` is a URN (`urn:<nid>:<nss>`).
pub fn is_urn(value: &str) -> bool {
    URN.is_match(value)
}

/// Resolves `iri` against `base`.
///
/// Absolute IRIs and URNs are returned unchanged.
/// Empty values and values starting with `?` are appended to `base` without its trailing `#`.
///
/// ```
/// use oxjsonld_stream::resolve_iri;
///
/// assert_eq!(
///     resolve_iri("http://example.com/a/b", "c")?,
///     "http://example.com/a/c"
/// );
/// assert_eq!(
///     resolve_iri("http://example.com/doc#", "?page=2")?,
///     "http://example.com/doc?page=2"
/// );
/// assert_eq!(resolve_iri("http://example.com/", "urn:isbn:0451450523")?, "urn:isbn:0451450523");
/// # Result::<_, oxjsonld_stream::MalformedIriError>::Ok(())
/// ```
pub fn resolve_iri(base: &str, iri: &str) -> Result<String, MalformedIriError> {
    resolve_iri_with(base, iri, false)
}

pub(crate) fn resolve_iri_with(
    base: &str,
    iri: &str,
    lenient: bool,
) -> Result<String, MalformedIriError> {
    if is_absolute_iri(iri) || is_urn(iri) {
        return Ok(iri.to_owned());
    }
    let resolved = if iri.is_empty() || iri.starts_with('?') {
        format!("{}{iri}", base.strip_suffix('#').unwrap_or(base))
    } else {
        match Iri::parse(base) {
            Ok(base_iri) => match base_iri.resolve(iri) {
                Ok(resolved) => resolved.into_inner(),
                Err(_) if lenient => base_iri.resolve_unchecked(iri).into_inner(),
                Err(error) => {
                    let concatenated = format!("{base}{iri}");
                    if !is_absolute_iri(&concatenated) {
                        return Err(MalformedIriError::invalid_base(base, iri, error));
                    }
                    concatenated
                }
            },
            // The base itself is not a valid IRI, we can only concatenate
            Err(_) => format!("{base}{iri}"),
        }
    };
    if lenient || is_absolute_iri(&resolved) {
        Ok(resolved)
    } else {
        Err(MalformedIriError::not_absolute(resolved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_grammars() {
        assert!(is_absolute_iri("http://example.com/foo?bar#baz"));
        assert!(is_absolute_iri("http://user@example.com:8080/path"));
        assert!(is_absolute_iri("file:///etc/hosts"));
        assert!(is_absolute_iri("mailto:someone@example.com"));
        assert!(is_absolute_iri("ex:1"));
        assert!(!is_absolute_iri("foo"));
        assert!(!is_absolute_iri("/foo"));
        assert!(!is_absolute_iri("1ex:foo"));
        assert!(!is_absolute_iri("http://example.com/a b"));
        assert!(!is_absolute_iri("_:b0"));
    }

    #[test]
    fn test_opaque_grammar() {
        assert!(ABSOLUTE_OPAQUE_IRI.is_match("tag:foo"));
        assert!(!ABSOLUTE_OPAQUE_IRI.is_match("tag:#foo"));
        assert!(!ABSOLUTE_OPAQUE_IRI.is_match("tag:/foo"));
        assert!(!ABSOLUTE_OPAQUE_IRI.is_match("tag:foo#bar"));
    }

    #[test]
    fn test_urn_grammar() {
        assert!(is_urn("urn:issn:1234-5678"));
        assert!(is_urn("URN:isbn:0451450523"));
        assert!(!is_urn("urn:x:foo"));
        assert!(!is_urn("urn:abcdefghijklmnopqrstuvwxyz0123456:foo"));
        assert!(!is_urn("urn:issn:"));
    }

    #[test]
    fn test_resolve_iri() {
        assert_eq!(
            resolve_iri("http://example.com/a/b", "../c").unwrap(),
            "http://example.com/c"
        );
        assert_eq!(
            resolve_iri("http://example.com/a#", "").unwrap(),
            "http://example.com/a"
        );
        assert_eq!(
            resolve_iri("http://example.com/a", "#frag").unwrap(),
            "http://example.com/a#frag"
        );
        assert_eq!(
            resolve_iri("http://doc.iri/#", ".").unwrap(),
            "http://doc.iri/"
        );
    }

    #[test]
    fn test_resolve_iri_against_invalid_base() {
        assert_eq!(
            resolve_iri("http://example.com", "foo").unwrap(),
            "http://example.com/foo"
        );
        resolve_iri("not a base", "foo").unwrap_err();
        assert_eq!(
            resolve_iri_with("not a base", "foo", true).unwrap(),
            "not a basefoo"
        );
    }

    #[test]
    fn test_resolve_iri_falls_back_to_concatenation() {
        assert_eq!(
            resolve_iri("http://example.com/", "foo[1]").unwrap(),
            "http://example.com/foo[1]"
        );
        resolve_iri("http://example.com/", "a b").unwrap_err();
    }
}
