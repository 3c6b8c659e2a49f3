use oxilangtag::LanguageTagParseError;
use oxiri::IriParseError;
use oxrdf::BlankNodeIdParseError;
use std::io;

/// Error returned when a term, CURIE or IRI can't be turned into an absolute IRI.
///
/// This is the only error kind of the engine.
/// It never aborts a parse: depending on where it happens it drops a single triple
/// or the pending triples of a single context node.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct MalformedIriError(#[from] MalformedIriErrorKind);

#[derive(Debug, thiserror::Error)]
enum MalformedIriErrorKind {
    #[error("empty IRI")]
    Empty,
    #[error("can't resolve term {0}")]
    UnresolvableTerm(String),
    #[error("the '_' prefix is reserved for blank nodes: {0}")]
    BlankNodePrefix(String),
    #[error("relative IRI '{0}' is not allowed here")]
    RelativeIri(String),
    #[error("'{0}' is not an absolute IRI")]
    NotAbsolute(String),
    #[error("error while resolving '{iri}' against base '{base}': {error}")]
    InvalidBase {
        base: String,
        iri: String,
        #[source]
        error: IriParseError,
    },
}

impl MalformedIriError {
    pub(crate) fn empty() -> Self {
        Self(MalformedIriErrorKind::Empty)
    }

    pub(crate) fn unresolvable_term(term: impl Into<String>) -> Self {
        Self(MalformedIriErrorKind::UnresolvableTerm(term.into()))
    }

    pub(crate) fn blank_node_prefix(curie: impl Into<String>) -> Self {
        Self(MalformedIriErrorKind::BlankNodePrefix(curie.into()))
    }

    pub(crate) fn relative_iri(iri: impl Into<String>) -> Self {
        Self(MalformedIriErrorKind::RelativeIri(iri.into()))
    }

    pub(crate) fn not_absolute(iri: impl Into<String>) -> Self {
        Self(MalformedIriErrorKind::NotAbsolute(iri.into()))
    }

    pub(crate) fn invalid_base(
        base: impl Into<String>,
        iri: impl Into<String>,
        error: IriParseError,
    ) -> Self {
        Self(MalformedIriErrorKind::InvalidBase {
            base: base.into(),
            iri: iri.into(),
            error,
        })
    }
}

impl From<MalformedIriError> for io::Error {
    #[inline]
    fn from(error: MalformedIriError) -> Self {
        Self::new(io::ErrorKind::InvalidData, error)
    }
}

/// Error raised by [`QuadCollector`](crate::QuadCollector) when a resolved term is not a valid RDF term.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct InvalidTermError(#[from] InvalidTermErrorKind);

#[derive(Debug, thiserror::Error)]
enum InvalidTermErrorKind {
    #[error("invalid IRI '{iri}': {error}")]
    Iri {
        iri: String,
        #[source]
        error: IriParseError,
    },
    #[error("invalid blank node identifier '{id}': {error}")]
    BlankNode {
        id: String,
        #[source]
        error: BlankNodeIdParseError,
    },
    #[error("invalid language tag '{tag}': {error}")]
    LanguageTag {
        tag: String,
        #[source]
        error: LanguageTagParseError,
    },
}

impl InvalidTermError {
    pub(crate) fn iri(iri: impl Into<String>, error: IriParseError) -> Self {
        Self(InvalidTermErrorKind::Iri {
            iri: iri.into(),
            error,
        })
    }

    pub(crate) fn blank_node(id: impl Into<String>, error: BlankNodeIdParseError) -> Self {
        Self(InvalidTermErrorKind::BlankNode {
            id: id.into(),
            error,
        })
    }

    pub(crate) fn language_tag(tag: impl Into<String>, error: LanguageTagParseError) -> Self {
        Self(InvalidTermErrorKind::LanguageTag {
            tag: tag.into(),
            error,
        })
    }
}

impl From<InvalidTermError> for io::Error {
    #[inline]
    fn from(error: InvalidTermError) -> Self {
        Self::new(io::ErrorKind::InvalidData, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MalformedIriError::unresolvable_term("name").to_string(),
            "can't resolve term name"
        );
        assert_eq!(MalformedIriError::empty().to_string(), "empty IRI");
        let error = io::Error::from(MalformedIriError::not_absolute("foo"));
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
    }
}
