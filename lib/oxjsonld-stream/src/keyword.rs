//! JSON-LD keywords and sentinels understood by the context tree.

use oxrdf::vocab::rdf;

pub const ID: &str = "@id";
pub const CONTEXT: &str = "@context";
pub const SET: &str = "@set";
pub const REVERSE: &str = "@reverse";
pub const LANGUAGE: &str = "@language";
pub const FIRST: &str = "@first";
pub const REST: &str = "@rest";
pub const TYPE: &str = "@type";
pub const NIL: &str = "@nil";
pub const VOCAB: &str = "@vocab";

/// Base IRI of a document whose real location is not known yet.
pub const DOC_IRI: &str = "http://doc.iri/#";

/// Language value meaning "no inherited language".
pub const NULL: &str = "null";

/// Returns `true` if the value has the keyword form `@...`.
#[inline]
pub fn is_keyword(value: &str) -> bool {
    value.starts_with('@')
}

/// IRI that a keyword stands for when no scope defines it.
pub(crate) fn builtin_iri_mapping(term: &str) -> Option<&'static str> {
    Some(match term {
        TYPE => rdf::TYPE.as_str(),
        FIRST => rdf::FIRST.as_str(),
        REST => rdf::REST.as_str(),
        NIL => rdf::NIL.as_str(),
        _ => return None,
    })
}

/// Datatype mapping that a keyword has when no scope defines it.
pub(crate) fn builtin_dt_mapping(term: &str) -> Option<&'static str> {
    (term == TYPE).then_some(ID)
}
