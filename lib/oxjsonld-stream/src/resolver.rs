use crate::error::MalformedIriError;
use crate::iri::{is_absolute_iri, is_blank_node, resolve_iri_with};
use crate::keyword::{LANGUAGE, NULL, builtin_dt_mapping, builtin_iri_mapping, is_keyword};
use crate::node::{ContextNode, NodeId};
use std::iter;

/// Resolves terms, CURIEs and relative IRIs as seen from a given context node.
///
/// Lookups walk up the tree until a node defines the term or a nullified node is reached.
///
/// ```
/// use oxjsonld_stream::{ContextTreeOptions, SinkEvent};
///
/// let mut tree = ContextTreeOptions::new().for_sink(Vec::<SinkEvent>::new());
/// let root = tree.root();
/// tree.set_predicate(root, "foaf");
/// tree.define_iri_mapping_for_predicate(root, Some("http://xmlns.com/foaf/0.1/"));
/// let child = tree.init_child_context(root, None);
/// assert_eq!(
///     tree.resolver(child).resolve_curie_or_iri("foaf:name", true)?,
///     "http://xmlns.com/foaf/0.1/name"
/// );
/// # Result::<_, oxjsonld_stream::MalformedIriError>::Ok(())
/// ```
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    nodes: &'a [ContextNode],
    node: NodeId,
    lenient: bool,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(nodes: &'a [ContextNode], node: NodeId, lenient: bool) -> Self {
        Self {
            nodes,
            node,
            lenient,
        }
    }

    fn current(&self) -> &'a ContextNode {
        &self.nodes[self.node.0]
    }

    /// The nodes whose mappings are visible from the current one, innermost first.
    fn scopes(&self) -> impl Iterator<Item = &'a ContextNode> {
        let nodes = self.nodes;
        let mut next = Some(self.node);
        iter::from_fn(move || {
            let node = &nodes[next?.0];
            next = if node.nullified { None } else { node.parent };
            Some(node)
        })
    }

    /// Resolves `value` to an absolute IRI or a blank node.
    ///
    /// Blank nodes are returned unchanged.
    /// Terms are looked up first, the value is then read as a CURIE or an IRI.
    pub fn resolve(
        &self,
        value: &str,
        ignore_relative_iri: bool,
        use_vocab: bool,
    ) -> Result<String, MalformedIriError> {
        if is_blank_node(value) {
            return Ok(value.into());
        }
        if value.is_empty() {
            return Err(MalformedIriError::empty());
        }
        match self.resolve_mapping(value, use_vocab) {
            Ok(mapping) if !is_keyword(&mapping) => {
                self.resolve_curie_or_iri(&mapping, ignore_relative_iri)
            }
            _ => self.resolve_curie_or_iri(value, ignore_relative_iri),
        }
    }

    /// Returns the IRI mapping of `term`.
    ///
    /// If no scope defines it, `use_vocab` allows expanding terms without `:` with the `@vocab` IRI.
    pub fn resolve_mapping(&self, term: &str, use_vocab: bool) -> Result<String, MalformedIriError> {
        for scope in self.scopes() {
            if let Some(mapping) = scope.iri_mappings.get(term) {
                return mapping
                    .clone()
                    .ok_or_else(|| MalformedIriError::unresolvable_term(term));
            }
        }
        if let Some(iri) = builtin_iri_mapping(term) {
            return Ok(iri.into());
        }
        if use_vocab && !term.contains(':') && !is_keyword(term) {
            if let Some(vocab) = &self.current().vocab {
                return Ok(format!("{vocab}{term}"));
            }
        }
        Err(MalformedIriError::unresolvable_term(term))
    }

    /// Resolves `prefix:suffix` CURIEs, absolute IRIs and, if `ignore_relative_iri` is `false`, relative IRIs.
    ///
    /// The `_` prefix is reserved for blank nodes and always rejected.
    pub fn resolve_curie_or_iri(
        &self,
        curie: &str,
        ignore_relative_iri: bool,
    ) -> Result<String, MalformedIriError> {
        let Some((prefix, suffix)) = curie.split_once(':') else {
            return if ignore_relative_iri {
                Err(MalformedIriError::relative_iri(curie))
            } else {
                self.resolve_iri(curie)
            };
        };
        if suffix.starts_with("//") {
            return self.resolve_iri(curie);
        }
        if prefix == "_" {
            return Err(MalformedIriError::blank_node_prefix(curie));
        }
        if let Ok(mapping) = self.resolve_mapping(prefix, false) {
            return Ok(format!("{mapping}{suffix}"));
        }
        if is_absolute_iri(curie) {
            return Ok(curie.into());
        }
        Err(MalformedIriError::unresolvable_term(curie))
    }

    /// Resolves `iri` against the base of the current node.
    pub fn resolve_iri(&self, iri: &str) -> Result<String, MalformedIriError> {
        resolve_iri_with(&self.current().base, iri, self.lenient)
    }

    pub fn get_dt_mapping(&self, term: &str) -> Option<&'a str> {
        for scope in self.scopes() {
            if let Some(mapping) = scope.dt_mappings.get(term) {
                return mapping.as_deref();
            }
        }
        builtin_dt_mapping(term)
    }

    pub fn get_lang_mapping(&self, term: &str) -> Option<&'a str> {
        self.scopes()
            .find_map(|scope| scope.lang_mappings.get(term))
            .and_then(Option::as_deref)
    }

    /// Picks the language of a plain literal.
    ///
    /// An explicit language wins, the `@language` sentinel asks for the term language mapping
    /// and the scope default language is used otherwise. [`NULL`] means no language.
    pub(crate) fn language<'b>(&self, predicate: &str, language: Option<&'b str>) -> Option<&'b str>
    where
        'a: 'b,
    {
        let language = match language {
            Some(LANGUAGE) => self
                .get_lang_mapping(predicate)
                .or(self.current().lang.as_deref()),
            Some(language) => Some(language),
            None => self.current().lang.as_deref(),
        };
        language.filter(|l| *l != NULL)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ContextTreeOptions, SinkEvent};
    use crate::keyword::{DOC_IRI, ID};

    #[test]
    fn test_urn_is_identity() {
        let tree = ContextTreeOptions::new().for_sink(Vec::<SinkEvent>::new());
        assert_eq!(
            tree.resolver(tree.root())
                .resolve("urn:issn:1234-5678", true, true)
                .unwrap(),
            "urn:issn:1234-5678"
        );
    }

    #[test]
    fn test_blank_node_prefix_is_rejected() {
        let mut tree = ContextTreeOptions::new().for_sink(Vec::<SinkEvent>::new());
        let root = tree.root();
        tree.set_predicate(root, "_");
        tree.define_iri_mapping_for_predicate(root, Some("http://example.com/"));
        let resolver = tree.resolver(root);
        resolver.resolve_curie_or_iri("_:x", true).unwrap_err();
        resolver.resolve_curie_or_iri("_:x", false).unwrap_err();
        assert_eq!(resolver.resolve("_:x", true, true).unwrap(), "_:x");
    }

    #[test]
    fn test_empty_value() {
        let tree = ContextTreeOptions::new().for_sink(Vec::<SinkEvent>::new());
        tree.resolver(tree.root()).resolve("", false, true).unwrap_err();
    }

    #[test]
    fn test_vocab_expansion() {
        let mut tree = ContextTreeOptions::new().for_sink(Vec::<SinkEvent>::new());
        let root = tree.root();
        tree.set_vocab(root, Some("http://schema.org/"));
        let resolver = tree.resolver(root);
        assert_eq!(
            resolver.resolve("name", true, true).unwrap(),
            "http://schema.org/name"
        );
        resolver.resolve("name", true, false).unwrap_err();
        resolver.resolve_mapping("ex:name", true).unwrap_err();
        resolver.resolve_mapping("@id", true).unwrap_err();
    }

    #[test]
    fn test_relative_iri() {
        let mut tree = ContextTreeOptions::new()
            .with_base_iri("http://example.com/dir/doc")
            .unwrap()
            .for_sink(Vec::<SinkEvent>::new());
        let root = tree.root();
        let resolver = tree.resolver(root);
        assert_eq!(
            resolver.resolve("other", false, false).unwrap(),
            "http://example.com/dir/other"
        );
        resolver.resolve("other", true, false).unwrap_err();
        assert_eq!(
            resolver.resolve_curie_or_iri("http://example.org/a", true).unwrap(),
            "http://example.org/a"
        );
        tree.set_base(root, DOC_IRI);
        assert_eq!(
            tree.resolver(root).resolve("?q", false, false).unwrap(),
            "http://doc.iri/?q"
        );
    }

    #[test]
    fn test_term_to_curie_mapping() {
        let mut tree = ContextTreeOptions::new().for_sink(Vec::<SinkEvent>::new());
        let root = tree.root();
        tree.set_predicate(root, "foaf");
        tree.define_iri_mapping_for_predicate(root, Some("http://xmlns.com/foaf/0.1/"));
        tree.set_predicate(root, "name");
        tree.define_iri_mapping_for_predicate(root, Some("foaf:name"));
        tree.set_predicate(root, "ignored");
        tree.define_iri_mapping_for_predicate(root, None);
        let resolver = tree.resolver(root);
        assert_eq!(
            resolver.resolve("name", true, true).unwrap(),
            "http://xmlns.com/foaf/0.1/name"
        );
        resolver.resolve("ignored", true, true).unwrap_err();
        assert_eq!(resolver.get_dt_mapping("name"), None);
        assert_eq!(resolver.get_dt_mapping("@type"), Some(ID));
    }

    #[test]
    fn test_keyword_builtins() {
        let tree = ContextTreeOptions::new().for_sink(Vec::<SinkEvent>::new());
        let resolver = tree.resolver(tree.root());
        assert_eq!(
            resolver.resolve("@type", true, true).unwrap(),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type"
        );
        assert_eq!(
            resolver.resolve("@nil", false, false).unwrap(),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil"
        );
        resolver.resolve("@id", true, true).unwrap_err();
    }

    #[test]
    fn test_language_precedence() {
        let mut tree = ContextTreeOptions::new().for_sink(Vec::<SinkEvent>::new());
        let root = tree.root();
        tree.set_lang(root, Some("en"));
        tree.set_predicate(root, "label");
        tree.define_lang_mapping_for_predicate(root, Some("de"));
        tree.set_predicate(root, "code");
        tree.define_lang_mapping_for_predicate(root, Some("null"));
        let resolver = tree.resolver(root);
        assert_eq!(resolver.language("label", Some("fr")), Some("fr"));
        assert_eq!(resolver.language("label", Some("@language")), Some("de"));
        assert_eq!(resolver.language("code", Some("@language")), None);
        assert_eq!(resolver.language("other", Some("@language")), Some("en"));
        assert_eq!(resolver.language("label", None), Some("en"));
    }
}
