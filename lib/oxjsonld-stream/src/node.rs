use crate::state::SafetyState;
use std::collections::HashMap;
use std::fmt;

/// Index of a [`ContextNode`] inside its [`ContextTree`](crate::ContextTree).
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Term mapping table. `None` values are explicit `null` definitions: they stop the lookup.
pub(crate) type MappingTable = HashMap<String, Option<String>>;

pub(crate) struct PendingNonLiteral {
    pub predicate: String,
    pub object: String,
}

pub(crate) struct PendingPlainLiteral {
    pub predicate: String,
    pub value: String,
    pub language: Option<String>,
}

pub(crate) struct PendingTypedLiteral {
    pub predicate: String,
    pub value: String,
    pub datatype: String,
}

/// A lexical scope of the document: a JSON object, array or graph entry.
///
/// Nodes are owned by a [`ContextTree`](crate::ContextTree) and modified through it.
#[expect(clippy::struct_excessive_bools)]
pub struct ContextNode {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) base: String,
    pub(crate) graph: Option<String>,
    pub(crate) subject: String,
    pub(crate) predicate: String,
    pub(crate) vocab: Option<String>,
    pub(crate) lang: Option<String>,
    pub(crate) list_tail: String,
    pub(crate) parsing_array: bool,
    pub(crate) container_type: Option<String>,
    pub(crate) nullified: bool,
    pub(crate) has_props: bool,
    pub(crate) reversed: bool,
    pub(crate) wrapped: bool,
    pub(crate) index: bool,
    pub(crate) explicit_id: bool,
    pub(crate) detached: bool,
    pub(crate) state: SafetyState,
    pub(crate) iri_mappings: MappingTable,
    pub(crate) dt_mappings: MappingTable,
    pub(crate) lang_mappings: MappingTable,
    pub(crate) non_literals: Vec<PendingNonLiteral>,
    pub(crate) plain_literals: Vec<PendingPlainLiteral>,
    pub(crate) typed_literals: Vec<PendingTypedLiteral>,
}

impl ContextNode {
    pub(crate) fn new(
        parent: Option<NodeId>,
        base: String,
        subject: String,
        state: SafetyState,
    ) -> Self {
        Self {
            parent,
            children: Vec::new(),
            base,
            graph: None,
            list_tail: subject.clone(),
            subject,
            predicate: String::new(),
            vocab: None,
            lang: None,
            parsing_array: false,
            container_type: None,
            nullified: false,
            has_props: false,
            reversed: false,
            wrapped: false,
            index: false,
            explicit_id: false,
            detached: false,
            state,
            iri_mappings: MappingTable::new(),
            dt_mappings: MappingTable::new(),
            lang_mappings: MappingTable::new(),
            non_literals: Vec::new(),
            plain_literals: Vec::new(),
            typed_literals: Vec::new(),
        }
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The children that have not been flushed yet.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[inline]
    pub fn graph(&self) -> Option<&str> {
        self.graph.as_deref()
    }

    /// The subject of the triples added to this node, a blank node until an `@id` is declared.
    #[inline]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The key currently processed in this scope.
    #[inline]
    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    #[inline]
    pub fn vocab(&self) -> Option<&str> {
        self.vocab.as_deref()
    }

    #[inline]
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// The last cell of the list built in this scope.
    #[inline]
    pub fn list_tail(&self) -> &str {
        &self.list_tail
    }

    #[inline]
    pub fn is_parsing_array(&self) -> bool {
        self.parsing_array
    }

    #[inline]
    pub fn container_type(&self) -> Option<&str> {
        self.container_type.as_deref()
    }

    /// Set by `@context: null`: lookups stop at this node.
    #[inline]
    pub fn is_nullified(&self) -> bool {
        self.nullified
    }

    #[inline]
    pub fn has_props(&self) -> bool {
        self.has_props
    }

    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    #[inline]
    pub fn is_wrapped(&self) -> bool {
        self.wrapped
    }

    #[inline]
    pub fn is_index(&self) -> bool {
        self.index
    }

    /// `true` if the subject comes from an `@id` entry.
    #[inline]
    pub fn has_explicit_id(&self) -> bool {
        self.explicit_id
    }

    /// `true` once the node has been flushed or merged into another one.
    #[inline]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    #[inline]
    pub fn state(&self) -> SafetyState {
        self.state
    }

    /// The IRI mapping defined for `term` in this very scope.
    ///
    /// `Some(None)` is an explicit `null` mapping.
    #[inline]
    pub fn local_iri_mapping(&self, term: &str) -> Option<Option<&str>> {
        self.iri_mappings.get(term).map(Option::as_deref)
    }

    /// Number of triples waiting for the node to become safe.
    #[inline]
    pub fn pending_triple_count(&self) -> usize {
        self.non_literals.len() + self.plain_literals.len() + self.typed_literals.len()
    }

    pub(crate) fn clear_mappings(&mut self) {
        self.iri_mappings.clear();
        self.dt_mappings.clear();
        self.lang_mappings.clear();
    }
}

impl fmt::Debug for ContextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextNode")
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("subject", &self.subject)
            .field("predicate", &self.predicate)
            .field("graph", &self.graph)
            .field("state", &self.state)
            .field("pending", &self.pending_triple_count())
            .finish_non_exhaustive()
    }
}
