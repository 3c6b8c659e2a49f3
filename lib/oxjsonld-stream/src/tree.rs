use crate::bnode::BlankNodeAllocator;
use crate::error::MalformedIriError;
use crate::keyword::{CONTEXT, FIRST, ID, LANGUAGE, REST, REVERSE, SET, TYPE, VOCAB, is_keyword};
use crate::node::{
    ContextNode, NodeId, PendingNonLiteral, PendingPlainLiteral, PendingTypedLiteral,
};
use crate::resolver::Resolver;
use crate::sink::QuadSink;
use crate::state::SafetyState;
use std::mem::take;
use tracing::{debug, trace, warn};

/// Counters of the data lost during a parse.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct DropStatistics {
    /// Nodes that never became safe before the end of the document.
    pub dropped_nodes: usize,
    /// Triples still queued in unflushed nodes at the end of the document.
    pub dropped_triples: usize,
    /// Triples lost because one of their IRIs could not be resolved.
    pub malformed_triples: usize,
}

/// The tree of lexical scopes of a JSON-LD document being converted to RDF.
///
/// An external driver walks the JSON document and calls the tree methods:
/// it creates a child context per nested object, array or graph,
/// defines term mappings, adds triples and declares what is known about each node with [`update_state`](Self::update_state).
///
/// Triples added to a node are queued until the node is [safe](SafetyState::SAFE_TO_SINK_TRIPLES):
/// its `@id` and its `@context` are known and its parent is safe.
/// They are then resolved and handed to the [`QuadSink`].
///
/// ```
/// use oxjsonld_stream::{ContextTreeOptions, SafetyState, SinkEvent};
///
/// let mut tree = ContextTreeOptions::new().for_sink(Vec::<SinkEvent>::new());
/// let child = tree.init_child_context(tree.root(), None);
/// tree.set_predicate(child, "@id");
/// tree.id(child, "http://example.com/1");
/// tree.add_non_literal(child, "http://example.com/knows", "http://example.com/2");
/// assert!(tree.sink().is_empty()); // the context of the node might still change
///
/// tree.update_state(child, SafetyState::CONTEXT_DECLARED);
/// assert_eq!(
///     tree.sink(),
///     &[
///         SinkEvent::BeginDocument("http://example.com/1".into()),
///         SinkEvent::NonLiteral {
///             subject: "http://example.com/1".into(),
///             predicate: "http://example.com/knows".into(),
///             object: "http://example.com/2".into(),
///             graph: None,
///         },
///         SinkEvent::EndDocument("http://example.com/1".into()),
///     ]
/// );
/// ```
pub struct ContextTree<S> {
    nodes: Vec<ContextNode>,
    allocator: BlankNodeAllocator,
    sink: S,
    lenient: bool,
    flush_pending_on_finish: bool,
    statistics: DropStatistics,
}

impl<S: QuadSink> ContextTree<S> {
    /// Creates a tree with only the root context, already safe.
    ///
    /// [`ContextTreeOptions::for_sink`](crate::ContextTreeOptions::for_sink) allows more configuration.
    pub fn new(sink: S, allocator: BlankNodeAllocator) -> Self {
        Self::with_options(sink, allocator, false, false)
    }

    pub(crate) fn with_options(
        sink: S,
        allocator: BlankNodeAllocator,
        lenient: bool,
        flush_pending_on_finish: bool,
    ) -> Self {
        let root = ContextNode::new(
            None,
            allocator.document_iri().into(),
            ".".into(),
            SafetyState::SAFE_TO_SINK_TRIPLES,
        );
        Self {
            nodes: vec![root],
            allocator,
            sink,
            lenient,
            flush_pending_on_finish,
            statistics: DropStatistics::default(),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Panics if the node does not belong to this tree.
    #[inline]
    pub fn node(&self, node: NodeId) -> &ContextNode {
        &self.nodes[node.0]
    }

    #[inline]
    fn node_mut(&mut self, node: NodeId) -> &mut ContextNode {
        &mut self.nodes[node.0]
    }

    /// A [`Resolver`] seeing the mappings visible from `node`.
    #[inline]
    pub fn resolver(&self, node: NodeId) -> Resolver<'_> {
        Resolver::new(&self.nodes, node, self.lenient)
    }

    #[inline]
    pub fn allocator(&self) -> &BlankNodeAllocator {
        &self.allocator
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[inline]
    pub fn statistics(&self) -> DropStatistics {
        self.statistics
    }

    /// Ends the parse and returns the sink.
    ///
    /// Nodes that never became safe are dropped and counted in the returned statistics,
    /// unless [`flush_pending_on_finish`](crate::ContextTreeOptions::flush_pending_on_finish) is set:
    /// they are then flushed, innermost first.
    pub fn finish(mut self) -> (S, DropStatistics) {
        for index in (0..self.nodes.len()).rev() {
            let node = NodeId(index);
            if self.nodes[index].detached {
                continue;
            }
            if self.flush_pending_on_finish {
                self.sink_unsafe_triples(node);
                continue;
            }
            let pending = self.nodes[index].pending_triple_count();
            if !self.nodes[index].state.is_safe() {
                self.statistics.dropped_nodes += 1;
            }
            self.statistics.dropped_triples += pending;
        }
        if self.statistics.dropped_nodes > 0 || self.statistics.dropped_triples > 0 {
            warn!(
                nodes = self.statistics.dropped_nodes,
                triples = self.statistics.dropped_triples,
                "dropping context nodes that never became safe"
            );
        }
        (self.sink, self.statistics)
    }

    /// Creates a new scope nested in `parent`.
    ///
    /// The child gets a fresh blank node as subject and a snapshot of the parent base, language, graph and vocabulary.
    pub fn init_child_context(&mut self, parent: NodeId, graph_override: Option<&str>) -> NodeId {
        let subject = self.allocator.create_bnode(false);
        let parent_node = self.node(parent);
        let state = if parent_node.state.is_safe() {
            SafetyState::PARENT_SAFE
        } else {
            SafetyState::UNSAFE
        };
        let mut child = ContextNode::new(Some(parent), parent_node.base.clone(), subject, state);
        child.lang.clone_from(&parent_node.lang);
        child.vocab.clone_from(&parent_node.vocab);
        child.graph = match graph_override {
            Some(graph) => Some(graph.into()),
            None => parent_node.graph.clone(),
        };
        let child_id = NodeId(self.nodes.len());
        self.nodes.push(child);
        self.node_mut(parent).children.push(child_id);
        trace!(node = %child_id, parent = %parent, "new context node");
        child_id
    }

    /// Applies `@context: null`: the node stops inheriting the parent definitions.
    pub fn nullify(&mut self, node: NodeId) {
        let document_iri = self.allocator.document_iri().to_owned();
        let node = self.node_mut(node);
        node.clear_mappings();
        node.lang = None;
        node.nullified = true;
        node.base = document_iri;
    }

    /// Sets the key currently processed by the node.
    pub fn set_predicate(&mut self, node: NodeId, predicate: impl Into<String>) {
        self.node_mut(node).predicate = predicate.into();
    }

    /// Declares the `@id` of the node and marks it [`ID_DECLARED`](SafetyState::ID_DECLARED).
    pub fn id(&mut self, node: NodeId, value: impl Into<String>) {
        let value = value.into();
        let context_node = self.node_mut(node);
        if context_node.list_tail == context_node.subject {
            context_node.list_tail.clone_from(&value);
        }
        context_node.subject = value;
        context_node.explicit_id = true;
        self.update_state(node, SafetyState::ID_DECLARED);
    }

    /// Sets the subject without declaring an `@id`.
    pub fn set_subject(&mut self, node: NodeId, subject: impl Into<String>) {
        self.node_mut(node).subject = subject.into();
    }

    pub fn set_base(&mut self, node: NodeId, base: impl Into<String>) {
        self.node_mut(node).base = base.into();
    }

    pub fn set_vocab(&mut self, node: NodeId, vocab: Option<&str>) {
        self.node_mut(node).vocab = vocab.map(Into::into);
    }

    pub fn set_lang(&mut self, node: NodeId, lang: Option<&str>) {
        self.node_mut(node).lang = lang.map(Into::into);
    }

    pub fn set_graph(&mut self, node: NodeId, graph: Option<&str>) {
        self.node_mut(node).graph = graph.map(Into::into);
    }

    /// Makes the node emit its non-literal triples with subject and object swapped (`@reverse`).
    pub fn set_reversed(&mut self, node: NodeId, reversed: bool) {
        self.node_mut(node).reversed = reversed;
    }

    pub fn set_has_props(&mut self, node: NodeId, has_props: bool) {
        self.node_mut(node).has_props = has_props;
    }

    pub fn set_wrapped(&mut self, node: NodeId, wrapped: bool) {
        self.node_mut(node).wrapped = wrapped;
    }

    pub fn set_index(&mut self, node: NodeId, index: bool) {
        self.node_mut(node).index = index;
    }

    pub fn set_parsing_array(&mut self, node: NodeId, parsing_array: bool) {
        self.node_mut(node).parsing_array = parsing_array;
    }

    pub fn set_container_type(&mut self, node: NodeId, container_type: Option<&str>) {
        self.node_mut(node).container_type = container_type.map(Into::into);
    }

    /// Changes the document IRI that nullified contexts use as base.
    pub fn set_document_iri(&mut self, document_iri: impl Into<String>) {
        self.allocator.set_document_iri(document_iri);
    }

    /// Maps the current predicate of the node to `value`.
    ///
    /// Bare terms are expanded with the node vocabulary.
    /// Explicit `null` datatype and language mappings are added if missing
    /// so that lookups of the predicate stop at this node.
    pub fn define_iri_mapping_for_predicate(&mut self, node: NodeId, value: Option<&str>) {
        let node = self.node_mut(node);
        let value = value.map(|value| match &node.vocab {
            Some(vocab) if !value.contains(':') && !is_keyword(value) => {
                format!("{vocab}{value}")
            }
            _ => value.to_owned(),
        });
        let predicate = node.predicate.clone();
        node.dt_mappings.entry(predicate.clone()).or_insert(None);
        node.lang_mappings.entry(predicate.clone()).or_insert(None);
        node.iri_mappings.insert(predicate, value);
    }

    pub fn define_dt_mapping_for_predicate(&mut self, node: NodeId, value: Option<&str>) {
        let node = self.node_mut(node);
        node.dt_mappings
            .insert(node.predicate.clone(), value.map(Into::into));
    }

    pub fn define_lang_mapping_for_predicate(&mut self, node: NodeId, value: Option<&str>) {
        let node = self.node_mut(node);
        node.lang_mappings
            .insert(node.predicate.clone(), value.map(Into::into));
    }

    pub fn get_dt_mapping(&self, node: NodeId, term: &str) -> Option<&str> {
        self.resolver(node).get_dt_mapping(term)
    }

    pub fn get_lang_mapping(&self, node: NodeId, term: &str) -> Option<&str> {
        self.resolver(node).get_lang_mapping(term)
    }

    /// Adds `flag` to the node state.
    ///
    /// When the node becomes safe its children are told that their parent is safe
    /// and, if none of them is left, the node is flushed.
    pub fn update_state(&mut self, node: NodeId, flag: SafetyState) {
        let context_node = self.node_mut(node);
        let was_safe = context_node.state.is_safe();
        context_node.state |= flag;
        trace!(node = %node, state = %context_node.state, "state updated");
        if was_safe || !context_node.state.is_safe() {
            return;
        }
        for child in context_node.children.clone() {
            self.update_state(child, SafetyState::PARENT_SAFE);
        }
        self.flush_if_ready(node);
    }

    pub fn add_non_literal(&mut self, node: NodeId, predicate: &str, object: &str) {
        if let Some((parent, predicate)) = self.set_target(node, predicate) {
            return self.add_non_literal(parent, &predicate, object);
        }
        if self.node(node).state.is_safe() {
            let subject = self.node(node).subject.clone();
            self.emit_now(node, &subject, |tree, subject, graph| {
                tree.emit_non_literal(node, subject, graph, predicate, object)
            });
        } else {
            self.node_mut(node).non_literals.push(PendingNonLiteral {
                predicate: predicate.into(),
                object: object.into(),
            });
        }
    }

    /// Adds a string value.
    ///
    /// `language` might be the `@language` keyword to use the language mapping of the predicate.
    pub fn add_plain_literal(
        &mut self,
        node: NodeId,
        predicate: &str,
        value: &str,
        language: Option<&str>,
    ) {
        if let Some((parent, predicate)) = self.set_target(node, predicate) {
            return self.add_plain_literal(parent, &predicate, value, language);
        }
        if self.node(node).state.is_safe() {
            let subject = self.node(node).subject.clone();
            self.emit_now(node, &subject, |tree, subject, graph| {
                tree.emit_plain_literal(node, subject, graph, predicate, value, language)
            });
        } else {
            self.node_mut(node).plain_literals.push(PendingPlainLiteral {
                predicate: predicate.into(),
                value: value.into(),
                language: language.map(Into::into),
            });
        }
    }

    pub fn add_typed_literal(&mut self, node: NodeId, predicate: &str, value: &str, datatype: &str) {
        if let Some((parent, predicate)) = self.set_target(node, predicate) {
            return self.add_typed_literal(parent, &predicate, value, datatype);
        }
        if self.node(node).state.is_safe() {
            let subject = self.node(node).subject.clone();
            self.emit_now(node, &subject, |tree, subject, graph| {
                tree.emit_typed_literal(node, subject, graph, predicate, value, datatype)
            });
        } else {
            self.node_mut(node).typed_literals.push(PendingTypedLiteral {
                predicate: predicate.into(),
                value: value.into(),
                datatype: datatype.into(),
            });
        }
    }

    /// Values of an `@set` belong to the predicate of the enclosing node.
    fn set_target(&self, node: NodeId, predicate: &str) -> Option<(NodeId, String)> {
        if predicate != SET {
            return None;
        }
        let parent = self.node(node).parent?;
        Some((parent, self.node(parent).predicate.clone()))
    }

    /// Adds the `rdf:rest` link from the current list tail to `object` and moves the tail to `object`.
    ///
    /// The triple is emitted immediately.
    pub fn add_list_rest(&mut self, node: NodeId, object: &str) {
        let tail = self.node(node).list_tail.clone();
        self.emit_now(node, &tail, |tree, subject, graph| {
            tree.emit_non_literal(node, subject, graph, REST, object)
        });
        self.node_mut(node).list_tail = object.into();
    }

    /// Adds a list element.
    ///
    /// The first cell is the node subject and follows the safety rules,
    /// the following ones are emitted immediately from the list tail.
    pub fn add_list_first(&mut self, node: NodeId, value: &str, datatype: Option<&str>) {
        let context_node = self.node(node);
        if context_node.list_tail == context_node.subject {
            match datatype {
                Some(datatype) => self.add_typed_literal(node, FIRST, value, datatype),
                None => self.add_plain_literal(node, FIRST, value, None),
            }
        } else {
            let tail = context_node.list_tail.clone();
            self.emit_now(node, &tail, |tree, subject, graph| match datatype {
                Some(datatype) => {
                    tree.emit_typed_literal(node, subject, graph, FIRST, value, datatype)
                }
                None => tree.emit_plain_literal(node, subject, graph, FIRST, value, None),
            });
        }
    }

    /// Adds a value of an `@set` to the enclosing node, which checks its own safety.
    pub fn add_to_set(&mut self, node: NodeId, value: &str, datatype: Option<&str>) {
        let target = self.node(node).parent.unwrap_or(node);
        let predicate = self.node(target).predicate.clone();
        match datatype {
            Some(datatype) => self.add_typed_literal(target, &predicate, value, datatype),
            None => self.add_plain_literal(target, &predicate, value, Some(LANGUAGE)),
        }
    }

    /// `true` if the current key of the node is a keyword like `@id` or `@type`.
    pub fn is_predicate_keyword(&self, node: NodeId) -> bool {
        is_keyword(&self.node(node).predicate)
    }

    /// `true` if the node is part of an `@context` value.
    pub fn is_parsing_context(&self, node: NodeId) -> bool {
        let Some(parent) = self.node(node).parent else {
            return false;
        };
        let parent = self.node(parent);
        parent.predicate == CONTEXT
            || parent
                .parent
                .is_some_and(|grand_parent| self.node(grand_parent).predicate == CONTEXT)
    }

    /// Merges the definitions read from an `@context` value (held by `source`) into `node`.
    ///
    /// The node is marked [`CONTEXT_DECLARED`](SafetyState::CONTEXT_DECLARED) and `source` leaves the tree.
    pub fn process_context(&mut self, node: NodeId, source: NodeId) {
        if source != node {
            if self.node(source).nullified {
                self.nullify(node);
            }
            self.discard_subtree(source);
            let source_node = self.node_mut(source);
            let iri_mappings = take(&mut source_node.iri_mappings);
            let dt_mappings = take(&mut source_node.dt_mappings);
            let lang_mappings = take(&mut source_node.lang_mappings);
            let lang = source_node.lang.clone();
            let base = source_node.base.clone();
            let vocab = source_node.vocab.clone();
            let source_parent = source_node.parent;
            let context_node = self.node_mut(node);
            context_node.iri_mappings.extend(iri_mappings);
            context_node.dt_mappings.extend(dt_mappings);
            context_node.lang_mappings.extend(lang_mappings);
            context_node.lang = lang;
            context_node.base = base;
            context_node.vocab = vocab;
            if let Some(source_parent) = source_parent {
                self.node_mut(source_parent)
                    .children
                    .retain(|child| *child != source);
                if source_parent != node {
                    self.flush_if_ready(source_parent);
                }
            }
        }
        self.update_state(node, SafetyState::CONTEXT_DECLARED);
        self.flush_if_ready(node);
    }

    /// Detaches `root` and all its descendants without emitting anything.
    fn discard_subtree(&mut self, root: NodeId) {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let context_node = self.node_mut(node);
            context_node.detached = true;
            let discarded = context_node.pending_triple_count();
            context_node.non_literals.clear();
            context_node.plain_literals.clear();
            context_node.typed_literals.clear();
            stack.extend(take(&mut context_node.children));
            if discarded > 0 {
                debug!(node = %node, discarded, "discarding triples added to a context definition");
            }
        }
    }

    fn flush_if_ready(&mut self, node: NodeId) {
        let context_node = self.node(node);
        if context_node.state.is_safe() && context_node.children.is_empty() && !context_node.detached
        {
            self.sink_unsafe_triples(node);
        }
    }

    /// Emits all the queued triples of the node and removes it from its parent.
    fn sink_unsafe_triples(&mut self, node: NodeId) {
        let context_node = self.node_mut(node);
        if context_node.detached {
            return;
        }
        context_node.detached = true;
        let non_literals = take(&mut context_node.non_literals);
        let plain_literals = take(&mut context_node.plain_literals);
        let typed_literals = take(&mut context_node.typed_literals);
        let explicit_id = context_node.explicit_id;
        let raw_subject = context_node.subject.clone();
        trace!(node = %node, subject = %raw_subject, "flushing context node");

        match self.resolve_target(node, &raw_subject) {
            Ok((subject, graph)) => {
                let graph = graph.as_deref();
                if explicit_id {
                    self.sink.begin_document(&subject);
                }
                for triple in non_literals {
                    let result = self.emit_non_literal(
                        node,
                        &subject,
                        graph,
                        &triple.predicate,
                        &triple.object,
                    );
                    self.check_emission(node, result);
                }
                for triple in plain_literals {
                    let result = self.emit_plain_literal(
                        node,
                        &subject,
                        graph,
                        &triple.predicate,
                        &triple.value,
                        triple.language.as_deref(),
                    );
                    self.check_emission(node, result);
                }
                for triple in typed_literals {
                    let result = self.emit_typed_literal(
                        node,
                        &subject,
                        graph,
                        &triple.predicate,
                        &triple.value,
                        &triple.datatype,
                    );
                    self.check_emission(node, result);
                }
                if explicit_id {
                    self.sink.end_document(&subject);
                }
            }
            Err(error) => {
                let discarded = non_literals.len() + plain_literals.len() + typed_literals.len();
                self.statistics.malformed_triples += discarded;
                warn!(
                    node = %node,
                    subject = %raw_subject,
                    discarded,
                    "discarding the triples of a context node: {error}"
                );
                if explicit_id {
                    self.sink.begin_document(&raw_subject);
                    self.sink.end_document(&raw_subject);
                }
            }
        }

        if let Some(parent) = self.node(node).parent {
            self.node_mut(parent).children.retain(|child| *child != node);
            self.flush_if_ready(parent);
        }
    }

    fn resolve_target(
        &self,
        node: NodeId,
        subject: &str,
    ) -> Result<(String, Option<String>), MalformedIriError> {
        let resolver = self.resolver(node);
        let subject = resolver.resolve(subject, false, false)?;
        let graph = self
            .node(node)
            .graph
            .as_deref()
            .map(|graph| resolver.resolve(graph, false, false))
            .transpose()?;
        Ok((subject, graph))
    }

    /// Resolves the subject and graph then calls `emit`, dropping the triple on failure.
    fn emit_now(
        &mut self,
        node: NodeId,
        subject: &str,
        emit: impl FnOnce(&mut Self, &str, Option<&str>) -> Result<(), MalformedIriError>,
    ) {
        let result = self
            .resolve_target(node, subject)
            .and_then(|(subject, graph)| emit(self, &subject, graph.as_deref()));
        self.check_emission(node, result);
    }

    fn check_emission(&mut self, node: NodeId, result: Result<(), MalformedIriError>) {
        if let Err(error) = result {
            self.statistics.malformed_triples += 1;
            debug!(node = %node, "dropping triple: {error}");
        }
    }

    fn emit_non_literal(
        &mut self,
        node: NodeId,
        subject: &str,
        graph: Option<&str>,
        predicate: &str,
        object: &str,
    ) -> Result<(), MalformedIriError> {
        let resolver = Resolver::new(&self.nodes, node, self.lenient);
        let use_vocab = predicate == TYPE || resolver.get_dt_mapping(predicate) == Some(VOCAB);
        let resolved_predicate = resolver.resolve(predicate, true, true)?;
        let object = resolver.resolve(object, false, use_vocab)?;
        if self.is_reversed(resolver, node, predicate) {
            self.sink
                .add_non_literal(&object, &resolved_predicate, subject, graph);
        } else {
            self.sink
                .add_non_literal(subject, &resolved_predicate, &object, graph);
        }
        Ok(())
    }

    fn emit_plain_literal(
        &mut self,
        node: NodeId,
        subject: &str,
        graph: Option<&str>,
        predicate: &str,
        value: &str,
        language: Option<&str>,
    ) -> Result<(), MalformedIriError> {
        let datatype = self
            .resolver(node)
            .get_dt_mapping(predicate)
            .map(ToOwned::to_owned);
        match datatype.as_deref() {
            Some(ID | VOCAB) => {
                return self.emit_non_literal(node, subject, graph, predicate, value);
            }
            Some(datatype) if !is_keyword(datatype) => {
                return self.emit_typed_literal(node, subject, graph, predicate, value, datatype);
            }
            _ => (),
        }
        let resolver = Resolver::new(&self.nodes, node, self.lenient);
        let resolved_predicate = resolver.resolve(predicate, true, true)?;
        if self.is_reversed(resolver, node, predicate) {
            debug!(node = %node, predicate, "a literal can't be the subject of a reverse property");
            return Ok(());
        }
        let language = resolver.language(predicate, language);
        self.sink
            .add_plain_literal(subject, &resolved_predicate, value, language, graph);
        Ok(())
    }

    fn emit_typed_literal(
        &mut self,
        node: NodeId,
        subject: &str,
        graph: Option<&str>,
        predicate: &str,
        value: &str,
        datatype: &str,
    ) -> Result<(), MalformedIriError> {
        if datatype == ID {
            return self.emit_non_literal(node, subject, graph, predicate, value);
        }
        let resolver = Resolver::new(&self.nodes, node, self.lenient);
        let resolved_predicate = resolver.resolve(predicate, true, true)?;
        let datatype = resolver.resolve(datatype, true, true)?;
        if self.is_reversed(resolver, node, predicate) {
            debug!(node = %node, predicate, "a literal can't be the subject of a reverse property");
            return Ok(());
        }
        self.sink
            .add_typed_literal(subject, &resolved_predicate, value, &datatype, graph);
        Ok(())
    }

    /// List cells keep their direction inside reversed nodes.
    fn is_reversed(&self, resolver: Resolver<'_>, node: NodeId, predicate: &str) -> bool {
        if predicate == FIRST || predicate == REST {
            return false;
        }
        self.node(node).reversed ^ (resolver.get_dt_mapping(predicate) == Some(REVERSE))
    }
}
