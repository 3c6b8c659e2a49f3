use crate::error::InvalidTermError;
use oxilangtag::LanguageTag;
use oxrdf::{BlankNode, GraphName, Literal, NamedNode, NamedOrBlankNode, Quad, Term};

/// Receiver of the triples produced by a [`ContextTree`](crate::ContextTree).
///
/// Subjects, predicates, objects, datatypes and graph names are already resolved when the sink sees them:
/// they are either absolute IRIs or blank node references (`_:...`).
/// A `None` graph is the default graph.
pub trait QuadSink {
    /// Called before the triples of a node that had an explicit `@id`.
    fn begin_document(&mut self, id: &str);

    /// Called after the triples of a node that had an explicit `@id`.
    fn end_document(&mut self, id: &str);

    fn add_non_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        object: &str,
        graph: Option<&str>,
    );

    fn add_plain_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        language: Option<&str>,
        graph: Option<&str>,
    );

    fn add_typed_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        datatype: &str,
        graph: Option<&str>,
    );
}

impl<S: QuadSink + ?Sized> QuadSink for &mut S {
    #[inline]
    fn begin_document(&mut self, id: &str) {
        (**self).begin_document(id)
    }

    #[inline]
    fn end_document(&mut self, id: &str) {
        (**self).end_document(id)
    }

    #[inline]
    fn add_non_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        object: &str,
        graph: Option<&str>,
    ) {
        (**self).add_non_literal(subject, predicate, object, graph)
    }

    #[inline]
    fn add_plain_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        language: Option<&str>,
        graph: Option<&str>,
    ) {
        (**self).add_plain_literal(subject, predicate, value, language, graph)
    }

    #[inline]
    fn add_typed_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        datatype: &str,
        graph: Option<&str>,
    ) {
        (**self).add_typed_literal(subject, predicate, value, datatype, graph)
    }
}

/// A call received by a [`QuadSink`], as recorded by the `Vec<SinkEvent>` sink.
///
/// ```
/// use oxjsonld_stream::{ContextTreeOptions, SinkEvent};
///
/// let mut tree = ContextTreeOptions::new().for_sink(Vec::<SinkEvent>::new());
/// let root = tree.root();
/// tree.set_subject(root, "http://example.com/s");
/// tree.add_plain_literal(root, "http://example.com/p", "foo", None);
/// assert_eq!(
///     tree.sink(),
///     &[SinkEvent::PlainLiteral {
///         subject: "http://example.com/s".into(),
///         predicate: "http://example.com/p".into(),
///         value: "foo".into(),
///         language: None,
///         graph: None,
///     }]
/// );
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum SinkEvent {
    BeginDocument(String),
    EndDocument(String),
    NonLiteral {
        subject: String,
        predicate: String,
        object: String,
        graph: Option<String>,
    },
    PlainLiteral {
        subject: String,
        predicate: String,
        value: String,
        language: Option<String>,
        graph: Option<String>,
    },
    TypedLiteral {
        subject: String,
        predicate: String,
        value: String,
        datatype: String,
        graph: Option<String>,
    },
}

impl QuadSink for Vec<SinkEvent> {
    fn begin_document(&mut self, id: &str) {
        self.push(SinkEvent::BeginDocument(id.into()));
    }

    fn end_document(&mut self, id: &str) {
        self.push(SinkEvent::EndDocument(id.into()));
    }

    fn add_non_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        object: &str,
        graph: Option<&str>,
    ) {
        self.push(SinkEvent::NonLiteral {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph: graph.map(Into::into),
        });
    }

    fn add_plain_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        language: Option<&str>,
        graph: Option<&str>,
    ) {
        self.push(SinkEvent::PlainLiteral {
            subject: subject.into(),
            predicate: predicate.into(),
            value: value.into(),
            language: language.map(Into::into),
            graph: graph.map(Into::into),
        });
    }

    fn add_typed_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        datatype: &str,
        graph: Option<&str>,
    ) {
        self.push(SinkEvent::TypedLiteral {
            subject: subject.into(),
            predicate: predicate.into(),
            value: value.into(),
            datatype: datatype.into(),
            graph: graph.map(Into::into),
        });
    }
}

/// A [`QuadSink`] building [`oxrdf`] quads.
///
/// Terms that are not valid RDF (for example a language tag that is not BCP47) are not turned into quads,
/// the matching errors are kept and available through [`QuadCollector::errors`].
///
/// ```
/// use oxjsonld_stream::{ContextTreeOptions, QuadCollector};
/// use oxrdf::{Literal, NamedNode, Quad, GraphName};
///
/// let mut tree = ContextTreeOptions::new().for_sink(QuadCollector::new());
/// let root = tree.root();
/// tree.set_subject(root, "http://example.com/s");
/// tree.add_plain_literal(root, "http://example.com/p", "chat", Some("fr"));
/// let (collector, _) = tree.finish();
/// assert_eq!(
///     collector.quads(),
///     &[Quad::new(
///         NamedNode::new("http://example.com/s")?,
///         NamedNode::new("http://example.com/p")?,
///         Literal::new_language_tagged_literal("chat", "fr")?,
///         GraphName::DefaultGraph,
///     )]
/// );
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default)]
pub struct QuadCollector {
    quads: Vec<Quad>,
    errors: Vec<InvalidTermError>,
    documents: usize,
}

impl QuadCollector {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The quads collected so far, in emission order.
    #[inline]
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    #[inline]
    pub fn into_quads(self) -> Vec<Quad> {
        self.quads
    }

    /// The terms that could not be converted to RDF.
    #[inline]
    pub fn errors(&self) -> &[InvalidTermError] {
        &self.errors
    }

    /// Number of nodes with an explicit `@id` that have been fully emitted.
    #[inline]
    pub fn document_count(&self) -> usize {
        self.documents
    }

    fn push(
        &mut self,
        subject: &str,
        predicate: &str,
        object: impl FnOnce() -> Result<Term, InvalidTermError>,
        graph: Option<&str>,
    ) {
        match build_quad(subject, predicate, object, graph) {
            Ok(quad) => self.quads.push(quad),
            Err(error) => self.errors.push(error),
        }
    }
}

impl QuadSink for QuadCollector {
    fn begin_document(&mut self, _id: &str) {}

    fn end_document(&mut self, _id: &str) {
        self.documents += 1;
    }

    fn add_non_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        object: &str,
        graph: Option<&str>,
    ) {
        self.push(
            subject,
            predicate,
            || Ok(convert_named_or_blank_node(object)?.into()),
            graph,
        );
    }

    fn add_plain_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        language: Option<&str>,
        graph: Option<&str>,
    ) {
        self.push(
            subject,
            predicate,
            || {
                Ok(if let Some(language) = language {
                    let language = LanguageTag::parse(language.to_ascii_lowercase())
                        .map_err(|e| InvalidTermError::language_tag(language, e))?;
                    Literal::new_language_tagged_literal_unchecked(value, language.into_inner())
                } else {
                    Literal::new_simple_literal(value)
                }
                .into())
            },
            graph,
        );
    }

    fn add_typed_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        datatype: &str,
        graph: Option<&str>,
    ) {
        self.push(
            subject,
            predicate,
            || Ok(Literal::new_typed_literal(value, convert_named_node(datatype)?).into()),
            graph,
        );
    }
}

fn build_quad(
    subject: &str,
    predicate: &str,
    object: impl FnOnce() -> Result<Term, InvalidTermError>,
    graph: Option<&str>,
) -> Result<Quad, InvalidTermError> {
    Ok(Quad::new(
        convert_named_or_blank_node(subject)?,
        convert_named_node(predicate)?,
        object()?,
        convert_graph_name(graph)?,
    ))
}

fn convert_named_node(iri: &str) -> Result<NamedNode, InvalidTermError> {
    NamedNode::new(iri).map_err(|e| InvalidTermError::iri(iri, e))
}

fn convert_named_or_blank_node(value: &str) -> Result<NamedOrBlankNode, InvalidTermError> {
    Ok(if let Some(id) = value.strip_prefix("_:") {
        BlankNode::new(id)
            .map_err(|e| InvalidTermError::blank_node(id, e))?
            .into()
    } else {
        convert_named_node(value)?.into()
    })
}

fn convert_graph_name(graph: Option<&str>) -> Result<GraphName, InvalidTermError> {
    let Some(graph) = graph else {
        return Ok(GraphName::DefaultGraph);
    };
    Ok(match convert_named_or_blank_node(graph)? {
        NamedOrBlankNode::NamedNode(node) => node.into(),
        NamedOrBlankNode::BlankNode(node) => node.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_converts_terms() {
        let mut collector = QuadCollector::new();
        collector.add_non_literal(
            "_:b0",
            "http://example.com/p",
            "http://example.com/o",
            Some("_:g"),
        );
        collector.add_typed_literal(
            "http://example.com/s",
            "http://example.com/p",
            "1",
            "http://www.w3.org/2001/XMLSchema#integer",
            Some("http://example.com/g"),
        );
        collector.end_document("http://example.com/s");
        assert!(collector.errors().is_empty());
        assert_eq!(collector.document_count(), 1);
        let quads = collector.into_quads();
        assert_eq!(quads.len(), 2);
        assert_eq!(quads[0].subject, BlankNode::new_unchecked("b0").into());
        assert_eq!(quads[0].graph_name, BlankNode::new_unchecked("g").into());
        assert_eq!(
            quads[1].object,
            Literal::new_typed_literal("1", oxrdf::vocab::xsd::INTEGER).into()
        );
    }

    #[test]
    fn test_collector_keeps_errors() {
        let mut collector = QuadCollector::new();
        collector.add_plain_literal(
            "http://example.com/s",
            "http://example.com/p",
            "foo",
            Some("not a tag"),
            None,
        );
        collector.add_non_literal(
            "http://example.com/s",
            "not an iri",
            "http://example.com/o",
            None,
        );
        assert!(collector.quads().is_empty());
        assert_eq!(collector.errors().len(), 2);
    }

    #[test]
    fn test_recording_sink_through_reference() {
        fn emit(mut sink: impl QuadSink) {
            sink.begin_document("http://example.com/s");
            sink.end_document("http://example.com/s");
        }

        let mut events = Vec::<SinkEvent>::new();
        emit(&mut events);
        assert_eq!(
            events,
            [
                SinkEvent::BeginDocument("http://example.com/s".into()),
                SinkEvent::EndDocument("http://example.com/s".into())
            ]
        );
    }
}
