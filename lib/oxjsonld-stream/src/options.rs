use crate::bnode::BlankNodeAllocator;
use crate::sink::QuadSink;
use crate::tree::ContextTree;
use oxiri::{Iri, IriParseError};

/// Configuration of a [`ContextTree`].
///
/// ```
/// use oxjsonld_stream::{ContextTreeOptions, SinkEvent};
///
/// let tree = ContextTreeOptions::new()
///     .with_base_iri("http://example.com/data.jsonld")?
///     .flush_pending_on_finish()
///     .for_sink(Vec::<SinkEvent>::new());
/// assert_eq!(tree.node(tree.root()).base(), "http://example.com/data.jsonld");
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Default, Clone)]
#[must_use]
pub struct ContextTreeOptions {
    base: Option<Iri<String>>,
    lenient: bool,
    flush_pending_on_finish: bool,
}

impl ContextTreeOptions {
    /// Builds the default options.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Base IRI of the document.
    ///
    /// It is also the document IRI marker that nullified contexts fall back to.
    #[inline]
    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Result<Self, IriParseError> {
        self.base = Some(Iri::parse(base_iri.into())?);
        Ok(self)
    }

    /// Does not check that resolved IRIs are absolute.
    ///
    /// Note that if the input is not valid, the sink might receive broken IRIs.
    #[inline]
    pub fn lenient(mut self) -> Self {
        self.lenient = true;
        self
    }

    /// Makes [`ContextTree::finish`] emit the triples of the nodes that never became safe
    /// instead of dropping them.
    #[inline]
    pub fn flush_pending_on_finish(mut self) -> Self {
        self.flush_pending_on_finish = true;
        self
    }

    /// Builds a [`ContextTree`] writing to the given sink.
    pub fn for_sink<S: QuadSink>(self, sink: S) -> ContextTree<S> {
        let mut allocator = BlankNodeAllocator::new();
        if let Some(base) = self.base {
            allocator.set_document_iri(base.into_inner());
        }
        ContextTree::with_options(sink, allocator, self.lenient, self.flush_pending_on_finish)
    }
}
