//! Single-pass JSON-LD to RDF conversion engine.
//!
//! A JSON-LD document is read once, from top to bottom, by an external driver (a JSON tokenizer).
//! The driver mirrors the nesting of the document in a [`ContextTree`]: each JSON object, array or graph
//! gets its own [`ContextNode`] holding the term definitions, base IRI, vocabulary and default language of that scope.
//!
//! Because `@id` and `@context` may appear after the properties they apply to,
//! triples are queued in their node until the node is [safe](SafetyState) and then resolved and handed to a [`QuadSink`].
//!
//! ```
//! use oxjsonld_stream::{ContextTreeOptions, QuadCollector, SafetyState};
//! use oxrdf::{NamedNode, Quad, GraphName};
//!
//! // { "@context": { "ex": "http://example.com/" }, "ex:knows": { "@id": "ex:2" }, "@id": "ex:1" }
//! let mut tree = ContextTreeOptions::new().for_sink(QuadCollector::new());
//! let object = tree.init_child_context(tree.root(), None);
//! tree.set_predicate(object, "ex");
//! tree.define_iri_mapping_for_predicate(object, Some("http://example.com/"));
//! tree.update_state(object, SafetyState::CONTEXT_DECLARED);
//! tree.set_predicate(object, "ex:knows");
//! tree.add_non_literal(object, "ex:knows", "ex:2");
//! tree.set_predicate(object, "@id");
//! tree.id(object, "ex:1");
//!
//! let (collector, statistics) = tree.finish();
//! assert_eq!(
//!     collector.quads(),
//!     &[Quad::new(
//!         NamedNode::new("http://example.com/1")?,
//!         NamedNode::new("http://example.com/knows")?,
//!         NamedNode::new("http://example.com/2")?,
//!         GraphName::DefaultGraph,
//!     )]
//! );
//! assert_eq!(statistics.dropped_triples, 0);
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(html_favicon_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]

mod bnode;
mod error;
mod iri;
pub mod keyword;
mod node;
mod options;
mod resolver;
mod sink;
mod state;
mod tree;

pub use bnode::BlankNodeAllocator;
pub use error::{InvalidTermError, MalformedIriError};
pub use iri::{is_absolute_iri, is_blank_node, is_urn, resolve_iri};
pub use node::{ContextNode, NodeId};
pub use options::ContextTreeOptions;
pub use resolver::Resolver;
pub use sink::{QuadCollector, QuadSink, SinkEvent};
pub use state::SafetyState;
pub use tree::{ContextTree, DropStatistics};
