use crate::keyword::DOC_IRI;

/// Mints blank node identifiers for a single parse.
///
/// Identifiers are `_:b0`, `_:b1`... and are never reused, even if the node that requested them is discarded.
/// The allocator is not synchronized: use one instance per parse.
///
/// It also keeps the document IRI marker that nullified contexts fall back to as their base.
///
/// ```
/// use oxjsonld_stream::BlankNodeAllocator;
///
/// let mut allocator = BlankNodeAllocator::new();
/// assert_eq!(allocator.create_bnode(false), "_:b0");
/// assert_eq!(allocator.create_bnode(true), "_:b1sbl");
/// assert_eq!(allocator.create_bnode(false), "_:b2");
/// ```
#[derive(Debug, Clone)]
pub struct BlankNodeAllocator {
    counter: u64,
    document_iri: String,
}

impl BlankNodeAllocator {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh blank node identifier.
    ///
    /// Shortenable identifiers get a `sbl` suffix so that serializers can inline them.
    pub fn create_bnode(&mut self, shortenable: bool) -> String {
        let id = self.counter;
        self.counter += 1;
        if shortenable {
            format!("_:b{id}sbl")
        } else {
            format!("_:b{id}")
        }
    }

    /// Number of identifiers minted so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.counter
    }

    #[inline]
    pub fn document_iri(&self) -> &str {
        &self.document_iri
    }

    pub fn set_document_iri(&mut self, document_iri: impl Into<String>) {
        self.document_iri = document_iri.into();
    }
}

impl Default for BlankNodeAllocator {
    fn default() -> Self {
        Self {
            counter: 0,
            document_iri: DOC_IRI.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_document_iri() {
        let mut allocator = BlankNodeAllocator::new();
        assert_eq!(allocator.document_iri(), DOC_IRI);
        allocator.set_document_iri("http://example.com/doc");
        assert_eq!(allocator.document_iri(), "http://example.com/doc");
    }

    proptest! {
        #[test]
        fn test_identifiers_have_no_gaps(count in 0_usize..200) {
            let mut allocator = BlankNodeAllocator::new();
            let ids = (0..count).map(|_| allocator.create_bnode(false)).collect::<Vec<_>>();
            let expected = (0..count).map(|i| format!("_:b{i}")).collect::<Vec<_>>();
            prop_assert_eq!(ids, expected);
            prop_assert_eq!(allocator.count(), u64::try_from(count).unwrap());
        }
    }
}
