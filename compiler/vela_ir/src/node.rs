//! Common syntax tree node representation.

use crate::{KindId, KindRef, KindRegistry, Span};

/// The data every syntax tree node carries: its assigned kind id and its
/// source location.
///
/// The id is stamped from the matching descriptor at construction and never
/// changes. Constructing nodes before [`KindRegistry::initialize`] has run is
/// a compiler bug.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Node {
    kind: KindId,
    span: Span,
}

impl Node {
    /// Create a node of the given kind, stamping its assigned id.
    #[inline]
    pub fn new(registry: &KindRegistry, kind: KindRef, span: Span) -> Self {
        let id = registry.id_of(kind);
        debug_assert!(!id.is_unassigned(), "node built before initialize");
        Node { kind: id, span }
    }

    /// The node's assigned kind id.
    #[inline]
    pub fn kind(&self) -> KindId {
        self.kind
    }

    /// Source location of the node.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }
}

crate::static_assert_size!(Node, 12);
