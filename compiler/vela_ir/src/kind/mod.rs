//! Node kind registry and contiguous-range identifier assignment.
//!
//! Every node kind is described by one [`KindDescriptor`] held in a
//! [`KindRegistry`] arena and addressed by a registration-order [`KindRef`].
//! A single [`KindRegistry::initialize`] pass flattens the parent/child tree
//! in pre-order and assigns each kind its [`KindId`], such that for a kind
//! with id `i` and descendant span `s`, "this kind or any descendant" is
//! exactly the interval `[i, i + s]`.
//!
//! # Design
//!
//! - Descriptors live in a vector and link by index, so the parent/child
//!   tree carries no lifetimes and no reference cycles.
//! - Child visitation order during flattening is registration order. Tests
//!   that assert exact ids rely on this; the range invariant itself only
//!   needs contiguity.
//! - Dispatch is one table index into a function-pointer slot. No per-call
//!   type inspection happens beyond that index.

use std::fmt;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{Node, NodeVisitor, RegisterError};

/// Routes a generic node to its kind-specific visitor method.
pub type DispatchFn = fn(&Node, &mut dyn NodeVisitor);

/// Pre-order identifier of a node kind.
///
/// Assigned once by [`KindRegistry::initialize`]; [`KindId::UNASSIGNED`]
/// before that. A kind's subtree occupies the contiguous id interval
/// starting at its own id.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct KindId(u32);

impl KindId {
    /// Sentinel: no id assigned yet (initialization has not run).
    pub const UNASSIGNED: Self = Self(u32::MAX);

    /// Create an id from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is the unassigned sentinel.
    #[inline]
    pub const fn is_unassigned(self) -> bool {
        self.0 == u32::MAX
    }
}

impl fmt::Debug for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unassigned() {
            write!(f, "KindId::UNASSIGNED")
        } else {
            write!(f, "KindId({})", self.0)
        }
    }
}

/// Registration-order handle to a descriptor in the registry arena.
///
/// Stable across initialization; cheap to copy and store.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct KindRef(u32);

impl KindRef {
    /// Get the raw arena index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for KindRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KindRef({})", self.0)
    }
}

crate::static_assert_size!(KindId, 4);
crate::static_assert_size!(KindRef, 4);

/// Per-kind metadata record.
///
/// Created exactly once per kind via [`KindRegistry::register`]. The `id`
/// and `descendant_span` fields are written exactly once by
/// [`KindRegistry::initialize`] and read-only afterward.
pub struct KindDescriptor {
    name: &'static str,
    parent: Option<KindRef>,
    dispatch: DispatchFn,
    id: KindId,
    descendant_span: u32,
    children: SmallVec<[KindRef; 4]>,
}

impl KindDescriptor {
    /// Diagnostic name of the kind.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Parent kind, or `None` for the hierarchy root.
    #[inline]
    pub fn parent(&self) -> Option<KindRef> {
        self.parent
    }

    /// Assigned pre-order id ([`KindId::UNASSIGNED`] before initialization).
    #[inline]
    pub fn id(&self) -> KindId {
        self.id
    }

    /// Count of additional contiguous ids occupied by this kind's subtree.
    ///
    /// Zero for a childless leaf. Meaningful only after initialization.
    #[inline]
    pub fn descendant_span(&self) -> u32 {
        self.descendant_span
    }

    /// Child kinds, in registration order.
    #[inline]
    pub fn children(&self) -> &[KindRef] {
        &self.children
    }

    /// O(1) subtype test: does `k` name this kind or one of its descendants?
    #[inline]
    pub fn contains(&self, k: KindId) -> bool {
        debug_assert!(!self.id.is_unassigned(), "subtype query before initialize");
        debug_assert!(!k.is_unassigned(), "subtype query on unassigned id");
        self.id.raw() <= k.raw() && k.raw() <= self.id.raw() + self.descendant_span
    }
}

impl fmt::Debug for KindDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindDescriptor")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("id", &self.id)
            .field("descendant_span", &self.descendant_span)
            .finish_non_exhaustive()
    }
}

/// Write-once-at-startup table of every node kind.
///
/// Populated by [`register`](Self::register) calls during compiler startup,
/// flattened exactly once by [`initialize`](Self::initialize), read-only for
/// the rest of the process. Not internally synchronized: registration and
/// initialization happen on one thread, and sharing by `&` afterward is safe
/// because nothing mutates.
#[derive(Default)]
pub struct KindRegistry {
    /// Descriptor arena, in registration order.
    kinds: Vec<KindDescriptor>,
    /// Pre-order kind table; `ordered[i]` is the kind with id `i`.
    /// Empty until `initialize` runs - that emptiness is the idempotence guard.
    ordered: Vec<KindRef>,
    /// Name index for diagnostics and tooling.
    by_name: FxHashMap<&'static str, KindRef>,
}

impl KindRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one node kind.
    ///
    /// `parent` must be a handle returned by an earlier `register` call, or
    /// `None` for the single hierarchy root. Registration order determines
    /// child visitation order during flattening, which in turn fixes the
    /// exact ids `initialize` assigns.
    #[allow(clippy::cast_possible_truncation)]
    pub fn register(
        &mut self,
        name: &'static str,
        parent: Option<KindRef>,
        dispatch: DispatchFn,
    ) -> Result<KindRef, RegisterError> {
        if let Some(p) = parent {
            if p.index() >= self.kinds.len() {
                return Err(RegisterError::InvalidParent {
                    parent: p,
                    registered: self.kinds.len(),
                });
            }
        }

        let this = KindRef(self.kinds.len() as u32);
        self.kinds.push(KindDescriptor {
            name,
            parent,
            dispatch,
            id: KindId::UNASSIGNED,
            descendant_span: 0,
            children: SmallVec::new(),
        });
        if let Some(p) = parent {
            self.kinds[p.index()].children.push(this);
        }
        self.by_name.insert(name, this);
        Ok(this)
    }

    /// Number of registered kinds.
    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if no kinds are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Check if `initialize` has run.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        !self.ordered.is_empty()
    }

    /// Descriptor for a handle.
    #[inline]
    pub fn descriptor(&self, kind: KindRef) -> &KindDescriptor {
        &self.kinds[kind.index()]
    }

    /// Assigned id for a handle ([`KindId::UNASSIGNED`] before init).
    #[inline]
    pub fn id_of(&self, kind: KindRef) -> KindId {
        self.kinds[kind.index()].id
    }

    /// Handle of the kind holding a given id. Valid only after `initialize`.
    #[inline]
    pub fn kind_at(&self, id: KindId) -> KindRef {
        debug_assert!(!id.is_unassigned(), "lookup of unassigned id");
        self.ordered[id.raw() as usize]
    }

    /// Look up a kind by its diagnostic name.
    #[inline]
    pub fn find(&self, name: &str) -> Option<KindRef> {
        self.by_name.get(name).copied()
    }

    /// Flatten the hierarchy and assign contiguous-range ids.
    ///
    /// Must run after all registrations and before any dispatch or subtype
    /// query. Idempotent: a second call observes the populated ordered table
    /// and returns immediately.
    ///
    /// The caller guarantees a single-rooted hierarchy. With several rootless
    /// kinds, the first-registered one wins and the others never receive ids;
    /// that is a structural misconfiguration, not a checked error.
    #[allow(clippy::cast_possible_truncation)]
    pub fn initialize(&mut self) {
        if self.is_initialized() {
            return;
        }
        let Some(root) = self.kinds.iter().position(|k| k.parent.is_none()) else {
            return;
        };

        // Pre-order flattening: every descendant lands at a larger index
        // than its ancestor, and each subtree fills one contiguous block.
        self.ordered.reserve(self.kinds.len());
        let mut stack = vec![KindRef(root as u32)];
        while let Some(kref) = stack.pop() {
            let id = KindId(self.ordered.len() as u32);
            self.ordered.push(kref);
            self.kinds[kref.index()].id = id;
            // Reversed so the first-registered child is visited first.
            for &child in self.kinds[kref.index()].children.iter().rev() {
                stack.push(child);
            }
        }

        // Descendant spans: highest id reachable in the subtree minus own id.
        // Walking the ordered table backwards sees every child before its
        // parent, so one pass suffices.
        for i in (0..self.ordered.len()).rev() {
            let kref = self.ordered[i];
            let span = self.kinds[kref.index()]
                .children
                .iter()
                .map(|c| {
                    let child = &self.kinds[c.index()];
                    child.id.raw() + child.descendant_span
                })
                .max()
                .map_or(0, |max_id| max_id - self.kinds[kref.index()].id.raw());
            self.kinds[kref.index()].descendant_span = span;
        }

        tracing::debug!(
            kinds = self.ordered.len(),
            root = self.kinds[root].name,
            "kind hierarchy flattened"
        );
    }

    /// Route a node to its kind's handler on `visitor`.
    ///
    /// One table index, one indirect call. Calling this before
    /// [`initialize`](Self::initialize) is a compiler bug.
    #[inline]
    pub fn dispatch(&self, node: &Node, visitor: &mut dyn NodeVisitor) {
        debug_assert!(self.is_initialized(), "dispatch before initialize");
        let kref = self.ordered[node.kind().raw() as usize];
        (self.kinds[kref.index()].dispatch)(node, visitor);
    }

    /// O(1) subtype test: is the node id `k` the kind `of` or a descendant?
    #[inline]
    pub fn is_a(&self, k: KindId, of: KindRef) -> bool {
        self.descriptor(of).contains(k)
    }
}

impl fmt::Debug for KindRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindRegistry")
            .field("kinds", &self.kinds.len())
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

#[cfg(test)]
mod tests;
