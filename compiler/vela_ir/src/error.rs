//! Registration errors.

use crate::KindRef;

/// Error raised while registering a node kind.
///
/// Registration is infrastructure driven by the compiler itself, so the
/// surface is deliberately narrow: the only recoverable failure is a parent
/// handle that does not name an already-registered kind. Because a kind's own
/// handle does not exist until `register` returns, self-parenting is
/// inexpressible and cannot create a one-node cycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    /// The supplied parent handle does not refer to a registered kind.
    #[error("parent handle {parent:?} is out of range ({registered} kinds registered)")]
    InvalidParent {
        /// The offending handle.
        parent: KindRef,
        /// Number of kinds registered at the time of the call.
        registered: usize,
    },
}
