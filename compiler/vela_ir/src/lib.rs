//! Node identity for the Vela compiler.
//!
//! Every syntax tree node carries a small integer [`KindId`] assigned so that
//! an entire subtree of kinds occupies one contiguous interval. That turns
//! "is this node a `K` or a descendant of `K`" into a single range comparison
//! and routes visitor dispatch through one indexed function-pointer lookup.
//!
//! # Lifecycle
//!
//! 1. Register every kind into a [`KindRegistry`] (see [`BuiltinKinds`] for
//!    the compiler's fixed hierarchy).
//! 2. Call [`KindRegistry::initialize`] exactly once.
//! 3. Construct [`Node`]s and dispatch through [`KindRegistry::dispatch`].
//!
//! After step 2 the registry is read-only and freely shareable.

mod error;
mod kind;
mod kinds;
mod node;
mod span;
mod token;
mod visitor;

pub use error::RegisterError;
pub use kind::{DispatchFn, KindDescriptor, KindId, KindRef, KindRegistry};
pub use kinds::BuiltinKinds;
pub use node::Node;
pub use span::Span;
pub use token::{LitKind, ModifierKind, OpKind, TokenKind};
pub use visitor::NodeVisitor;

/// Assert the size of a type at compile time.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: () = assert!(std::mem::size_of::<$ty>() == $size);
    };
}
