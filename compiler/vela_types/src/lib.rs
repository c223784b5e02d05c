//! Type representation for the Vela compiler.
//!
//! Types live in a [`TypePool`] arena and are referenced by 32-bit
//! [`TypeId`] handles. The pool models four shapes - primitives, pointers,
//! field-bearing structs, and function signatures - and provides:
//!
//! - the layout engine ([`TypePool::finalize_layout`]): field offsets,
//!   alignment promotion, padded total size
//! - structural equality and order-sensitive hashing
//!   ([`TypePool::type_eq`], [`TypePool::type_hash`]) for the analyzer's
//!   type-dedup cache
//!
//! Primitives and pointers are immutable from birth; structs go through an
//! explicit single-threaded build phase (`add_field`/`add_method`/
//! `finalize_layout`) and are immutable once finalized.

mod context;
mod desc;
mod flags;
mod idx;
mod layout;
mod pool;
mod structural;

pub use context::AnalysisContext;
pub use desc::{Field, FunctionType, Method, StructType, TypeDesc};
pub use flags::TypeFlags;
pub use idx::TypeId;
pub use pool::TypePool;

/// Assert the size of a type at compile time.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: () = assert!(std::mem::size_of::<$ty>() == $size);
    };
}
