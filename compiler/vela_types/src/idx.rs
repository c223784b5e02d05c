//! Type pool index handle.
//!
//! All types are stored in a [`crate::TypePool`] and referenced by their
//! 32-bit index. Primitive types have fixed indices for O(1) access;
//! everything else is allocated dynamically.

use std::fmt;

/// A 32-bit index into the type pool.
///
/// Copy, lightweight, compared by index for identity; use
/// [`crate::TypePool::type_eq`] for structural comparison.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // === Primitive Types (indices 0-7) ===
    // Pre-interned at pool creation.

    /// The `void` type (zero-sized; function returns only).
    pub const VOID: Self = Self(0);
    /// The `bool` type (1 byte).
    pub const BOOL: Self = Self(1);
    /// 8-bit signed integer.
    pub const INT8: Self = Self(2);
    /// 16-bit signed integer.
    pub const INT16: Self = Self(3);
    /// 32-bit signed integer.
    pub const INT32: Self = Self(4);
    /// 64-bit signed integer.
    pub const INT64: Self = Self(5);
    /// 32-bit floating point.
    pub const FLOAT32: Self = Self(6);
    /// 64-bit floating point.
    pub const FLOAT64: Self = Self(7);

    /// First index for dynamically allocated types.
    pub const FIRST_DYNAMIC: u32 = 8;

    /// Sentinel value indicating no type.
    pub const NONE: Self = Self(u32::MAX);

    /// Create an index from a raw u32 value.
    ///
    /// The caller must ensure the index is valid in the pool.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a pre-interned primitive.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::FIRST_DYNAMIC
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Human-readable name for primitives; `None` for dynamic types, which
    /// need a pool to render.
    #[inline]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("void"),
            1 => Some("bool"),
            2 => Some("int8"),
            3 => Some("int16"),
            4 => Some("int32"),
            5 => Some("int64"),
            6 => Some("float32"),
            7 => Some("float64"),
            _ => None,
        }
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "TypeId::NONE")
        } else if let Some(name) = self.name() {
            write!(f, "TypeId::{}", name.to_uppercase())
        } else {
            write!(f, "TypeId({})", self.0)
        }
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None if self.is_none() => f.write_str("<none>"),
            None => write!(f, "type#{}", self.0),
        }
    }
}

crate::static_assert_size!(TypeId, 4);
