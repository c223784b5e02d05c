//! The type pool: arena storage and builders for type descriptors.
//!
//! # Design
//!
//! - Descriptors live in a vector indexed by [`TypeId`]; referencing another
//!   type stores its id, never a deep copy of its graph.
//! - Primitives are pre-interned at fixed indices (see [`TypeId`]).
//! - Pointer types are interned through a cache, so requesting `*T` twice
//!   yields the same id.
//! - Structs are built incrementally (append-only) and frozen by
//!   [`finalize_layout`](TypePool::finalize_layout) in `layout.rs`.

mod format;


use rustc_hash::FxHashMap;

use crate::{Field, FunctionType, Method, StructType, TypeDesc, TypeFlags, TypeId};

/// Arena of type descriptors with parallel per-type flags.
///
/// Not internally synchronized: the build phase runs on one thread, and the
/// pool may be shared by `&` once every struct in it is finalized.
pub struct TypePool {
    types: Vec<TypeDesc>,
    flags: Vec<TypeFlags>,
    /// pointee -> pointer-to-pointee, so pointer types dedup on creation.
    pointer_cache: FxHashMap<TypeId, TypeId>,
}

/// Names and sizes of the pre-interned primitives, in [`TypeId`] order.
const PRIMITIVES: [(&str, u32); 8] = [
    ("void", 0),
    ("bool", 1),
    ("int8", 1),
    ("int16", 2),
    ("int32", 4),
    ("int64", 8),
    ("float32", 4),
    ("float64", 8),
];

impl TypePool {
    /// Create a pool with the primitives pre-interned.
    pub fn new() -> Self {
        let mut pool = TypePool {
            types: Vec::with_capacity(PRIMITIVES.len() + 16),
            flags: Vec::with_capacity(PRIMITIVES.len() + 16),
            pointer_cache: FxHashMap::default(),
        };
        for (name, size) in PRIMITIVES {
            pool.push(
                TypeDesc::Primitive { name, size },
                TypeFlags::IS_PRIMITIVE,
            );
        }
        pool
    }

    /// Number of types in the pool.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the pool is empty (never true: primitives are pre-interned).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// The descriptor for a type id.
    #[inline]
    pub fn desc(&self, id: TypeId) -> &TypeDesc {
        &self.types[id.raw() as usize]
    }

    /// The state flags for a type id.
    #[inline]
    pub fn flags(&self, id: TypeId) -> TypeFlags {
        self.flags[id.raw() as usize]
    }

    // === Constructors ===

    /// Create (or reuse) the pointer type `*pointee`.
    pub fn pointer(&mut self, pointee: TypeId) -> TypeId {
        if let Some(&existing) = self.pointer_cache.get(&pointee) {
            return existing;
        }
        let id = self.push(TypeDesc::Pointer { pointee }, TypeFlags::IS_POINTER);
        self.pointer_cache.insert(pointee, id);
        id
    }

    /// Create a function type `(params...) -> ret`.
    pub fn function(&mut self, params: &[TypeId], ret: TypeId, varargs: bool) -> TypeId {
        let mut flags = TypeFlags::IS_FUNCTION;
        if varargs {
            flags |= TypeFlags::HAS_VARARGS;
        }
        self.push(
            TypeDesc::Function(FunctionType {
                params: params.to_vec(),
                ret,
                varargs,
            }),
            flags,
        )
    }

    /// Create an empty struct shell; populate with
    /// [`add_field`](Self::add_field)/[`add_method`](Self::add_method), then
    /// freeze with [`finalize_layout`](Self::finalize_layout).
    pub fn structure(&mut self, name: impl Into<String>) -> TypeId {
        self.push(
            TypeDesc::Struct(StructType {
                name: name.into(),
                fields: Vec::new(),
                methods: Vec::new(),
                size: 0,
                align: 0,
            }),
            TypeFlags::IS_STRUCT,
        )
    }

    // === Struct builders ===

    /// Append a field. Offset stays undefined until layout finalization.
    ///
    /// Duplicate names are accepted; lookup returns the first match.
    /// Calling this on a non-struct id is a compiler bug.
    pub fn add_field(&mut self, strct: TypeId, name: impl Into<String>, ty: TypeId) {
        let slot = self.struct_mut(strct);
        slot.fields.push(Field {
            name: name.into(),
            ty,
            offset: 0,
        });
    }

    /// Append a method. `ty` should reference a function descriptor.
    pub fn add_method(&mut self, strct: TypeId, name: impl Into<String>, ty: TypeId) {
        let slot = self.struct_mut(strct);
        slot.methods.push(Method {
            name: name.into(),
            ty,
        });
    }

    // === Lookup ===

    /// First field with the given name, scanning in insertion order.
    pub fn find_field(&self, strct: TypeId, name: &str) -> Option<&Field> {
        match self.desc(strct) {
            TypeDesc::Struct(s) => s.fields.iter().find(|f| f.name == name),
            _ => None,
        }
    }

    /// First method with the given name, scanning in insertion order.
    pub fn find_method(&self, strct: TypeId, name: &str) -> Option<&Method> {
        match self.desc(strct) {
            TypeDesc::Struct(s) => s.methods.iter().find(|m| m.name == name),
            _ => None,
        }
    }

    // === Size queries ===

    /// Size of a type in bytes.
    ///
    /// For structs this is the finalized, padded size; reading it before
    /// finalization is a compiler bug (zero in release builds).
    pub fn size_of(&self, id: TypeId) -> u32 {
        match self.desc(id) {
            TypeDesc::Primitive { size, .. } => *size,
            // Pointers and function references are one machine word.
            TypeDesc::Pointer { .. } | TypeDesc::Function(_) => 8,
            TypeDesc::Struct(s) => {
                debug_assert!(
                    self.flags(id).contains(TypeFlags::LAYOUT_DONE),
                    "size_of before finalize_layout on `{}`",
                    s.name
                );
                s.size
            }
        }
    }

    /// Alignment of a type in bytes (always at least 1).
    pub fn align_of(&self, id: TypeId) -> u32 {
        match self.desc(id) {
            TypeDesc::Primitive { size, .. } => (*size).clamp(1, 8),
            TypeDesc::Pointer { .. } | TypeDesc::Function(_) => 8,
            TypeDesc::Struct(s) => {
                debug_assert!(
                    self.flags(id).contains(TypeFlags::LAYOUT_DONE),
                    "align_of before finalize_layout on `{}`",
                    s.name
                );
                s.align.max(1)
            }
        }
    }

    // === Internals ===

    #[allow(clippy::cast_possible_truncation)]
    fn push(&mut self, desc: TypeDesc, flags: TypeFlags) -> TypeId {
        let id = TypeId::from_raw(self.types.len() as u32);
        self.types.push(desc);
        self.flags.push(flags);
        id
    }

    pub(crate) fn struct_mut(&mut self, strct: TypeId) -> &mut StructType {
        match &mut self.types[strct.raw() as usize] {
            TypeDesc::Struct(s) => s,
            other => unreachable!("expected struct descriptor, found {other:?}"),
        }
    }

    pub(crate) fn set_flags(&mut self, id: TypeId, flags: TypeFlags) {
        self.flags[id.raw() as usize] |= flags;
    }
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}
