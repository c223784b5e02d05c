//! Type descriptors.
//!
//! The tagged variants stored in the pool. Pointer and function descriptors
//! are immutable once constructed; struct descriptors mutate only during
//! their build phase and freeze at layout finalization.

use crate::TypeId;

/// A type descriptor: one of the four shapes the compiler models.
///
/// Compared and hashed structurally through the pool
/// ([`crate::TypePool::type_eq`]), never by address.
#[derive(Clone, Debug)]
pub enum TypeDesc {
    /// Builtin scalar with a fixed byte size.
    Primitive {
        /// Diagnostic name (`int32`, `bool`, ...).
        name: &'static str,
        /// Size in bytes.
        size: u32,
    },
    /// Pointer to another type. One machine word: size 8, alignment 8.
    Pointer {
        /// The pointed-to type.
        pointee: TypeId,
    },
    /// Composite type with named, ordered fields and methods.
    Struct(StructType),
    /// Function signature.
    Function(FunctionType),
}

/// A named struct field.
#[derive(Clone, Debug)]
pub struct Field {
    pub name: String,
    /// Field type (pool reference, not owned).
    pub ty: TypeId,
    /// Byte offset within the struct; 0 until layout finalization.
    pub offset: u32,
}

/// A named struct method. The type always references a function descriptor.
#[derive(Clone, Debug)]
pub struct Method {
    pub name: String,
    pub ty: TypeId,
}

/// Composite type: ordered fields and methods plus computed layout.
///
/// `size` and `align` are zero until [`crate::TypePool::finalize_layout`]
/// runs; after that they are immutable for the descriptor's lifetime.
/// A struct may itself appear as a field's type (composition), in which
/// case it must be finalized before the outer struct.
#[derive(Clone, Debug)]
pub struct StructType {
    pub name: String,
    /// Fields, in declaration order. Append-only during the build phase;
    /// duplicate names are not rejected (lookup returns the first match).
    pub fields: Vec<Field>,
    /// Methods, in declaration order.
    pub methods: Vec<Method>,
    /// Total size in bytes, padded to `align`.
    pub size: u32,
    /// Alignment: the maximum alignment over all fields, at least 1.
    pub align: u32,
}

/// Function signature: parameter types, return type, varargs flag.
///
/// Immutable once constructed.
#[derive(Clone, Debug)]
pub struct FunctionType {
    /// Parameter types, in order.
    pub params: Vec<TypeId>,
    pub ret: TypeId,
    pub varargs: bool,
}
