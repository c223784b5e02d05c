//! Structural type equality and hashing.
//!
//! Used by the analyzer's type-dedup cache: two descriptors denote the same
//! type when their shapes match recursively, regardless of pool identity.
//! Type graphs are acyclic by construction (no recursive aliases are
//! modeled), so the recursion terminates.
//!
//! The hash is deterministic and order-sensitive: each parameter folds into
//! a rotated accumulator multiplied by a fixed large odd constant, and a
//! fixed marker folds in when varargs is set. Equal descriptors hash
//! identically.

use crate::{TypeDesc, TypeId, TypePool};

/// Large odd mixing constant (the 64-bit golden-ratio multiplier).
const MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Folded into a function hash when the signature is variadic.
const VARARGS_MARKER: u64 = 0x5851_F42D_4C95_7F2D;

/// Per-shape seeds so `*int32` and a one-field struct of `int32` cannot
/// collide trivially.
const SEED_PRIMITIVE: u64 = 0x01;
const SEED_POINTER: u64 = 0xA3;
const SEED_STRUCT: u64 = 0xC5;
const SEED_FUNCTION: u64 = 0xE7;

#[inline]
fn mix(acc: u64, value: u64) -> u64 {
    acc.rotate_left(7) ^ value.wrapping_mul(MIX)
}

fn mix_str(acc: u64, s: &str) -> u64 {
    s.bytes().fold(acc, |h, b| mix(h, u64::from(b)))
}

impl TypePool {
    /// Structural equality over type descriptors.
    ///
    /// Pool identity is a fast path: interned ids equal by index are equal
    /// structurally. Two function descriptors are equal iff their varargs
    /// flags, parameter counts, return types, and parameter types (pairwise,
    /// in order) all match. Structs compare by name and fields pairwise;
    /// methods do not participate, a struct's identity is its data shape.
    pub fn type_eq(&self, a: TypeId, b: TypeId) -> bool {
        if a == b {
            return true;
        }
        match (self.desc(a), self.desc(b)) {
            (
                TypeDesc::Primitive { name: n1, size: s1 },
                TypeDesc::Primitive { name: n2, size: s2 },
            ) => n1 == n2 && s1 == s2,
            (TypeDesc::Pointer { pointee: p1 }, TypeDesc::Pointer { pointee: p2 }) => {
                self.type_eq(*p1, *p2)
            }
            (TypeDesc::Function(f), TypeDesc::Function(g)) => {
                f.varargs == g.varargs
                    && f.params.len() == g.params.len()
                    && self.type_eq(f.ret, g.ret)
                    && f.params
                        .iter()
                        .zip(&g.params)
                        .all(|(&x, &y)| self.type_eq(x, y))
            }
            (TypeDesc::Struct(s), TypeDesc::Struct(t)) => {
                s.name == t.name
                    && s.fields.len() == t.fields.len()
                    && s.fields
                        .iter()
                        .zip(&t.fields)
                        .all(|(x, y)| x.name == y.name && self.type_eq(x.ty, y.ty))
            }
            _ => false,
        }
    }

    /// Structural hash, agreeing with [`type_eq`](Self::type_eq): equal
    /// descriptors hash identically.
    ///
    /// Offsets, sizes, and methods are excluded for the same reason they are
    /// excluded from equality.
    pub fn type_hash(&self, id: TypeId) -> u64 {
        match self.desc(id) {
            TypeDesc::Primitive { name, size } => {
                mix_str(mix(SEED_PRIMITIVE, u64::from(*size)), name)
            }
            TypeDesc::Pointer { pointee } => mix(SEED_POINTER, self.type_hash(*pointee)),
            TypeDesc::Function(f) => {
                let mut h = mix(SEED_FUNCTION, self.type_hash(f.ret));
                for &param in &f.params {
                    h = mix(h, self.type_hash(param));
                }
                if f.varargs {
                    h ^= VARARGS_MARKER;
                }
                h
            }
            TypeDesc::Struct(s) => {
                let mut h = mix_str(SEED_STRUCT, &s.name);
                for field in &s.fields {
                    h = mix_str(h, &field.name);
                    h = mix(h, self.type_hash(field.ty));
                }
                h
            }
        }
    }
}
