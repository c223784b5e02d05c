//! Struct layout computation.
//!
//! Walks a struct's fields in declaration order, maintaining a running
//! offset and a running alignment:
//!
//! - primitive fields align to `min(size, 8)` (at least 1)
//! - pointer and function-reference fields align to 8
//! - embedded struct fields align to their own finalized alignment, so
//!   embedded types must be finalized first (dependency order)
//!
//! Each field's offset is the running offset rounded up to the field's
//! alignment; the struct's size is the final offset rounded up to the
//! struct's alignment (the max over all field alignments).

use crate::{TypeDesc, TypeFlags, TypeId, TypePool};

/// Round `offset` up to the next multiple of `align` (a power of two or any
/// positive value; layout only produces 1/2/4/8).
#[inline]
const fn align_up(offset: u32, align: u32) -> u32 {
    let rem = offset % align;
    if rem == 0 {
        offset
    } else {
        offset + (align - rem)
    }
}

impl TypePool {
    /// Alignment a field of type `ty` requires inside a struct.
    fn field_align(&self, ty: TypeId) -> u32 {
        match self.desc(ty) {
            TypeDesc::Primitive { size, .. } => (*size).clamp(1, 8),
            TypeDesc::Pointer { .. } | TypeDesc::Function(_) => 8,
            TypeDesc::Struct(s) => {
                debug_assert!(
                    self.flags(ty).contains(TypeFlags::LAYOUT_DONE),
                    "embedded struct `{}` laid out before its container",
                    s.name
                );
                s.align.max(1)
            }
        }
    }

    /// Compute field offsets, alignment, and total size for a struct.
    ///
    /// Call exactly once, after all fields are added and after every
    /// embedded struct is itself finalized. Re-running recomputes from
    /// scratch and overwrites the previous layout.
    pub fn finalize_layout(&mut self, strct: TypeId) {
        // Field sizes/alignments first: they read other pool entries, the
        // mutation below needs exclusive access to this one.
        let field_tys: Vec<TypeId> = match self.desc(strct) {
            TypeDesc::Struct(s) => s.fields.iter().map(|f| f.ty).collect(),
            other => unreachable!("finalize_layout on non-struct {other:?}"),
        };
        let layouts: Vec<(u32, u32)> = field_tys
            .iter()
            .map(|&ty| (self.field_align(ty), self.size_of(ty)))
            .collect();

        let mut offset = 0u32;
        let mut align = 1u32;
        let slot = self.struct_mut(strct);
        for (field, (field_align, field_size)) in slot.fields.iter_mut().zip(layouts) {
            offset = align_up(offset, field_align);
            field.offset = offset;
            offset += field_size;
            align = align.max(field_align);
        }
        slot.size = align_up(offset, align);
        slot.align = align;

        let (name, size) = (slot.name.clone(), slot.size);
        self.set_flags(strct, TypeFlags::LAYOUT_DONE);
        tracing::debug!(%name, size, align, "struct layout finalized");
    }
}
