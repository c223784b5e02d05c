//! Per-type state bits.

use bitflags::bitflags;

bitflags! {
    /// State bits tracked per pool entry.
    ///
    /// Shape bits are set at construction; `LAYOUT_DONE` is set by
    /// [`crate::TypePool::finalize_layout`].
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
    pub struct TypeFlags: u8 {
        /// Pre-interned primitive.
        const IS_PRIMITIVE = 1 << 0;
        /// Pointer type.
        const IS_POINTER = 1 << 1;
        /// Field-bearing struct.
        const IS_STRUCT = 1 << 2;
        /// Function signature.
        const IS_FUNCTION = 1 << 3;
        /// Struct layout has been finalized (offsets/size/align valid).
        const LAYOUT_DONE = 1 << 4;
        /// Function accepts variadic arguments.
        const HAS_VARARGS = 1 << 5;
    }
}

impl TypeFlags {
    /// Check whether offsets, size, and alignment may be read.
    ///
    /// True for every non-struct shape; structs gain it at finalization.
    #[inline]
    pub fn layout_ready(self) -> bool {
        !self.contains(Self::IS_STRUCT) || self.contains(Self::LAYOUT_DONE)
    }
}
