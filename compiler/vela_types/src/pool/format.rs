//! Human-readable rendering of pool types.

use crate::{TypeDesc, TypeId, TypePool};

impl TypePool {
    /// Render a type for diagnostics: `int32`, `*Point`,
    /// `fn(int32, float64) -> bool`, `fn(str, ...) -> void`.
    pub fn display(&self, id: TypeId) -> String {
        let mut out = String::new();
        self.write_type(&mut out, id);
        out
    }

    fn write_type(&self, out: &mut String, id: TypeId) {
        match self.desc(id) {
            TypeDesc::Primitive { name, .. } => out.push_str(name),
            TypeDesc::Pointer { pointee } => {
                out.push('*');
                self.write_type(out, *pointee);
            }
            TypeDesc::Struct(s) => out.push_str(&s.name),
            TypeDesc::Function(f) => {
                out.push_str("fn(");
                for (i, &param) in f.params.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.write_type(out, param);
                }
                if f.varargs {
                    if !f.params.is_empty() {
                        out.push_str(", ");
                    }
                    out.push_str("...");
                }
                out.push_str(") -> ");
                self.write_type(out, f.ret);
            }
        }
    }
}
