//! Transient analysis context.
//!
//! A plain state bag the semantic analyzer threads through its walk: where
//! it currently is (class/method/namespace), which loops and scopes enclose
//! the current node. No invariants are enforced here; the analyzer owns the
//! push/pop discipline.

/// Mutable walk state for one analysis pass.
#[derive(Debug, Default, Clone)]
pub struct AnalysisContext {
    /// Name of the class being analyzed, if inside one.
    pub current_class: Option<String>,
    /// Name of the method or function being analyzed, if inside one.
    pub current_method: Option<String>,
    /// Enclosing namespace path, outermost first.
    pub namespace: Vec<String>,
    /// Labels of enclosing loops, innermost last.
    pub loop_stack: Vec<String>,
    /// Names of enclosing lexical scopes, innermost last.
    pub scope_stack: Vec<String>,
}

impl AnalysisContext {
    /// Fresh context at top level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lexical nesting depth.
    #[inline]
    pub fn scope_depth(&self) -> usize {
        self.scope_stack.len()
    }

    /// Enter a named scope.
    pub fn push_scope(&mut self, name: impl Into<String>) {
        self.scope_stack.push(name.into());
    }

    /// Leave the innermost scope. Returns its name, or `None` at top level.
    pub fn pop_scope(&mut self) -> Option<String> {
        self.scope_stack.pop()
    }

    /// Enter a loop body.
    pub fn push_loop(&mut self, label: impl Into<String>) {
        self.loop_stack.push(label.into());
    }

    /// Leave the innermost loop.
    pub fn pop_loop(&mut self) -> Option<String> {
        self.loop_stack.pop()
    }

    /// Check if the walk is currently inside any loop.
    #[inline]
    pub fn in_loop(&self) -> bool {
        !self.loop_stack.is_empty()
    }

    /// Fully qualified prefix for the current position, for diagnostics:
    /// `ns1.ns2.Class.method`.
    pub fn qualified_prefix(&self) -> String {
        let mut parts: Vec<&str> = self.namespace.iter().map(String::as_str).collect();
        if let Some(class) = &self.current_class {
            parts.push(class);
        }
        if let Some(method) = &self.current_method {
            parts.push(method);
        }
        parts.join(".")
    }
}
