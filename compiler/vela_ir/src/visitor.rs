//! Visitor trait for the builtin node hierarchy.
//!
//! One method per kind. Every default implementation forwards to the parent
//! kind's method, so a visitor that only cares about, say, expressions can
//! override `visit_expr` alone and still see every literal, call, and
//! identifier. The chain terminates at [`NodeVisitor::visit_node`], which
//! does nothing by default.
//!
//! The free `dispatch_*` functions are the function-pointer slots stored in
//! each kind's descriptor; [`crate::KindRegistry::dispatch`] reaches the
//! right one through a single table index.

use crate::Node;

/// Visitor over the builtin node hierarchy.
///
/// The visitor may mutate its own state; nodes are immutable.
pub trait NodeVisitor {
    /// Root handler; every unoverridden method ends up here.
    fn visit_node(&mut self, node: &Node) {
        let _ = node;
    }

    // === Statements ===

    fn visit_stmt(&mut self, node: &Node) {
        self.visit_node(node);
    }
    fn visit_expr_stmt(&mut self, node: &Node) {
        self.visit_stmt(node);
    }
    fn visit_block(&mut self, node: &Node) {
        self.visit_stmt(node);
    }
    fn visit_if(&mut self, node: &Node) {
        self.visit_stmt(node);
    }
    fn visit_while(&mut self, node: &Node) {
        self.visit_stmt(node);
    }
    fn visit_return(&mut self, node: &Node) {
        self.visit_stmt(node);
    }

    // === Declarations ===

    fn visit_decl(&mut self, node: &Node) {
        self.visit_stmt(node);
    }
    fn visit_var_decl(&mut self, node: &Node) {
        self.visit_decl(node);
    }
    fn visit_func_decl(&mut self, node: &Node) {
        self.visit_decl(node);
    }
    fn visit_class_decl(&mut self, node: &Node) {
        self.visit_decl(node);
    }

    // === Expressions ===

    fn visit_expr(&mut self, node: &Node) {
        self.visit_node(node);
    }
    fn visit_literal(&mut self, node: &Node) {
        self.visit_expr(node);
    }
    fn visit_int_lit(&mut self, node: &Node) {
        self.visit_literal(node);
    }
    fn visit_float_lit(&mut self, node: &Node) {
        self.visit_literal(node);
    }
    fn visit_str_lit(&mut self, node: &Node) {
        self.visit_literal(node);
    }
    fn visit_bool_lit(&mut self, node: &Node) {
        self.visit_literal(node);
    }
    fn visit_ident(&mut self, node: &Node) {
        self.visit_expr(node);
    }
    fn visit_binary(&mut self, node: &Node) {
        self.visit_expr(node);
    }
    fn visit_unary(&mut self, node: &Node) {
        self.visit_expr(node);
    }
    fn visit_call(&mut self, node: &Node) {
        self.visit_expr(node);
    }
    fn visit_member(&mut self, node: &Node) {
        self.visit_expr(node);
    }
    fn visit_assign(&mut self, node: &Node) {
        self.visit_expr(node);
    }
}

// Dispatch slots. One per kind, each a plain fn pointer so the descriptor
// table stays a flat array of thin pointers.

pub(crate) fn dispatch_node(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_node(n);
}
pub(crate) fn dispatch_stmt(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_stmt(n);
}
pub(crate) fn dispatch_expr_stmt(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_expr_stmt(n);
}
pub(crate) fn dispatch_block(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_block(n);
}
pub(crate) fn dispatch_if(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_if(n);
}
pub(crate) fn dispatch_while(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_while(n);
}
pub(crate) fn dispatch_return(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_return(n);
}
pub(crate) fn dispatch_decl(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_decl(n);
}
pub(crate) fn dispatch_var_decl(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_var_decl(n);
}
pub(crate) fn dispatch_func_decl(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_func_decl(n);
}
pub(crate) fn dispatch_class_decl(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_class_decl(n);
}
pub(crate) fn dispatch_expr(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_expr(n);
}
pub(crate) fn dispatch_literal(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_literal(n);
}
pub(crate) fn dispatch_int_lit(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_int_lit(n);
}
pub(crate) fn dispatch_float_lit(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_float_lit(n);
}
pub(crate) fn dispatch_str_lit(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_str_lit(n);
}
pub(crate) fn dispatch_bool_lit(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_bool_lit(n);
}
pub(crate) fn dispatch_ident(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_ident(n);
}
pub(crate) fn dispatch_binary(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_binary(n);
}
pub(crate) fn dispatch_unary(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_unary(n);
}
pub(crate) fn dispatch_call(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_call(n);
}
pub(crate) fn dispatch_member(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_member(n);
}
pub(crate) fn dispatch_assign(n: &Node, v: &mut dyn NodeVisitor) {
    v.visit_assign(n);
}
