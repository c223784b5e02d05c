//! The compiler's builtin node kind hierarchy.
//!
//! Registration runs from one startup routine in declaration order, so the
//! assigned ids are deterministic across builds. The hierarchy is closed and
//! single-rooted by construction: every kind here names its parent, and only
//! `node` has none.

use crate::visitor as v;
use crate::{KindRef, KindRegistry, RegisterError};

/// Handles for every builtin node kind.
///
/// Obtained from [`BuiltinKinds::register`]; the handles stay valid for the
/// registry's lifetime and are the canonical way to name a kind in subtype
/// queries and node construction.
#[derive(Copy, Clone, Debug)]
pub struct BuiltinKinds {
    /// Hierarchy root.
    pub node: KindRef,

    // Statements
    pub stmt: KindRef,
    pub expr_stmt: KindRef,
    pub block: KindRef,
    pub if_stmt: KindRef,
    pub while_stmt: KindRef,
    pub return_stmt: KindRef,

    // Declarations (a statement subtree)
    pub decl: KindRef,
    pub var_decl: KindRef,
    pub func_decl: KindRef,
    pub class_decl: KindRef,

    // Expressions
    pub expr: KindRef,
    pub literal: KindRef,
    pub int_lit: KindRef,
    pub float_lit: KindRef,
    pub str_lit: KindRef,
    pub bool_lit: KindRef,
    pub ident: KindRef,
    pub binary: KindRef,
    pub unary: KindRef,
    pub call: KindRef,
    pub member: KindRef,
    pub assign: KindRef,
}

impl BuiltinKinds {
    /// Total number of builtin kinds.
    pub const COUNT: usize = 23;

    /// Register the whole hierarchy into `registry`, in declaration order.
    ///
    /// The registry must still be uninitialized; call
    /// [`KindRegistry::initialize`] afterwards.
    pub fn register(registry: &mut KindRegistry) -> Result<Self, RegisterError> {
        let node = registry.register("node", None, v::dispatch_node)?;

        let stmt = registry.register("stmt", Some(node), v::dispatch_stmt)?;
        let expr_stmt = registry.register("expr_stmt", Some(stmt), v::dispatch_expr_stmt)?;
        let block = registry.register("block", Some(stmt), v::dispatch_block)?;
        let if_stmt = registry.register("if", Some(stmt), v::dispatch_if)?;
        let while_stmt = registry.register("while", Some(stmt), v::dispatch_while)?;
        let return_stmt = registry.register("return", Some(stmt), v::dispatch_return)?;

        let decl = registry.register("decl", Some(stmt), v::dispatch_decl)?;
        let var_decl = registry.register("var_decl", Some(decl), v::dispatch_var_decl)?;
        let func_decl = registry.register("func_decl", Some(decl), v::dispatch_func_decl)?;
        let class_decl = registry.register("class_decl", Some(decl), v::dispatch_class_decl)?;

        let expr = registry.register("expr", Some(node), v::dispatch_expr)?;
        let literal = registry.register("literal", Some(expr), v::dispatch_literal)?;
        let int_lit = registry.register("int_lit", Some(literal), v::dispatch_int_lit)?;
        let float_lit = registry.register("float_lit", Some(literal), v::dispatch_float_lit)?;
        let str_lit = registry.register("str_lit", Some(literal), v::dispatch_str_lit)?;
        let bool_lit = registry.register("bool_lit", Some(literal), v::dispatch_bool_lit)?;
        let ident = registry.register("ident", Some(expr), v::dispatch_ident)?;
        let binary = registry.register("binary", Some(expr), v::dispatch_binary)?;
        let unary = registry.register("unary", Some(expr), v::dispatch_unary)?;
        let call = registry.register("call", Some(expr), v::dispatch_call)?;
        let member = registry.register("member", Some(expr), v::dispatch_member)?;
        let assign = registry.register("assign", Some(expr), v::dispatch_assign)?;

        Ok(BuiltinKinds {
            node,
            stmt,
            expr_stmt,
            block,
            if_stmt,
            while_stmt,
            return_stmt,
            decl,
            var_decl,
            func_decl,
            class_decl,
            expr,
            literal,
            int_lit,
            float_lit,
            str_lit,
            bool_lit,
            ident,
            binary,
            unary,
            call,
            member,
            assign,
        })
    }

    /// All handles in declaration order, for exhaustive iteration in tests
    /// and tooling.
    pub fn all(&self) -> [KindRef; Self::COUNT] {
        [
            self.node,
            self.stmt,
            self.expr_stmt,
            self.block,
            self.if_stmt,
            self.while_stmt,
            self.return_stmt,
            self.decl,
            self.var_decl,
            self.func_decl,
            self.class_decl,
            self.expr,
            self.literal,
            self.int_lit,
            self.float_lit,
            self.str_lit,
            self.bool_lit,
            self.ident,
            self.binary,
            self.unary,
            self.call,
            self.member,
            self.assign,
        ]
    }
}
